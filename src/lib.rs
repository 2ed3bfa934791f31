pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod indexed_heap;
pub mod input;
pub mod planner;
pub mod set;
pub mod set_cover;

pub use dijkstra::{reachable_set, DISTANCE_BOUND};
pub use error::{Error, Result};
pub use graph::{Cost, Edge, Graph, NodeId};
pub use indexed_heap::IndexedMinHeap;
pub use planner::{plan, Plan};
pub use set::VertexSet;
pub use set_cover::{set_cover, Cover};
