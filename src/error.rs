use std::collections::TryReserveError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("a graph needs at least one vertex")]
    EmptyGraph,

    #[error("vertex {label} is out of range for a graph of {vertex_count} vertices")]
    VertexOutOfRange { label: usize, vertex_count: usize },

    #[error("graph is not fully connected: reached {reached} of {vertex_count} vertices")]
    Disconnected { reached: usize, vertex_count: usize },

    #[error("ran out of memory growing heap storage")]
    ResourceExhausted(#[from] TryReserveError),

    #[error("payload {0} is too large to index")]
    PayloadTooLarge(usize),

    #[error("payload {0} is already queued in the heap")]
    DuplicatePayload(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
