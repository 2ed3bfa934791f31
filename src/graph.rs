use std::fmt;

use crate::error::{Error, Result};

pub type NodeId = usize;
pub type Cost = f64;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub to: NodeId,
    pub dist: Cost,
}

#[derive(Clone, Debug)]
struct Vertex {
    label: NodeId,
    visited: bool,
    edges: Vec<Edge>,
}

/// Adjacency-list road network of houses and schools.
///
/// Labels `0..house_count` are houses and `house_count..vertex_count` are
/// schools. Edges are directed as stored; callers mirror every edge to get an
/// undirected network.
#[derive(Clone, Debug)]
pub struct Graph {
    vertices: Vec<Vertex>,
    house_count: usize,
}

impl Graph {
    /// Creates `vertex_count` isolated vertices, all of them counted as schools.
    pub fn new(vertex_count: usize) -> Result<Self> {
        Self::with_partition(0, vertex_count)
    }

    pub fn with_partition(house_count: usize, school_count: usize) -> Result<Self> {
        let vertex_count = house_count + school_count;
        if vertex_count == 0 {
            return Err(Error::EmptyGraph);
        }
        let vertices = (0..vertex_count)
            .map(|label| Vertex {
                label,
                visited: false,
                edges: Vec::new(),
            })
            .collect();
        Ok(Self {
            vertices,
            house_count,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn house_count(&self) -> usize {
        self.house_count
    }

    pub fn school_count(&self) -> usize {
        self.vertices.len() - self.house_count
    }

    pub fn houses(&self) -> std::ops::Range<NodeId> {
        0..self.house_count
    }

    pub fn schools(&self) -> std::ops::Range<NodeId> {
        self.house_count..self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.edges.len()).sum()
    }

    fn check_label(&self, label: NodeId) -> Result<()> {
        if label < self.vertices.len() {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                label,
                vertex_count: self.vertices.len(),
            })
        }
    }

    /// Appends the directed edge `v -> u`. The mirror edge is not added.
    pub fn add_edge(&mut self, v: NodeId, u: NodeId, dist: Cost) -> Result<()> {
        self.check_label(v)?;
        self.check_label(u)?;
        self.vertices[v].edges.push(Edge { to: u, dist });
        Ok(())
    }

    /// Removes one copy of `v -> u` if present. Edge order of `v` is not kept.
    ///
    /// # Panics
    /// If `v` is not a vertex of this graph.
    pub fn delete_edge(&mut self, v: NodeId, u: NodeId) -> bool {
        let edges = &mut self.vertices[v].edges;
        match edges.iter().position(|e| e.to == u) {
            Some(i) => {
                edges.swap_remove(i);
                true
            }
            None => false,
        }
    }

    /// # Panics
    /// If `v` is not a vertex of this graph.
    pub fn has_edge(&self, v: NodeId, u: NodeId) -> bool {
        self.vertices[v].edges.iter().any(|e| e.to == u)
    }

    /// # Panics
    /// If `v` is not a vertex of this graph.
    pub fn edges(&self, v: NodeId) -> &[Edge] {
        &self.vertices[v].edges
    }

    pub fn label(&self, v: NodeId) -> NodeId {
        self.vertices[v].label
    }

    pub fn set_visited(&mut self, v: NodeId, visited: bool) {
        self.vertices[v].visited = visited;
    }

    pub fn is_visited(&self, v: NodeId) -> bool {
        self.vertices[v].visited
    }

    pub fn reset_visited(&mut self) {
        for vertex in &mut self.vertices {
            vertex.visited = false;
        }
    }

    /// Depth-first walk from `v` over unvisited vertices, marking each one.
    /// Returns how many vertices this call marked.
    pub fn explore(&mut self, v: NodeId) -> usize {
        let mut marked = 0;
        let mut stack = vec![v];
        while let Some(node_id) = stack.pop() {
            if self.vertices[node_id].visited {
                continue;
            }
            self.vertices[node_id].visited = true;
            marked += 1;
            // Push in reverse so neighbours are entered in edge order, like the recursive walk.
            for edge in self.vertices[node_id].edges.iter().rev() {
                if !self.vertices[edge.to].visited {
                    stack.push(edge.to);
                }
            }
        }
        marked
    }

    /// Returns `Ok(true)` when a walk from `v` reaches every vertex.
    pub fn check_graph(&mut self, v: NodeId) -> Result<bool> {
        self.check_label(v)?;
        self.reset_visited();
        let reached = self.explore(v);
        Ok(reached == self.vertices.len())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            writeln!(f, "Label is: {}", vertex.label)?;
            writeln!(f, "Number of Edges: {}", vertex.edges.len())?;
            for edge in &vertex.edges {
                writeln!(
                    f,
                    "Edge label connected: {}, Distance: {:.6} meters",
                    edge.to, edge.dist
                )?;
            }
        }
        Ok(())
    }
}
