use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{Cost, Graph, NodeId};
use crate::indexed_heap::IndexedMinHeap;
use crate::set::VertexSet;

/// Houses further than this from a school are not covered by it, even when a path exists.
pub const DISTANCE_BOUND: Cost = 1000.0;

/// Bounded Dijkstra from `source`. Returns the vertices within
/// [`DISTANCE_BOUND`] in the order they were settled (non-decreasing
/// distance), so `source` itself always comes first.
///
/// All edge weights must be non-negative; this is not checked.
pub fn reachable_set(graph: &Graph, source: NodeId) -> Result<VertexSet> {
    reachable_within(graph, source, DISTANCE_BOUND)
}

pub(crate) fn reachable_within(graph: &Graph, source: NodeId, bound: Cost) -> Result<VertexSet> {
    let n = graph.vertex_count();
    if source >= n {
        return Err(Error::VertexOutOfRange {
            label: source,
            vertex_count: n,
        });
    }

    let mut dist = vec![f64::INFINITY; n];
    let mut heap = IndexedMinHeap::with_capacity(n);
    for node_id in 0..n {
        heap.insert(graph.label(node_id), f64::INFINITY)?;
    }
    heap.change_key(source, 0.0);
    dist[source] = 0.0;
    trace!(source, heap = %heap, "seeded queue");

    let mut settled = VertexSet::new();
    while let Some((node_id, cost)) = heap.pop() {
        if cost > bound {
            break;
        }
        for edge in graph.edges(node_id) {
            let next_cost = cost + edge.dist;
            if next_cost < dist[edge.to] {
                dist[edge.to] = next_cost;
                heap.change_key(edge.to, next_cost);
            }
        }
        settled.insert_at_foot(node_id);
    }

    debug!(source, reached = settled.len(), "bounded dijkstra done");
    Ok(settled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected(n: usize, edges: &[(NodeId, NodeId, Cost)]) -> Graph {
        let mut g = Graph::new(n).unwrap();
        for &(a, b, d) in edges {
            g.add_edge(a, b, d).unwrap();
            g.add_edge(b, a, d).unwrap();
        }
        g
    }

    fn order(set: &VertexSet) -> Vec<NodeId> {
        set.iter().collect()
    }

    #[test]
    fn source_comes_first() {
        let g = undirected(3, &[(0, 1, 5.0), (1, 2, 5.0)]);
        let set = reachable_set(&g, 2).unwrap();
        assert_eq!(set.head(), Some(2));
        assert_eq!(order(&set), vec![2, 1, 0]);
    }

    #[test]
    fn star_is_settled_by_increasing_distance() {
        let g = undirected(4, &[(0, 3, 3.0), (0, 1, 1.0), (0, 2, 2.0)]);
        let set = reachable_set(&g, 0).unwrap();
        assert_eq!(order(&set), vec![0, 1, 2, 3]);
    }

    #[test]
    fn unit_weights_give_breadth_first_layers() {
        //   0 - 1 - 3
        //   |   |
        //   2 - 4 - 5
        let g = undirected(
            6,
            &[
                (0, 1, 1.0),
                (0, 2, 1.0),
                (1, 3, 1.0),
                (1, 4, 1.0),
                (2, 4, 1.0),
                (4, 5, 1.0),
            ],
        );
        let set = reachable_set(&g, 0).unwrap();
        let layer = |v: NodeId| match v {
            0 => 0,
            1 | 2 => 1,
            3 | 4 => 2,
            _ => 3,
        };
        let layers: Vec<usize> = set.iter().map(layer).collect();
        assert_eq!(set.len(), 6);
        assert!(layers.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn shorter_multi_hop_path_wins() {
        let g = undirected(4, &[(0, 3, 10.0), (0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]);
        assert_eq!(order(&reachable_set(&g, 0).unwrap()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn vertices_past_the_bound_are_left_out() {
        let g = undirected(4, &[(0, 1, 600.0), (1, 2, 400.0), (2, 3, 0.5)]);
        // 2 sits exactly on the bound, 3 just past it.
        assert_eq!(order(&reachable_set(&g, 0).unwrap()), vec![0, 1, 2]);
    }

    #[test]
    fn custom_bound_cuts_early() {
        let g = undirected(3, &[(0, 1, 2.0), (1, 2, 2.0)]);
        let set = reachable_within(&g, 0, 3.0).unwrap();
        assert_eq!(order(&set), vec![0, 1]);
    }

    #[test]
    fn unreachable_vertices_are_left_out() {
        let g = undirected(4, &[(0, 1, 1.0), (2, 3, 1.0)]);
        assert_eq!(order(&reachable_set(&g, 3).unwrap()), vec![3, 2]);
    }

    #[test]
    fn zero_weight_edges_are_fine() {
        let g = undirected(3, &[(0, 1, 0.0), (1, 2, 0.0)]);
        let set = reachable_set(&g, 1).unwrap();
        assert_eq!(set.head(), Some(1));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let g = undirected(
            5,
            &[(0, 1, 3.0), (1, 2, 4.0), (0, 3, 2.0), (3, 4, 7.0), (2, 4, 1.0)],
        );
        let first = reachable_set(&g, 4).unwrap();
        let second = reachable_set(&g, 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_source_is_an_error() {
        let g = Graph::new(2).unwrap();
        assert!(matches!(
            reachable_set(&g, 2),
            Err(Error::VertexOutOfRange {
                label: 2,
                vertex_count: 2
            })
        ));
    }
}
