use tracing::{debug, info, warn};

use crate::dijkstra::reachable_set;
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::set::VertexSet;
use crate::set_cover::set_cover;

/// Schools picked to cover the houses of a graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    /// Selected schools, numbered from 0 at the first school label.
    pub schools: Vec<usize>,
    /// Houses that no school reaches within the distance bound.
    pub uncovered: Vec<NodeId>,
}

impl Plan {
    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }
}

/// Runs the whole pipeline: connectivity gate, one bounded Dijkstra per
/// school, then the greedy cover over the houses.
///
/// A graph that is not fully connected is rejected before any shortest path
/// work is done.
pub fn plan(graph: &mut Graph) -> Result<Plan> {
    let vertex_count = graph.vertex_count();
    if !graph.check_graph(0)? {
        let reached = (0..vertex_count).filter(|&v| graph.is_visited(v)).count();
        return Err(Error::Disconnected {
            reached,
            vertex_count,
        });
    }
    info!(
        houses = graph.house_count(),
        schools = graph.school_count(),
        edges = graph.edge_count(),
        "graph is connected"
    );
    let graph = &*graph;

    let reachability = graph
        .schools()
        .map(|school| reachable_set(graph, school))
        .collect::<Result<Vec<VertexSet>>>()?;
    for (school, set) in graph.schools().zip(&reachability) {
        debug!(school, reach = set.len(), "reachability set");
    }

    let universe: VertexSet = graph.houses().collect();
    let cover = set_cover(&reachability, universe);

    let first_school = graph.house_count();
    let schools = cover
        .selected
        .iter()
        .map(|&label| label - first_school)
        .collect();
    let uncovered: Vec<NodeId> = cover.uncovered.iter().collect();
    if uncovered.is_empty() {
        info!(selected = cover.selected.len(), "all houses covered");
    } else {
        warn!(
            selected = cover.selected.len(),
            ?uncovered,
            "some houses are out of reach of every school"
        );
    }

    Ok(Plan { schools, uncovered })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(houses: usize, schools: usize, edges: &[(NodeId, NodeId, f64)]) -> Graph {
        let mut g = Graph::with_partition(houses, schools).unwrap();
        for &(a, b, d) in edges {
            g.add_edge(a, b, d).unwrap();
            g.add_edge(b, a, d).unwrap();
        }
        g
    }

    #[test]
    fn one_central_school_covers_all() {
        // Houses 0..4, school 4 is central, school 5 hangs off house 0.
        let mut g = network(
            4,
            2,
            &[
                (4, 0, 100.0),
                (4, 1, 100.0),
                (4, 2, 100.0),
                (4, 3, 100.0),
                (5, 0, 50.0),
            ],
        );
        let plan = plan(&mut g).unwrap();
        assert_eq!(plan.schools, vec![0]);
        assert!(plan.is_complete());
    }

    #[test]
    fn distant_houses_need_a_second_school() {
        // Houses 0 and 1 hang off school 3; house 2 is 2000 away from it, next to school 4.
        let mut g = network(
            3,
            2,
            &[(0, 3, 10.0), (1, 3, 20.0), (3, 2, 2000.0), (2, 4, 5.0)],
        );
        let plan = plan(&mut g).unwrap();
        assert_eq!(plan.schools, vec![0, 1]);
        assert!(plan.is_complete());
    }

    #[test]
    fn disconnected_graph_is_rejected() {
        let mut g = network(2, 2, &[(0, 2, 1.0), (1, 3, 1.0)]);
        match plan(&mut g) {
            Err(Error::Disconnected {
                reached,
                vertex_count,
            }) => {
                assert_eq!(reached, 2);
                assert_eq!(vertex_count, 4);
            }
            other => panic!("expected a disconnected error, got {other:?}"),
        }
    }

    #[test]
    fn house_beyond_every_bound_is_reported() {
        // House 1 is connected, but only through a 5000 long road.
        let mut g = network(2, 1, &[(2, 0, 10.0), (0, 1, 5000.0)]);
        let plan = plan(&mut g).unwrap();
        assert_eq!(plan.schools, vec![0]);
        assert_eq!(plan.uncovered, vec![1]);
        assert!(!plan.is_complete());
    }
}
