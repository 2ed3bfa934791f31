// Greedy maximum-coverage over per-school reachability sets. Approximate, not exact.
use tracing::{debug, warn};

use crate::graph::NodeId;
use crate::set::VertexSet;

/// Result of a greedy cover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cover {
    /// Head label of each chosen candidate, in the order chosen.
    pub selected: Vec<NodeId>,
    /// Universe elements no chosen candidate reached. Empty when the cover is complete.
    pub uncovered: VertexSet,
}

impl Cover {
    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }
}

/// Repeatedly picks the candidate with the largest overlap with what is left
/// of `universe` (lowest index on ties) and removes its elements from it.
///
/// A candidate is recorded by its first element, which for a reachability set
/// is the school it was grown from. The label is skipped if it is already in
/// the selection. The loop gives up after `candidates.len()` rounds; whatever
/// is still in the universe then is returned as [`Cover::uncovered`].
pub fn set_cover(candidates: &[VertexSet], mut universe: VertexSet) -> Cover {
    let mut selected: Vec<NodeId> = Vec::new();
    let mut rounds = 0;

    while !universe.is_empty() {
        if rounds == candidates.len() {
            warn!(
                uncovered = universe.len(),
                rounds, "no candidate covers the remaining elements"
            );
            break;
        }

        let mut best = 0;
        let mut best_gain = 0;
        for (index, candidate) in candidates.iter().enumerate() {
            let gain = candidate.intersection_len(&universe);
            if gain > best_gain {
                best_gain = gain;
                best = index;
            }
        }

        let chosen = &candidates[best];
        universe.complement(chosen);
        debug!(
            candidate = best,
            gain = best_gain,
            remaining = universe.len(),
            "cover round"
        );

        if let Some(label) = chosen.head() {
            if !selected.contains(&label) {
                selected.push(label);
            }
        }
        rounds += 1;
    }

    Cover {
        selected,
        uncovered: universe,
    }
}
