use std::collections::VecDeque;

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

use crate::graph::NodeId;

/// Ordered collection of vertex labels.
///
/// Elements keep insertion order (head first). A per-label occurrence count
/// answers membership in O(1), which is what intersection and complement lean
/// on. Duplicates are allowed; the pipeline only ever builds distinct sets.
#[derive(Clone, Debug, Default)]
pub struct VertexSet {
    items: VecDeque<NodeId>,
    counts: HashMap<NodeId, usize, FnvBuildHasher>,
}

impl VertexSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn count_in(&mut self, value: NodeId) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    fn count_out(&mut self, value: NodeId) {
        if let hashbrown::hash_map::Entry::Occupied(mut entry) = self.counts.entry(value) {
            if *entry.get() > 1 {
                *entry.get_mut() -= 1;
            } else {
                entry.remove();
            }
        }
    }

    pub fn insert_at_head(&mut self, value: NodeId) {
        self.items.push_front(value);
        self.count_in(value);
    }

    pub fn insert_at_foot(&mut self, value: NodeId) {
        self.items.push_back(value);
        self.count_in(value);
    }

    pub fn head(&self) -> Option<NodeId> {
        self.items.front().copied()
    }

    pub fn foot(&self) -> Option<NodeId> {
        self.items.back().copied()
    }

    /// Removes and returns the first element.
    pub fn pop_head(&mut self) -> Option<NodeId> {
        let value = self.items.pop_front()?;
        self.count_out(value);
        Some(value)
    }

    /// Removes the first occurrence of `value`. Returns `false` if it was not there.
    pub fn delete_element(&mut self, value: NodeId) -> bool {
        if !self.contains(value) {
            return false;
        }
        match self.items.iter().position(|&x| x == value) {
            Some(i) => {
                self.items.remove(i);
                self.count_out(value);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: NodeId) -> bool {
        self.counts.contains_key(&value)
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.items.iter().copied()
    }

    /// Elements of `self` that are also in `other`, in `self`'s order.
    pub fn intersect(&self, other: &VertexSet) -> VertexSet {
        self.iter().filter(|&x| other.contains(x)).collect()
    }

    /// Number of elements [`intersect`](Self::intersect) would return, without building the set.
    pub fn intersection_len(&self, other: &VertexSet) -> usize {
        self.iter().filter(|&x| other.contains(x)).count()
    }

    /// Removes from `self` every element that is in `other`, leaving `self \ other`
    /// in its original relative order.
    pub fn complement(&mut self, other: &VertexSet) -> &mut Self {
        let counts = &mut self.counts;
        self.items.retain(|&x| {
            if other.contains(x) {
                counts.remove(&x);
                false
            } else {
                true
            }
        });
        self
    }
}

impl FromIterator<NodeId> for VertexSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        let mut set = VertexSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<NodeId> for VertexSet {
    fn extend<I: IntoIterator<Item = NodeId>>(&mut self, iter: I) {
        for value in iter {
            self.insert_at_foot(value);
        }
    }
}

impl<'a> IntoIterator for &'a VertexSet {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::collections::vec_deque::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().copied()
    }
}

impl PartialEq for VertexSet {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for VertexSet {}
