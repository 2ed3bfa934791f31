/*
Binary min-heap over (key, payload) pairs with a payload -> slot map.

The map is what makes `change_key` O(log n): the slot of a queued payload is
looked up directly instead of searched for. Every swap moves both arrays in
lockstep so that `items[position_of[p]].payload == p` holds for every queued p.
*/

use std::fmt;

use ordered_float::OrderedFloat;

use crate::error::{Error, Result};
use crate::graph::{Cost, NodeId};

const ABSENT: usize = usize::MAX;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct HeapItem {
    key: OrderedFloat<Cost>,
    payload: NodeId,
}

#[derive(Debug, Default)]
pub struct IndexedMinHeap {
    items: Vec<HeapItem>,
    position_of: Vec<usize>,
}

#[inline]
fn parent(slot: usize) -> usize {
    (slot - 1) / 2
}

#[inline]
fn left_child(slot: usize) -> usize {
    2 * slot + 1
}

impl IndexedMinHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preallocates room for payloads `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            position_of: vec![ABSENT; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn slot_of(&self, payload: NodeId) -> Option<usize> {
        self.position_of
            .get(payload)
            .copied()
            .filter(|&slot| slot != ABSENT)
    }

    pub fn contains(&self, payload: NodeId) -> bool {
        self.slot_of(payload).is_some()
    }

    pub fn key_of(&self, payload: NodeId) -> Option<Cost> {
        self.slot_of(payload).map(|slot| self.items[slot].key.0)
    }

    /// Queues `payload` with `key`. Storage grows by doubling; a failed
    /// allocation is reported and leaves the heap unchanged.
    pub fn insert(&mut self, payload: NodeId, key: Cost) -> Result<()> {
        if self.contains(payload) {
            return Err(Error::DuplicatePayload(payload));
        }
        self.items.try_reserve(1)?;
        if payload >= self.position_of.len() {
            let map_len = payload
                .checked_add(1)
                .ok_or(Error::PayloadTooLarge(payload))?;
            self.position_of.try_reserve(map_len - self.position_of.len())?;
            self.position_of.resize(map_len, ABSENT);
        }

        let slot = self.items.len();
        self.items.push(HeapItem {
            key: OrderedFloat(key),
            payload,
        });
        self.position_of[payload] = slot;
        self.sift_up(slot);
        Ok(())
    }

    pub fn peek(&self) -> Option<NodeId> {
        self.items.first().map(|item| item.payload)
    }

    pub fn peek_key(&self) -> Option<Cost> {
        self.items.first().map(|item| item.key.0)
    }

    /// Removes the root and returns its payload and key.
    pub fn pop(&mut self) -> Option<(NodeId, Cost)> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.swap(0, last);
        let removed = self.items.pop()?;
        self.position_of[removed.payload] = ABSENT;
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Some((removed.payload, removed.key.0))
    }

    pub fn remove_min(&mut self) -> Option<NodeId> {
        self.pop().map(|(payload, _)| payload)
    }

    /// Reassigns the key of a queued payload, sifting in whichever direction
    /// the change requires. Returns `false` if `payload` is not queued.
    pub fn change_key(&mut self, payload: NodeId, key: Cost) -> bool {
        let Some(slot) = self.slot_of(payload) else {
            return false;
        };
        let key = OrderedFloat(key);
        let previous = self.items[slot].key;
        self.items[slot].key = key;
        if key < previous {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
        true
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.position_of[self.items[a].payload] = a;
        self.position_of[self.items[b].payload] = b;
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let up = parent(slot);
            if self.items[up].key <= self.items[slot].key {
                break;
            }
            self.swap(up, slot);
            slot = up;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let n = self.items.len();
        loop {
            let left = left_child(slot);
            if left >= n {
                return;
            }
            let mut child = left;
            // Ties stay with the left child.
            if left + 1 < n && self.items[left + 1].key < self.items[left].key {
                child = left + 1;
            }
            if self.items[child].key >= self.items[slot].key {
                return;
            }
            self.swap(slot, child);
            slot = child;
        }
    }
}

impl fmt::Display for IndexedMinHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---------------------------")?;
        write!(f, "keys: ")?;
        for item in &self.items {
            write!(f, "{:>5.0} ", item.key.0)?;
        }
        writeln!(f)?;
        write!(f, "di  : ")?;
        for item in &self.items {
            write!(f, "{:>5} ", item.payload)?;
        }
        writeln!(f)?;
        // Indexed by payload; removed payloads show as `-`.
        write!(f, "map : ")?;
        for &slot in &self.position_of {
            if slot == ABSENT {
                write!(f, "{:>5} ", "-")?;
            } else {
                write!(f, "{:>5} ", slot)?;
            }
        }
        writeln!(f)
    }
}
