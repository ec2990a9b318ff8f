//! Min-priority frontier ordered by `f`, first-in first-out among equal `f`.

use super::*;

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// The frontier ordering key: lower `f` first, then older insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f: u32,
    pub order: u64,
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f.cmp(&other.f).then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Generated-but-unexpanded nodes.
///
/// The same board may sit in the frontier several times at different costs;
/// stale copies are dropped by the caller when popped.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    pushed: u64,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId, f: u32) {
        let key = FrontierKey {
            f,
            order: self.pushed,
        };
        self.pushed += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
    }

    /// Pop the node with the lowest `f`, oldest first on ties.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }

    /// Record the current size as a high-water candidate and return it.
    pub fn observe_size(&mut self) -> usize {
        let size = self.heap.len();
        self.high_water = self.high_water.max(size);
        size
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Total number of pushes, including entries already popped.
    pub fn pushed(&self) -> u64 {
        self.pushed
    }
}
