//! FIFO/LIFO frontier with enqueue-time loop detection.
//!
//! The frontier stores arena node IDs, not nodes. Keys are marked visited
//! when a node is enqueued, not when it is popped, so a state already
//! in flight is never enqueued twice. The visited set is a `BTreeSet` of
//! hex digests for deterministic iteration order.

use std::collections::{BTreeSet, VecDeque};

use thought_kernel::proof::hash::ContentHash;

use crate::policy::SearchStrategy;

/// Frontier manager for one search.
///
/// Maintains:
/// - A `VecDeque<u64>` of pending node IDs, popped from the front
///   (breadth-first) or the back (depth-first)
/// - A `BTreeSet<String>` of visited state-key hex digests
#[derive(Debug)]
pub struct Frontier {
    strategy: SearchStrategy,
    pending: VecDeque<u64>,
    visited: BTreeSet<String>,
    high_water: u64,
}

impl Frontier {
    /// Create a new empty frontier with the given discipline.
    #[must_use]
    pub fn new(strategy: SearchStrategy) -> Self {
        Self {
            strategy,
            pending: VecDeque::new(),
            visited: BTreeSet::new(),
            high_water: 0,
        }
    }

    /// Enqueue a node and mark its key as visited.
    ///
    /// Returns `false` if the key was already visited (node not added).
    pub fn push(&mut self, node_id: u64, key: &ContentHash) -> bool {
        if !self.visited.insert(key.hex_digest().to_string()) {
            return false;
        }
        self.pending.push_back(node_id);
        let size = self.pending.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        true
    }

    /// Pop the next node ID per the frontier discipline.
    #[must_use]
    pub fn pop(&mut self) -> Option<u64> {
        match self.strategy {
            SearchStrategy::BreadthFirst => self.pending.pop_front(),
            SearchStrategy::DepthFirst => self.pending.pop_back(),
        }
    }

    /// Check if a key has been visited.
    #[must_use]
    pub fn is_visited(&self, key: &ContentHash) -> bool {
        self.visited.contains(key.hex_digest())
    }

    /// Number of distinct keys seen so far.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Drop all pending nodes and visited keys.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.visited.clear();
        self.high_water = 0;
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// The frontier discipline.
    #[must_use]
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }
}
