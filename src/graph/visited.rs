//! Per-call visited set.

use std::collections::HashSet;
use std::hash::Hash;

/// Nodes already processed by a traversal. Only ever grows during a call.
#[derive(Debug, Clone)]
pub struct VisitedSet<N> {
    seen: HashSet<N>,
}

impl<N: Eq + Hash> VisitedSet<N> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Mark a node. Returns false if it was already marked.
    pub fn insert(&mut self, node: N) -> bool {
        self.seen.insert(node)
    }

    /// Whether a node is marked.
    pub fn contains(&self, node: &N) -> bool {
        self.seen.contains(node)
    }

    /// Number of marked nodes.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether nothing is marked yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl<N: Eq + Hash> Default for VisitedSet<N> {
    fn default() -> Self {
        Self::new()
    }
}
