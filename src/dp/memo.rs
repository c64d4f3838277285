//! Scoped memoization table.

use std::collections::HashMap;
use std::hash::Hash;

/// Memo table owned by the caller for the duration of one or more related calls.
///
/// A table is only valid for the inputs it was filled with: reusing a
/// `can_sum` table with a different number list gives wrong answers.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    table: HashMap<K, V>,
}

impl<K: Eq + Hash, V: Clone> Memo<K, V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Cached value for `key`, if any.
    pub fn get(&self, key: &K) -> Option<V> {
        self.table.get(key).cloned()
    }

    /// Store `value` under `key` and hand it back.
    pub fn store(&mut self, key: K, value: V) -> V {
        self.table.insert(key, value.clone());
        value
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Drop every cached entry.
    pub fn clear(&mut self) {
        self.table.clear();
    }
}

impl<K: Eq + Hash, V: Clone> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
