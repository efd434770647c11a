//! Per-sequence memo tables.
//!
//! Each sequence owns exactly one table mapping its argument key (a
//! single integer or an ordered pair) to a previously computed value.
//! Tables grow monotonically: entries are exact, so nothing is ever
//! evicted, and a value is only inserted once all of its recursive
//! dependencies have resolved.

use combinatoria_integers::Integer;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A cache of computed sequence values indexed by argument key.
///
/// Reads and writes go through an `RwLock`, so at most one writer
/// populates a given key and concurrent readers never observe a
/// partially constructed value.
#[derive(Debug)]
pub struct MemoTable<K> {
    entries: RwLock<FxHashMap<K, Integer>>,
}

impl<K: Eq + Hash + Copy> MemoTable<K> {
    /// Creates a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// Checks whether a value is cached for this key.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Looks up the cached value for a key.
    pub fn get(&self, key: &K) -> Option<Integer> {
        self.entries.read().get(key).cloned()
    }

    /// Inserts or overwrites the value for a key.
    pub fn insert(&self, key: K, value: Integer) {
        self.entries.write().insert(key, value);
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing is cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drops every cached entry, resetting the table to its initial state.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl<K: Eq + Hash + Copy> Default for MemoTable<K> {
    fn default() -> Self {
        Self::new()
    }
}
