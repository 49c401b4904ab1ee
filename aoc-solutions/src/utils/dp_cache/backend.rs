//! Storage backends for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;

/// State of a single cache entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<K> {
    /// Dependencies of this index are being resolved
    InProgress,
    /// The value has been computed
    Ready(K),
}

/// A storage backend for the DP cache.
///
/// Implementations can use different data structures (Vec, HashMap, etc.)
/// based on the index type requirements.
pub trait Backend<I, K> {
    /// Returns the slot for the given index, or `None` if it was never touched.
    fn slot(&self, index: &I) -> Option<&Slot<K>>;

    /// Stores a slot for the given index, replacing any previous one.
    fn set(&mut self, index: I, slot: Slot<K>);
}

/// A Vec-based backend for usize indices.
///
/// Efficient for dense indices starting from 0. The Vec grows on demand.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<Slot<K>>>,
}

impl<K> VecBackend<K> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn slot(&self, index: &usize) -> Option<&Slot<K>> {
        self.data.get(*index)?.as_ref()
    }

    fn set(&mut self, index: usize, slot: Slot<K>) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        self.data[index] = Some(slot);
    }
}

/// A HashMap-based backend for arbitrary hashable indices.
///
/// Suitable for sparse indices or non-integer index types such as names.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, Slot<K>>,
}

impl<I, K> HashMapBackend<I, K> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn slot(&self, index: &I) -> Option<&Slot<K>> {
        self.data.get(index)
    }

    fn set(&mut self, index: I, slot: Slot<K>) {
        self.data.insert(index, slot);
    }
}
