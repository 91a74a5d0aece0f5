//! Dense storage for integer-like vertices.
//!
//! When vertices are small non-negative integers (indices into some
//! external table), a word-packed bitset and a slot vector beat hashing by
//! a wide margin. Both grow on demand, so no vertex count is needed up
//! front; [`DenseVisited::with_capacity`] and [`DenseMap::with_capacity`]
//! avoid the regrowth when it is known.
//!
//! Memory grows with the largest vertex value stored, not with the number
//! of vertices: these storages are only for small, dense vertex indices. A
//! single huge value (say a hash or `u64::MAX`) makes the backing vector try
//! to cover every index below it and aborts on allocation failure.
//!
//! The vertex's integer value is its identity here. Use these storages only
//! with graphs whose identity policy agrees with that (the usual
//! [`ByValue`](crate::graph::ByValue) on integer vertices).

use num_traits::ToPrimitive;

use super::{MapStorage, SetStorage, Storage, StorageKind};
use crate::graph::Keyed;

const WORD_BITS: usize = u64::BITS as usize;

#[inline]
fn slot<V: ToPrimitive>(vertex: &V) -> Option<usize> {
    vertex.to_usize()
}

#[inline]
fn expect_slot<V: ToPrimitive>(vertex: &V) -> usize {
    slot(vertex).expect("dense storage requires vertices convertible to usize")
}

/// A dense, word-packed visited set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DenseVisited {
    words: Vec<u64>,
    count: usize,
}

impl DenseVisited {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self {
            words: Vec::new(),
            count: 0,
        }
    }

    /// Creates an empty set with room for vertices `0..bits`.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(WORD_BITS)],
            count: 0,
        }
    }

    /// Returns the number of vertices that fit without growing.
    #[inline]
    pub fn capacity_bits(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Marks `idx`, returning `true` iff it was not yet marked.
    ///
    /// Grows the set to cover `0..=idx` if needed.
    #[inline]
    pub fn test_and_set(&mut self, idx: usize) -> bool {
        let word = idx / WORD_BITS;
        let mask = 1u64 << (idx % WORD_BITS);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        let fresh = self.words[word] & mask == 0;
        if fresh {
            self.words[word] |= mask;
            self.count += 1;
        }
        fresh
    }

    /// Returns `true` if `idx` is marked.
    #[inline]
    pub fn is_set(&self, idx: usize) -> bool {
        self.words
            .get(idx / WORD_BITS)
            .is_some_and(|w| w & (1u64 << (idx % WORD_BITS)) != 0)
    }

    /// Unmarks `idx`, returning `true` iff it was marked.
    #[inline]
    pub fn reset(&mut self, idx: usize) -> bool {
        let mask = 1u64 << (idx % WORD_BITS);
        match self.words.get_mut(idx / WORD_BITS) {
            Some(w) if *w & mask != 0 => {
                *w &= !mask;
                self.count -= 1;
                true
            }
            _ => false,
        }
    }
}

impl Storage for DenseVisited {
    const KIND: StorageKind = StorageKind::HashSet;

    #[inline]
    fn len(&self) -> usize {
        self.count
    }

    fn clear(&mut self) {
        self.words.fill(0);
        self.count = 0;
    }
}

impl<V: ToPrimitive, C> SetStorage<Keyed<V, C>> for DenseVisited {
    /// # Panics
    /// Panics if the vertex is negative or does not fit in `usize`.
    #[inline]
    fn insert(&mut self, key: Keyed<V, C>) -> bool {
        self.test_and_set(expect_slot(key.vertex()))
    }

    #[inline]
    fn contains(&self, key: &Keyed<V, C>) -> bool {
        slot(key.vertex()).is_some_and(|idx| self.is_set(idx))
    }

    #[inline]
    fn remove(&mut self, key: &Keyed<V, C>) -> bool {
        slot(key.vertex()).is_some_and(|idx| self.reset(idx))
    }
}

/// A map stored as one optional slot per vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMap<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T> Default for DenseMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DenseMap<T> {
    /// Creates an empty map.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty map with slots for vertices `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, len: 0 }
    }

    fn slot_mut(&mut self, idx: usize) -> &mut Option<T> {
        if idx >= self.slots.len() {
            self.slots.resize_with(idx + 1, || None);
        }
        &mut self.slots[idx]
    }
}

impl<T> Storage for DenseMap<T> {
    const KIND: StorageKind = StorageKind::HashMap;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.len = 0;
    }
}

impl<V: ToPrimitive, C, T> MapStorage<Keyed<V, C>, T> for DenseMap<T> {
    /// # Panics
    /// Panics if the vertex is negative or does not fit in `usize`.
    fn insert(&mut self, key: Keyed<V, C>, value: T) -> Option<T> {
        let previous = self.slot_mut(expect_slot(key.vertex())).replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    #[inline]
    fn get(&self, key: &Keyed<V, C>) -> Option<&T> {
        slot(key.vertex()).and_then(|idx| self.slots.get(idx)?.as_ref())
    }

    #[inline]
    fn get_mut(&mut self, key: &Keyed<V, C>) -> Option<&mut T> {
        slot(key.vertex()).and_then(|idx| self.slots.get_mut(idx)?.as_mut())
    }

    fn remove(&mut self, key: &Keyed<V, C>) -> Option<T> {
        let removed = slot(key.vertex()).and_then(|idx| self.slots.get_mut(idx)?.take());
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }
}
