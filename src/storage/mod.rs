//! Storage selection for the algorithms.
//!
//! Every algorithm in the crate keeps its per-call state in one of four
//! kinds of container, described by the traits below. Which concrete type
//! backs each container is chosen by the caller through a
//! [`StorageProvider`], so the same search can run on `std` collections, on
//! dense integer-indexed storage, or on a caller-owned instance that
//! outlives the call.
//!
//! | Kind | Trait | `std` implementations | Crate implementations |
//! |------|-------|-----------------------|-----------------------|
//! | [`StorageKind::Sequence`] | [`SequenceStorage`] | `Vec`, `VecDeque` | |
//! | [`StorageKind::Deque`] | [`DequeStorage`] | `VecDeque` | |
//! | [`StorageKind::HashSet`] | [`SetStorage`] | `HashSet` | [`DenseVisited`], [`Untracked`] |
//! | [`StorageKind::HashMap`] | [`MapStorage`] | `HashMap` | [`DenseMap`] |
//!
//! `&mut S` implements every trait `S` does.

pub mod dense;
pub mod provider;

pub use dense::{DenseMap, DenseVisited};
pub use provider::{Borrowed, DefaultStorage, Reusable, SingleUse, StorageProvider};

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use serde::{Deserialize, Serialize};

/// The shape of a storage container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageKind {
    /// Push and pop at the back.
    Sequence,
    /// Push at the back, pop at the front.
    Deque,
    /// Membership set.
    HashSet,
    /// Key to value map.
    HashMap,
}

/// Operations shared by every storage kind.
pub trait Storage {
    /// The kind this container is used as.
    const KIND: StorageKind;

    /// Returns the number of stored elements.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.
    fn clear(&mut self);
}

/// A last-in first-out container.
pub trait SequenceStorage<T>: Storage {
    /// Appends `value`.
    fn push(&mut self, value: T);
    /// Removes and returns the last element.
    fn pop(&mut self) -> Option<T>;
    /// Returns the last element.
    fn last(&self) -> Option<&T>;
    /// Returns the last element mutably.
    fn last_mut(&mut self) -> Option<&mut T>;
}

/// A first-in first-out container.
pub trait DequeStorage<T>: Storage {
    /// Appends `value` at the back.
    fn push_back(&mut self, value: T);
    /// Removes and returns the front element.
    fn pop_front(&mut self) -> Option<T>;
    /// Returns the front element.
    fn front(&self) -> Option<&T>;
}

/// A membership set.
pub trait SetStorage<K>: Storage {
    /// Inserts `key`, returning `true` if it was not present.
    fn insert(&mut self, key: K) -> bool;
    /// Returns `true` if `key` is present.
    fn contains(&self, key: &K) -> bool;
    /// Removes `key`, returning `true` if it was present.
    fn remove(&mut self, key: &K) -> bool;
}

/// A key to value map.
pub trait MapStorage<K, V>: Storage {
    /// Inserts `value` under `key`, returning the previous value.
    fn insert(&mut self, key: K, value: V) -> Option<V>;
    /// Returns the value under `key`.
    fn get(&self, key: &K) -> Option<&V>;
    /// Returns the value under `key` mutably.
    fn get_mut(&mut self, key: &K) -> Option<&mut V>;
    /// Removes and returns the value under `key`.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Returns `true` if `key` has a value.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<T> Storage for Vec<T> {
    const KIND: StorageKind = StorageKind::Sequence;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<T> SequenceStorage<T> for Vec<T> {
    #[inline]
    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    #[inline]
    fn last(&self) -> Option<&T> {
        <[T]>::last(self)
    }

    #[inline]
    fn last_mut(&mut self) -> Option<&mut T> {
        <[T]>::last_mut(self)
    }
}

impl<T> Storage for VecDeque<T> {
    const KIND: StorageKind = StorageKind::Deque;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

impl<T> DequeStorage<T> for VecDeque<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        VecDeque::front(self)
    }
}

impl<T> SequenceStorage<T> for VecDeque<T> {
    #[inline]
    fn push(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    #[inline]
    fn last(&self) -> Option<&T> {
        VecDeque::back(self)
    }

    #[inline]
    fn last_mut(&mut self) -> Option<&mut T> {
        VecDeque::back_mut(self)
    }
}

impl<K, S> Storage for HashSet<K, S> {
    const KIND: StorageKind = StorageKind::HashSet;

    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        HashSet::clear(self);
    }
}

impl<K: Eq + Hash, S: BuildHasher> SetStorage<K> for HashSet<K, S> {
    #[inline]
    fn insert(&mut self, key: K) -> bool {
        HashSet::insert(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        HashSet::contains(self, key)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> bool {
        HashSet::remove(self, key)
    }
}

impl<K, V, S> Storage for HashMap<K, V, S> {
    const KIND: StorageKind = StorageKind::HashMap;

    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        HashMap::clear(self);
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> MapStorage<K, V> for HashMap<K, V, S> {
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        HashMap::get_mut(self, key)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }
}

impl<S: Storage + ?Sized> Storage for &mut S {
    const KIND: StorageKind = S::KIND;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn clear(&mut self) {
        (**self).clear();
    }
}

impl<T, S: SequenceStorage<T> + ?Sized> SequenceStorage<T> for &mut S {
    #[inline]
    fn push(&mut self, value: T) {
        (**self).push(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        (**self).pop()
    }

    #[inline]
    fn last(&self) -> Option<&T> {
        (**self).last()
    }

    #[inline]
    fn last_mut(&mut self) -> Option<&mut T> {
        (**self).last_mut()
    }
}

impl<T, S: DequeStorage<T> + ?Sized> DequeStorage<T> for &mut S {
    #[inline]
    fn push_back(&mut self, value: T) {
        (**self).push_back(value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        (**self).pop_front()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        (**self).front()
    }
}

impl<K, S: SetStorage<K> + ?Sized> SetStorage<K> for &mut S {
    #[inline]
    fn insert(&mut self, key: K) -> bool {
        (**self).insert(key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        (**self).contains(key)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> bool {
        (**self).remove(key)
    }
}

impl<K, V, S: MapStorage<K, V> + ?Sized> MapStorage<K, V> for &mut S {
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        (**self).insert(key, value)
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        (**self).get(key)
    }

    #[inline]
    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        (**self).get_mut(key)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        (**self).remove(key)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        (**self).contains_key(key)
    }
}

/// A set that forgets everything it is given.
///
/// Used as the visited set of a search, it switches the search to untracked
/// mode: every edge counts as new, so a vertex is expanded once per path
/// that reaches it. On a graph with a reachable cycle the search only ends
/// when a visitor stops it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Untracked;

impl Storage for Untracked {
    const KIND: StorageKind = StorageKind::HashSet;

    #[inline]
    fn len(&self) -> usize {
        0
    }

    #[inline]
    fn clear(&mut self) {}
}

impl<K> SetStorage<K> for Untracked {
    #[inline]
    fn insert(&mut self, _key: K) -> bool {
        true
    }

    #[inline]
    fn contains(&self, _key: &K) -> bool {
        false
    }

    #[inline]
    fn remove(&mut self, _key: &K) -> bool {
        false
    }
}
