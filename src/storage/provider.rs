//! Storage providers.
//!
//! A provider hands an algorithm one empty storage instance at call entry.
//! Providers never see the algorithm's state afterwards.

use core::fmt;
use core::marker::PhantomData;

use super::Storage;

/// Supplies one storage instance of type `S`.
pub trait StorageProvider<S> {
    /// Yields an empty, ready-to-use instance.
    fn provide(self) -> S;
}

/// Provides `S::default()`.
pub struct DefaultStorage<S> {
    _storage: PhantomData<fn() -> S>,
}

impl<S> DefaultStorage<S> {
    /// Creates the provider.
    pub const fn new() -> Self {
        Self {
            _storage: PhantomData,
        }
    }
}

impl<S> Default for DefaultStorage<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for DefaultStorage<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for DefaultStorage<S> {}

impl<S> fmt::Debug for DefaultStorage<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultStorage")
    }
}

impl<S: Default> StorageProvider<S> for DefaultStorage<S> {
    #[inline]
    fn provide(self) -> S {
        S::default()
    }
}

/// Provides whatever a factory closure builds, as many times as asked.
///
/// Pass `&mut Reusable` to keep the factory across several calls.
#[derive(Clone, Copy)]
pub struct Reusable<F> {
    factory: F,
}

impl<F> Reusable<F> {
    /// Wraps `factory`.
    pub const fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F> fmt::Debug for Reusable<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reusable").finish_non_exhaustive()
    }
}

impl<S, F> StorageProvider<S> for Reusable<F>
where
    S: Storage,
    F: FnMut() -> S,
{
    #[inline]
    fn provide(mut self) -> S {
        (&mut self).provide()
    }
}

impl<S, F> StorageProvider<S> for &mut Reusable<F>
where
    S: Storage,
    F: FnMut() -> S,
{
    fn provide(self) -> S {
        let mut storage = (self.factory)();
        storage.clear();
        storage
    }
}

/// Provides one instance, constructed up front, exactly once.
#[derive(Debug, Clone, Default)]
pub struct SingleUse<S> {
    storage: S,
}

impl<S> SingleUse<S> {
    /// Wraps `storage`. It is cleared when provided.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: Storage> StorageProvider<S> for SingleUse<S> {
    fn provide(mut self) -> S {
        self.storage.clear();
        self.storage
    }
}

/// Lends a caller-owned instance for one call.
///
/// The instance is cleared when provided and keeps whatever the algorithm
/// left in it, so the caller can inspect it afterwards.
#[derive(Debug)]
pub struct Borrowed<'a, S: ?Sized> {
    storage: &'a mut S,
}

impl<'a, S: ?Sized> Borrowed<'a, S> {
    /// Lends `storage`.
    pub fn new(storage: &'a mut S) -> Self {
        Self { storage }
    }
}

impl<'a, S: Storage + ?Sized> StorageProvider<&'a mut S> for Borrowed<'a, S> {
    fn provide(self) -> &'a mut S {
        self.storage.clear();
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_storage_is_empty() {
        let v: Vec<u8> = DefaultStorage::new().provide();
        assert!(v.is_empty());
    }

    #[test]
    fn reusable_runs_the_factory_each_time() {
        let mut built = 0;
        let mut provider = Reusable::new(|| {
            built += 1;
            vec![0u8; 4]
        });
        let a: Vec<u8> = (&mut provider).provide();
        let b: Vec<u8> = (&mut provider).provide();
        assert!(a.is_empty() && b.is_empty());
        assert!(a.capacity() >= 4);
        drop(provider);
        assert_eq!(built, 2);
    }

    #[test]
    fn single_use_clears_its_instance() {
        let provider = SingleUse::new(HashSet::from([1, 2, 3]));
        let set = provider.provide();
        assert!(set.is_empty());
        assert!(set.capacity() >= 3);
    }

    #[test]
    fn borrowed_leaves_results_with_the_caller() {
        let mut owned = vec![9u32];
        {
            let lent = Borrowed::new(&mut owned).provide();
            assert!(lent.is_empty());
            lent.push(1);
        }
        assert_eq!(owned, vec![1]);
    }
}
