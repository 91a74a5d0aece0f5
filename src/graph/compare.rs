//! Vertex identity policies.
//!
//! A graph decides what "the same vertex" means through its
//! [`Graph::Compare`](crate::graph::Graph::Compare) policy rather than through a
//! fixed `Eq` bound on the vertex type. Every storage instance used by the
//! algorithms holds vertices wrapped in [`Keyed`], whose `Eq` and `Hash`
//! forward to that policy.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// Equality and hashing for vertices of type `V`.
///
/// Implementations must be mutually consistent: two vertices that compare
/// equal must hash identically.
pub trait VertexCompare<V: ?Sized> {
    /// Returns `true` if `a` and `b` denote the same vertex.
    fn eq(a: &V, b: &V) -> bool;

    /// Feeds the identity of `vertex` into `state`.
    fn hash<H: Hasher>(vertex: &V, state: &mut H);
}

/// Compares vertices by value, using their own `Eq` and `Hash`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByValue;

impl<V: Eq + Hash + ?Sized> VertexCompare<V> for ByValue {
    #[inline]
    fn eq(a: &V, b: &V) -> bool {
        a == b
    }

    #[inline]
    fn hash<H: Hasher>(vertex: &V, state: &mut H) {
        vertex.hash(state);
    }
}

/// Compares reference vertices by the address they point at.
///
/// Two distinct objects with equal contents are distinct vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByAddress;

impl<T: ?Sized> VertexCompare<&T> for ByAddress {
    #[inline]
    fn eq(a: &&T, b: &&T) -> bool {
        core::ptr::eq(*a, *b)
    }

    #[inline]
    fn hash<H: Hasher>(vertex: &&T, state: &mut H) {
        core::ptr::hash(*vertex, state);
    }
}

/// A vertex paired with the comparison policy that defines its identity.
pub struct Keyed<V, C> {
    vertex: V,
    _compare: PhantomData<fn() -> C>,
}

impl<V, C> Keyed<V, C> {
    /// Wraps `vertex`.
    #[inline]
    pub const fn new(vertex: V) -> Self {
        Self {
            vertex,
            _compare: PhantomData,
        }
    }

    /// Returns the wrapped vertex.
    #[inline]
    pub const fn vertex(&self) -> &V {
        &self.vertex
    }

    /// Unwraps the vertex.
    #[inline]
    pub fn into_vertex(self) -> V {
        self.vertex
    }
}

impl<V: Clone, C> Clone for Keyed<V, C> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.vertex.clone())
    }
}

impl<V: Copy, C> Copy for Keyed<V, C> {}

impl<V, C: VertexCompare<V>> PartialEq for Keyed<V, C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        C::eq(&self.vertex, &other.vertex)
    }
}

impl<V, C: VertexCompare<V>> Eq for Keyed<V, C> {}

impl<V, C: VertexCompare<V>> Hash for Keyed<V, C> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        C::hash(&self.vertex, state);
    }
}

impl<V: fmt::Debug, C> fmt::Debug for Keyed<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Keyed").field(&self.vertex).finish()
    }
}
