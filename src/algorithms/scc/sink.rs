//! Component sinks.

use core::fmt;
use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::{ByValue, Keyed, VertexCompare};

/// Receives components one vertex at a time.
///
/// Every component is bracketed by one `begin_component` and one
/// `end_component` call.
pub trait ComponentSink<V> {
    /// A new component starts.
    fn begin_component(&mut self) {}
    /// `vertex` belongs to the current component.
    fn add_vertex(&mut self, vertex: V);
    /// The current component is complete.
    fn end_component(&mut self) {}
}

impl<V> ComponentSink<V> for Vec<Vec<V>> {
    fn begin_component(&mut self) {
        self.push(Vec::new());
    }

    fn add_vertex(&mut self, vertex: V) {
        match self.last_mut() {
            Some(group) => group.push(vertex),
            None => self.push(vec![vertex]),
        }
    }
}

impl<V, S: ComponentSink<V> + ?Sized> ComponentSink<V> for &mut S {
    fn begin_component(&mut self) {
        (**self).begin_component();
    }

    fn add_vertex(&mut self, vertex: V) {
        (**self).add_vertex(vertex);
    }

    fn end_component(&mut self) {
        (**self).end_component();
    }
}

/// A sink that hands each complete component to a closure.
pub struct FnSink<V, F> {
    current: Vec<V>,
    f: F,
}

/// Wraps `f` as a [`ComponentSink`] receiving whole components.
pub fn sink_fn<V, F: FnMut(Vec<V>)>(f: F) -> FnSink<V, F> {
    FnSink {
        current: Vec::new(),
        f,
    }
}

impl<V, F: FnMut(Vec<V>)> ComponentSink<V> for FnSink<V, F> {
    fn begin_component(&mut self) {
        self.current.clear();
    }

    fn add_vertex(&mut self, vertex: V) {
        self.current.push(vertex);
    }

    fn end_component(&mut self) {
        (self.f)(core::mem::take(&mut self.current));
    }
}

impl<V: fmt::Debug, F> fmt::Debug for FnSink<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSink")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

/// Labels every vertex with the number of its component.
///
/// Labels count up from `0` in emission order, which is a reverse
/// topological order of the condensation: an edge between two components
/// always runs from the higher label to the lower one (or stays within one).
pub struct ComponentLabels<V, C = ByValue> {
    labels: HashMap<Keyed<V, C>, usize>,
    count: usize,
}

impl<V: Clone + Eq + Hash> ComponentLabels<V> {
    /// Creates an empty labelling using value identity.
    pub fn new() -> Self {
        Self::with_policy()
    }
}

impl<V: Clone + Eq + Hash> Default for ComponentLabels<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, C: VertexCompare<V>> ComponentLabels<V, C> {
    /// Creates an empty labelling using identity policy `C`.
    pub fn with_policy() -> Self {
        Self {
            labels: HashMap::new(),
            count: 0,
        }
    }

    /// Returns the component label of `vertex`.
    pub fn label(&self, vertex: &V) -> Option<usize> {
        self.labels.get(&Keyed::new(vertex.clone())).copied()
    }

    /// Returns `true` if `a` and `b` were labelled and share a component.
    pub fn same_component(&self, a: &V, b: &V) -> bool {
        matches!((self.label(a), self.label(b)), (Some(x), Some(y)) if x == y)
    }

    /// Returns the number of components labelled.
    pub fn component_count(&self) -> usize {
        self.count
    }

    /// Returns the number of vertices labelled.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if nothing was labelled.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<V, C: VertexCompare<V>> ComponentSink<V> for ComponentLabels<V, C> {
    fn add_vertex(&mut self, vertex: V) {
        self.labels.insert(Keyed::new(vertex), self.count);
    }

    fn end_component(&mut self) {
        self.count += 1;
    }
}

impl<V: fmt::Debug, C> fmt::Debug for ComponentLabels<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentLabels")
            .field("components", &self.count)
            .field("labels", &self.labels)
            .finish()
    }
}
