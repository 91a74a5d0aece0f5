//! Visitors and the signals they return.

use core::convert::Infallible;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, GraphEdge};

/// Signal returned by hooks tied to a vertex or an edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    /// Keep going.
    #[default]
    Continue,
    /// Prune here: do not expand this vertex, or do not follow this edge.
    StopTree,
    /// End the whole search now.
    StopSearch,
}

/// Signal returned by hooks not tied to a location in the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchControl {
    /// Keep going.
    #[default]
    Continue,
    /// End the whole search now.
    Stop,
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// The frontier ran dry.
    Finished,
    /// A hook asked to stop.
    Stopped,
}

/// A vertex taken from the frontier.
pub struct Visit<'a, G: Graph + ?Sized> {
    /// The vertex.
    pub vertex: &'a G::Vertex,
    /// Number of tree edges between the vertex and the root it was reached from.
    pub depth: usize,
    /// The tree edge the vertex was reached through; `None` for roots.
    pub predecessor: Option<&'a GraphEdge<G>>,
    /// The graph being searched.
    pub graph: &'a G,
}

/// An edge examined while expanding a vertex.
///
/// `edge.tail` is always the vertex being expanded.
pub struct EdgeVisit<'a, G: Graph + ?Sized> {
    /// The edge.
    pub edge: &'a GraphEdge<G>,
    /// Depth of `edge.tail`.
    pub depth: usize,
    /// The graph being searched.
    pub graph: &'a G,
}

impl<G: Graph + ?Sized> fmt::Debug for Visit<'_, G>
where
    G::Vertex: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Visit")
            .field("vertex", self.vertex)
            .field("depth", &self.depth)
            .field("predecessor", &self.predecessor.map(|e| (&e.tail, &e.head)))
            .finish_non_exhaustive()
    }
}

impl<G: Graph + ?Sized> fmt::Debug for EdgeVisit<'_, G>
where
    G::Vertex: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeVisit")
            .field("tail", &self.edge.tail)
            .field("head", &self.edge.head)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

/// Callbacks invoked by the search engine.
///
/// Every hook defaults to continuing, so an implementation only overrides
/// the events it cares about. An `Err` from any hook aborts the search and
/// is returned to the caller unchanged.
pub trait Visitor<G: Graph + ?Sized> {
    /// Error produced by the hooks.
    type Error;

    /// Called once before any root is seeded.
    fn begin_search(&mut self, graph: &G) -> Result<SearchControl, Self::Error> {
        let _ = graph;
        Ok(SearchControl::Continue)
    }

    /// Called when a vertex is taken from the frontier.
    ///
    /// [`Control::StopTree`] skips expanding the vertex.
    fn discover_vertex(&mut self, visit: &Visit<'_, G>) -> Result<Control, Self::Error> {
        let _ = visit;
        Ok(Control::Continue)
    }

    /// Directed graphs only: the vertex has at least one out-edge.
    fn discover_branch(&mut self, visit: &Visit<'_, G>) -> Result<Control, Self::Error> {
        let _ = visit;
        Ok(Control::Continue)
    }

    /// Directed graphs only: the vertex has no out-edge.
    fn discover_leaf(&mut self, visit: &Visit<'_, G>) -> Result<Control, Self::Error> {
        let _ = visit;
        Ok(Control::Continue)
    }

    /// Called for an edge whose head has not been visited.
    ///
    /// [`Control::StopTree`] leaves the head unvisited and unqueued.
    fn discover_new_edge(&mut self, edge: &EdgeVisit<'_, G>) -> Result<Control, Self::Error> {
        let _ = edge;
        Ok(Control::Continue)
    }

    /// Called for an edge whose head has already been visited.
    fn discover_seen_edge(&mut self, edge: &EdgeVisit<'_, G>) -> Result<Control, Self::Error> {
        let _ = edge;
        Ok(Control::Continue)
    }

    /// Called after every out-edge of an expanded vertex was examined.
    fn finish_vertex(&mut self, visit: &Visit<'_, G>) -> Result<SearchControl, Self::Error> {
        let _ = visit;
        Ok(SearchControl::Continue)
    }

    /// Called once when the frontier is exhausted.
    fn finish_search(&mut self, graph: &G) -> Result<SearchControl, Self::Error> {
        let _ = graph;
        Ok(SearchControl::Continue)
    }
}

impl<G: Graph + ?Sized, V: Visitor<G> + ?Sized> Visitor<G> for &mut V {
    type Error = V::Error;

    fn begin_search(&mut self, graph: &G) -> Result<SearchControl, Self::Error> {
        (**self).begin_search(graph)
    }

    fn discover_vertex(&mut self, visit: &Visit<'_, G>) -> Result<Control, Self::Error> {
        (**self).discover_vertex(visit)
    }

    fn discover_branch(&mut self, visit: &Visit<'_, G>) -> Result<Control, Self::Error> {
        (**self).discover_branch(visit)
    }

    fn discover_leaf(&mut self, visit: &Visit<'_, G>) -> Result<Control, Self::Error> {
        (**self).discover_leaf(visit)
    }

    fn discover_new_edge(&mut self, edge: &EdgeVisit<'_, G>) -> Result<Control, Self::Error> {
        (**self).discover_new_edge(edge)
    }

    fn discover_seen_edge(&mut self, edge: &EdgeVisit<'_, G>) -> Result<Control, Self::Error> {
        (**self).discover_seen_edge(edge)
    }

    fn finish_vertex(&mut self, visit: &Visit<'_, G>) -> Result<SearchControl, Self::Error> {
        (**self).finish_vertex(visit)
    }

    fn finish_search(&mut self, graph: &G) -> Result<SearchControl, Self::Error> {
        (**self).finish_search(graph)
    }
}

/// Values a closure hook may return.
///
/// `()` means continue; a bare signal never fails; a `Result` carries the
/// visitor's error.
pub trait HookOutput<S, E> {
    /// Converts the closure's return value into the hook's result.
    fn into_signal(self) -> Result<S, E>;
}

impl<S: Default, E> HookOutput<S, E> for () {
    #[inline]
    fn into_signal(self) -> Result<S, E> {
        Ok(S::default())
    }
}

impl<E> HookOutput<Control, E> for Control {
    #[inline]
    fn into_signal(self) -> Result<Control, E> {
        Ok(self)
    }
}

impl<E> HookOutput<SearchControl, E> for SearchControl {
    #[inline]
    fn into_signal(self) -> Result<SearchControl, E> {
        Ok(self)
    }
}

impl<E> HookOutput<Control, E> for Result<Control, E> {
    #[inline]
    fn into_signal(self) -> Result<Control, E> {
        self
    }
}

impl<E> HookOutput<SearchControl, E> for Result<SearchControl, E> {
    #[inline]
    fn into_signal(self) -> Result<SearchControl, E> {
        self
    }
}

impl<S: Default, E> HookOutput<S, E> for Result<(), E> {
    #[inline]
    fn into_signal(self) -> Result<S, E> {
        self.map(|()| S::default())
    }
}

type SearchHook<'a, G, E> = Box<dyn FnMut(&G) -> Result<SearchControl, E> + 'a>;
type VertexHook<'a, G, E> = Box<dyn FnMut(&Visit<'_, G>) -> Result<Control, E> + 'a>;
type EdgeHook<'a, G, E> = Box<dyn FnMut(&EdgeVisit<'_, G>) -> Result<Control, E> + 'a>;
type FinishHook<'a, G, E> = Box<dyn FnMut(&Visit<'_, G>) -> Result<SearchControl, E> + 'a>;

/// A visitor assembled from closures.
///
/// Every hook starts as a no-op; the `on_*` methods replace one at a time.
///
/// ```rust
/// use skein::graph::AdjacencyList;
/// use skein::search::{breadth_first_search, visitor_for, Control};
///
/// let g = AdjacencyList::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
/// let mut order = Vec::new();
/// let visitor = visitor_for(&g).on_discover_vertex(|visit| {
///     order.push(*visit.vertex);
///     if *visit.vertex == 2 { Control::StopSearch } else { Control::Continue }
/// });
/// breadth_first_search(&g, [0], visitor).unwrap();
/// assert_eq!(order, vec![0, 1, 2]);
/// ```
pub struct FnVisitor<'a, G: Graph + ?Sized, E = Infallible> {
    begin_search: SearchHook<'a, G, E>,
    discover_vertex: VertexHook<'a, G, E>,
    discover_branch: VertexHook<'a, G, E>,
    discover_leaf: VertexHook<'a, G, E>,
    discover_new_edge: EdgeHook<'a, G, E>,
    discover_seen_edge: EdgeHook<'a, G, E>,
    finish_vertex: FinishHook<'a, G, E>,
    finish_search: SearchHook<'a, G, E>,
}

/// Starts an infallible [`FnVisitor`] for `graph`'s type.
pub fn visitor_for<'a, G: Graph + ?Sized>(graph: &G) -> FnVisitor<'a, G, Infallible> {
    let _ = graph;
    FnVisitor::new()
}

/// Starts an [`FnVisitor`] whose hooks may fail with `E`.
pub fn fallible_visitor_for<'a, E, G: Graph + ?Sized>(graph: &G) -> FnVisitor<'a, G, E> {
    let _ = graph;
    FnVisitor::new()
}

impl<'a, G: Graph + ?Sized, E> Default for FnVisitor<'a, G, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, G: Graph + ?Sized, E> FnVisitor<'a, G, E> {
    /// Creates a visitor with every hook a no-op.
    pub fn new() -> Self {
        Self {
            begin_search: Box::new(|_: &G| Ok(SearchControl::Continue)),
            discover_vertex: Box::new(|_: &Visit<'_, G>| Ok(Control::Continue)),
            discover_branch: Box::new(|_: &Visit<'_, G>| Ok(Control::Continue)),
            discover_leaf: Box::new(|_: &Visit<'_, G>| Ok(Control::Continue)),
            discover_new_edge: Box::new(|_: &EdgeVisit<'_, G>| Ok(Control::Continue)),
            discover_seen_edge: Box::new(|_: &EdgeVisit<'_, G>| Ok(Control::Continue)),
            finish_vertex: Box::new(|_: &Visit<'_, G>| Ok(SearchControl::Continue)),
            finish_search: Box::new(|_: &G| Ok(SearchControl::Continue)),
        }
    }

    /// Replaces [`Visitor::begin_search`].
    #[must_use]
    pub fn on_begin_search<F, R>(mut self, mut f: F) -> Self
    where
        F: FnMut(&G) -> R + 'a,
        R: HookOutput<SearchControl, E>,
    {
        self.begin_search = Box::new(move |graph: &G| f(graph).into_signal());
        self
    }

    /// Replaces [`Visitor::discover_vertex`].
    #[must_use]
    pub fn on_discover_vertex<F, R>(mut self, mut f: F) -> Self
    where
        F: FnMut(&Visit<'_, G>) -> R + 'a,
        R: HookOutput<Control, E>,
    {
        self.discover_vertex = Box::new(move |visit: &Visit<'_, G>| f(visit).into_signal());
        self
    }

    /// Replaces [`Visitor::discover_branch`].
    #[must_use]
    pub fn on_discover_branch<F, R>(mut self, mut f: F) -> Self
    where
        F: FnMut(&Visit<'_, G>) -> R + 'a,
        R: HookOutput<Control, E>,
    {
        self.discover_branch = Box::new(move |visit: &Visit<'_, G>| f(visit).into_signal());
        self
    }

    /// Replaces [`Visitor::discover_leaf`].
    #[must_use]
    pub fn on_discover_leaf<F, R>(mut self, mut f: F) -> Self
    where
        F: FnMut(&Visit<'_, G>) -> R + 'a,
        R: HookOutput<Control, E>,
    {
        self.discover_leaf = Box::new(move |visit: &Visit<'_, G>| f(visit).into_signal());
        self
    }

    /// Replaces [`Visitor::discover_new_edge`].
    #[must_use]
    pub fn on_discover_new_edge<F, R>(mut self, mut f: F) -> Self
    where
        F: FnMut(&EdgeVisit<'_, G>) -> R + 'a,
        R: HookOutput<Control, E>,
    {
        self.discover_new_edge = Box::new(move |edge: &EdgeVisit<'_, G>| f(edge).into_signal());
        self
    }

    /// Replaces [`Visitor::discover_seen_edge`].
    #[must_use]
    pub fn on_discover_seen_edge<F, R>(mut self, mut f: F) -> Self
    where
        F: FnMut(&EdgeVisit<'_, G>) -> R + 'a,
        R: HookOutput<Control, E>,
    {
        self.discover_seen_edge = Box::new(move |edge: &EdgeVisit<'_, G>| f(edge).into_signal());
        self
    }

    /// Replaces [`Visitor::finish_vertex`].
    #[must_use]
    pub fn on_finish_vertex<F, R>(mut self, mut f: F) -> Self
    where
        F: FnMut(&Visit<'_, G>) -> R + 'a,
        R: HookOutput<SearchControl, E>,
    {
        self.finish_vertex = Box::new(move |visit: &Visit<'_, G>| f(visit).into_signal());
        self
    }

    /// Replaces [`Visitor::finish_search`].
    #[must_use]
    pub fn on_finish_search<F, R>(mut self, mut f: F) -> Self
    where
        F: FnMut(&G) -> R + 'a,
        R: HookOutput<SearchControl, E>,
    {
        self.finish_search = Box::new(move |graph: &G| f(graph).into_signal());
        self
    }
}

impl<G: Graph + ?Sized, E> Visitor<G> for FnVisitor<'_, G, E> {
    type Error = E;

    fn begin_search(&mut self, graph: &G) -> Result<SearchControl, E> {
        (self.begin_search)(graph)
    }

    fn discover_vertex(&mut self, visit: &Visit<'_, G>) -> Result<Control, E> {
        (self.discover_vertex)(visit)
    }

    fn discover_branch(&mut self, visit: &Visit<'_, G>) -> Result<Control, E> {
        (self.discover_branch)(visit)
    }

    fn discover_leaf(&mut self, visit: &Visit<'_, G>) -> Result<Control, E> {
        (self.discover_leaf)(visit)
    }

    fn discover_new_edge(&mut self, edge: &EdgeVisit<'_, G>) -> Result<Control, E> {
        (self.discover_new_edge)(edge)
    }

    fn discover_seen_edge(&mut self, edge: &EdgeVisit<'_, G>) -> Result<Control, E> {
        (self.discover_seen_edge)(edge)
    }

    fn finish_vertex(&mut self, visit: &Visit<'_, G>) -> Result<SearchControl, E> {
        (self.finish_vertex)(visit)
    }

    fn finish_search(&mut self, graph: &G) -> Result<SearchControl, E> {
        (self.finish_search)(graph)
    }
}

impl<G: Graph + ?Sized, E> fmt::Debug for FnVisitor<'_, G, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnVisitor").finish_non_exhaustive()
    }
}
