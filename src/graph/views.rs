//! Graph views.

use crate::graph::{Capabilities, Edge, Graph, GraphEdges, Vertices};

/// A view of `G` with every edge reversed.
///
/// Out-edges of the view are the in-edges of the wrapped graph and the other
/// way round, so the advertised in/out capabilities swap as well. An
/// undirected graph is its own transpose; the view still swaps endpoints so
/// edge orientation stays consistent.
#[derive(Debug, Clone, Copy)]
pub struct Transposed<G> {
    inner: G,
}

impl<G: Graph> Transposed<G> {
    /// Wraps `inner`.
    pub const fn new(inner: G) -> Self {
        Self { inner }
    }

    /// Returns the wrapped graph.
    pub const fn inner(&self) -> &G {
        &self.inner
    }

    /// Unwraps the view.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: Graph> Graph for Transposed<G> {
    type Vertex = G::Vertex;
    type EdgeData = G::EdgeData;
    type Compare = G::Compare;

    fn is_directed(&self) -> bool {
        self.inner.is_directed()
    }

    fn capabilities(&self) -> Capabilities {
        let caps = self.inner.capabilities();
        Capabilities {
            out_edges: caps.in_edges,
            in_edges: caps.out_edges,
            ..caps
        }
    }

    fn vertices(&self) -> Vertices<'_, Self::Vertex> {
        self.inner.vertices()
    }

    fn edges(&self) -> GraphEdges<'_, Self> {
        Box::new(self.inner.edges().map(Edge::transposed))
    }

    fn out_edges(&self, vertex: &Self::Vertex) -> GraphEdges<'_, Self> {
        Box::new(self.inner.in_edges(vertex).map(Edge::transposed))
    }

    fn in_edges(&self, vertex: &Self::Vertex) -> GraphEdges<'_, Self> {
        Box::new(self.inner.out_edges(vertex).map(Edge::transposed))
    }
}
