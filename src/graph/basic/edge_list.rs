//! A graph stored as a flat list of edges.

use std::collections::HashSet;
use std::hash::Hash;

use crate::graph::{ByValue, Capabilities, Edge, Graph, GraphEdges, Keyed, VertexCompare, Vertices};

/// A graph that only knows its vertex and edge lists.
///
/// It advertises vertex-list and edge-list access and nothing else, so
/// algorithms reach neighbours through the edge-list fallback. Vertices are
/// kept in first-appearance order and de-duplicated under the identity
/// policy `C`.
pub struct EdgeListGraph<V, D = (), C = ByValue> {
    vertices: Vec<V>,
    known: HashSet<Keyed<V, C>>,
    edges: Vec<Edge<V, D>>,
    directed: bool,
}

impl<V, D, C> EdgeListGraph<V, D, C>
where
    V: Clone,
    C: VertexCompare<V>,
{
    /// Creates an empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: Vec::new(),
            known: HashSet::new(),
            edges: Vec::new(),
            directed,
        }
    }

    /// Adds `vertex` unless an equal one is already present.
    ///
    /// Returns `true` if the vertex was new.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        let fresh = self.known.insert(Keyed::new(vertex.clone()));
        if fresh {
            self.vertices.push(vertex);
        }
        fresh
    }

    /// Adds an edge carrying `data`, adding missing endpoints as vertices.
    pub fn add_edge_with(&mut self, tail: V, head: V, data: D) {
        self.add_vertex(tail.clone());
        self.add_vertex(head.clone());
        self.edges.push(Edge::with_data(tail, head, data));
    }

    /// Returns the number of distinct vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of stored edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<V, C> EdgeListGraph<V, (), C>
where
    V: Clone,
    C: VertexCompare<V>,
{
    /// Adds an edge, adding missing endpoints as vertices.
    pub fn add_edge(&mut self, tail: V, head: V) {
        self.add_edge_with(tail, head, ());
    }

    fn from_pairs<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new(directed);
        for (tail, head) in edges {
            graph.add_edge(tail, head);
        }
        graph
    }
}

impl<V> EdgeListGraph<V>
where
    V: Clone + Eq + Hash,
{
    /// Builds a directed graph from `(tail, head)` pairs.
    pub fn directed_from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        Self::from_pairs(true, edges)
    }

    /// Builds an undirected graph from endpoint pairs.
    pub fn undirected_from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        Self::from_pairs(false, edges)
    }
}

impl<V, D, C> Graph for EdgeListGraph<V, D, C>
where
    V: Clone,
    D: Clone,
    C: VertexCompare<V>,
{
    type Vertex = V;
    type EdgeData = D;
    type Compare = C;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE.with_vertex_list().with_edge_list()
    }

    fn vertices(&self) -> Vertices<'_, V> {
        Box::new(self.vertices.iter().cloned())
    }

    fn edges(&self) -> GraphEdges<'_, Self> {
        Box::new(self.edges.iter().cloned())
    }
}

impl<V: std::fmt::Debug, D: std::fmt::Debug, C> std::fmt::Debug for EdgeListGraph<V, D, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeListGraph")
            .field("directed", &self.directed)
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish()
    }
}
