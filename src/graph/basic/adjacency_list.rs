//! A dense adjacency-list graph over `usize` vertices.

use crate::graph::{ByValue, Capabilities, Edge, Graph, GraphEdges, Vertices};

/// An adjacency-list graph whose vertices are `0..vertex_count`.
///
/// Directed graphs store each edge once, under its tail. Undirected graphs
/// store each edge under both endpoints (a self-loop once) and list it once
/// from [`Graph::edges`].
///
/// In-edges are available for undirected graphs, and for directed graphs
/// once [`with_in_edges`](Self::with_in_edges) has built the reverse index.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends an empty list |
/// | `add_edge` | \(O(1)\) amortized | Parallel edges are kept |
/// | `out_edges` | \(O(1)\) to start | Iterates the stored list |
/// | `in_edges` | \(O(1)\) to start | Requires the reverse index when directed |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    adjacency: Vec<Vec<usize>>,
    reverse: Option<Vec<Vec<usize>>>,
    directed: bool,
}

impl AdjacencyList {
    /// Creates a directed graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            reverse: None,
            directed: true,
        }
    }

    /// Creates an undirected graph with `vertex_count` vertices and no edges.
    pub fn new_undirected(vertex_count: usize) -> Self {
        Self {
            directed: false,
            ..Self::new(vertex_count)
        }
    }

    /// Creates a directed graph from adjacency lists.
    ///
    /// # Panics
    /// Panics if any neighbor index is out of bounds.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Self {
        let n = adjacency.len();
        for (u, nbrs) in adjacency.iter().enumerate() {
            for &v in nbrs {
                assert!(v < n, "edge {u}->{v} out of bounds for n={n}");
            }
        }
        Self {
            adjacency,
            reverse: None,
            directed: true,
        }
    }

    /// Creates a directed graph with `vertex_count` vertices from `(tail, head)` pairs.
    ///
    /// # Panics
    /// Panics if an endpoint is out of bounds.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        graph.extend_edges(edges);
        graph
    }

    /// Creates an undirected graph with `vertex_count` vertices from endpoint pairs.
    ///
    /// # Panics
    /// Panics if an endpoint is out of bounds.
    pub fn undirected_from_edges<I>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new_undirected(vertex_count);
        graph.extend_edges(edges);
        graph
    }

    /// Builds the reverse index so that a directed graph can list in-edges.
    #[must_use]
    pub fn with_in_edges(mut self) -> Self {
        if self.directed && self.reverse.is_none() {
            let mut reverse = vec![Vec::new(); self.adjacency.len()];
            for (u, nbrs) in self.adjacency.iter().enumerate() {
                for &v in nbrs {
                    reverse[v].push(u);
                }
            }
            self.reverse = Some(reverse);
        }
        self
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self) -> usize {
        let idx = self.adjacency.len();
        self.adjacency.push(Vec::new());
        if let Some(reverse) = &mut self.reverse {
            reverse.push(Vec::new());
        }
        idx
    }

    /// Adds the edge `from -> to` (or `from -- to` when undirected).
    ///
    /// # Panics
    /// Panics if `from` or `to` are out of bounds.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        let n = self.vertex_count();
        assert!(from < n, "from vertex {from} out of bounds");
        assert!(to < n, "to vertex {to} out of bounds");

        self.adjacency[from].push(to);
        if self.directed {
            if let Some(reverse) = &mut self.reverse {
                reverse[to].push(from);
            }
        } else if from != to {
            self.adjacency[to].push(from);
        }
    }

    fn extend_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges (undirected edges count once).
    pub fn edge_count(&self) -> usize {
        if self.directed {
            self.adjacency.iter().map(Vec::len).sum()
        } else {
            self.undirected_pairs().count()
        }
    }

    /// Returns the stored neighbours of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        assert!(vertex < self.vertex_count(), "vertex {vertex} out of bounds");
        &self.adjacency[vertex]
    }

    fn undirected_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, nbrs)| nbrs.iter().filter(move |&&v| u <= v).map(move |&v| (u, v)))
    }
}

impl Graph for AdjacencyList {
    type Vertex = usize;
    type EdgeData = ();
    type Compare = ByValue;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn capabilities(&self) -> Capabilities {
        let caps = Capabilities::NONE
            .with_vertex_list()
            .with_edge_list()
            .with_out_edges();
        if !self.directed || self.reverse.is_some() {
            caps.with_in_edges()
        } else {
            caps
        }
    }

    fn vertices(&self) -> Vertices<'_, usize> {
        Box::new(0..self.adjacency.len())
    }

    fn edges(&self) -> GraphEdges<'_, Self> {
        if self.directed {
            Box::new(
                self.adjacency
                    .iter()
                    .enumerate()
                    .flat_map(|(u, nbrs)| nbrs.iter().map(move |&v| Edge::new(u, v))),
            )
        } else {
            Box::new(self.undirected_pairs().map(|(u, v)| Edge::new(u, v)))
        }
    }

    fn out_edges(&self, vertex: &usize) -> GraphEdges<'_, Self> {
        let u = *vertex;
        let nbrs = self.adjacency.get(u).map_or(&[][..], Vec::as_slice);
        Box::new(nbrs.iter().map(move |&v| Edge::new(u, v)))
    }

    fn in_edges(&self, vertex: &usize) -> GraphEdges<'_, Self> {
        let v = *vertex;
        let preds = if self.directed {
            self.reverse
                .as_ref()
                .and_then(|reverse| reverse.get(v))
                .map_or(&[][..], Vec::as_slice)
        } else {
            self.adjacency.get(v).map_or(&[][..], Vec::as_slice)
        };
        Box::new(preds.iter().map(move |&u| Edge::new(u, v)))
    }
}
