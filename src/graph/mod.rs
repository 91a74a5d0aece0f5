//! The graph contract consumed by the search and component algorithms.
//!
//! A graph is any value that reports its directedness, the operations it
//! really supports ([`Capabilities`]), and some subset of:
//! - the full vertex list
//! - the full edge list
//! - the out-edges of a vertex
//! - the in-edges of a vertex
//!
//! Algorithms never call an operation the graph did not advertise. They
//! resolve an access path once at entry (see [`access`]) and fail with a
//! [`CapabilityError`](crate::CapabilityError) before touching any state when
//! nothing fits.
//!
//! Graph implementations shipped with the crate are organized into:
//! - `basic`: small owned graph representations
//! - `views`: adaptors that reinterpret another graph without copying it

pub mod access;
pub mod basic;
pub mod compare;
pub mod degree;
pub mod views;

pub use access::{AccessEdges, EdgeAccess, Requirement};
pub use basic::{AdjacencyList, EdgeListGraph};
pub use compare::{ByAddress, ByValue, Keyed, VertexCompare};
pub use views::Transposed;

use serde::{Deserialize, Serialize};

/// An ordered `(tail, head)` pair of vertices carrying an associated value.
///
/// For undirected graphs the orientation only records how the edge was
/// reached: the search engine always hands out edges whose `tail` is the
/// vertex being expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<V, D = ()> {
    /// The vertex the edge leaves.
    pub tail: V,
    /// The vertex the edge enters.
    pub head: V,
    /// The value attached to the edge.
    pub data: D,
}

impl<V> Edge<V> {
    /// Creates an edge without an attached value.
    #[inline]
    pub const fn new(tail: V, head: V) -> Self {
        Self {
            tail,
            head,
            data: (),
        }
    }
}

impl<V, D> Edge<V, D> {
    /// Creates an edge carrying `data`.
    #[inline]
    pub const fn with_data(tail: V, head: V, data: D) -> Self {
        Self { tail, head, data }
    }

    /// Returns the same edge with `tail` and `head` swapped.
    #[inline]
    #[must_use]
    pub fn transposed(self) -> Self {
        Self {
            tail: self.head,
            head: self.tail,
            data: self.data,
        }
    }
}

/// The operations a graph value actually supports.
///
/// An algorithm only calls a method whose flag is set, so a flag must only
/// be set when the matching [`Graph`] method is overridden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    /// [`Graph::vertices`] lists every vertex.
    pub vertex_list: bool,
    /// [`Graph::edges`] lists every edge (once per undirected edge).
    pub edge_list: bool,
    /// [`Graph::out_edges`] lists the edges leaving a vertex.
    pub out_edges: bool,
    /// [`Graph::in_edges`] lists the edges entering a vertex.
    pub in_edges: bool,
}

impl Capabilities {
    /// No operation is supported.
    pub const NONE: Self = Self {
        vertex_list: false,
        edge_list: false,
        out_edges: false,
        in_edges: false,
    };

    /// Every operation is supported.
    pub const ALL: Self = Self {
        vertex_list: true,
        edge_list: true,
        out_edges: true,
        in_edges: true,
    };

    /// Adds vertex enumeration.
    #[must_use]
    pub const fn with_vertex_list(mut self) -> Self {
        self.vertex_list = true;
        self
    }

    /// Adds full edge enumeration.
    #[must_use]
    pub const fn with_edge_list(mut self) -> Self {
        self.edge_list = true;
        self
    }

    /// Adds per-vertex out-edges.
    #[must_use]
    pub const fn with_out_edges(mut self) -> Self {
        self.out_edges = true;
        self
    }

    /// Adds per-vertex in-edges.
    #[must_use]
    pub const fn with_in_edges(mut self) -> Self {
        self.in_edges = true;
        self
    }

    /// Returns `true` if the operation named by `requirement` is supported
    /// directly, without any derivation.
    pub const fn supports(self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::VertexList => self.vertex_list,
            Requirement::EdgeList => self.edge_list,
            Requirement::OutEdges => self.out_edges,
            Requirement::InEdges => self.in_edges,
        }
    }
}

/// A boxed iterator over vertices.
pub type Vertices<'a, V> = Box<dyn Iterator<Item = V> + 'a>;

/// The edge type of graph `G`.
pub type GraphEdge<G> = Edge<<G as Graph>::Vertex, <G as Graph>::EdgeData>;

/// A boxed iterator over the edges of graph `G`.
pub type GraphEdges<'a, G> = Box<dyn Iterator<Item = GraphEdge<G>> + 'a>;

/// A vertex of graph `G` keyed by the graph's identity policy.
pub type VertexKey<G> = Keyed<<G as Graph>::Vertex, <G as Graph>::Compare>;

/// A read-only graph.
///
/// Only [`is_directed`](Graph::is_directed) and
/// [`capabilities`](Graph::capabilities) are mandatory. The enumeration
/// methods default to empty iterators and must be overridden for every flag
/// set in [`Capabilities`].
///
/// Directedness and capabilities must not change for the lifetime of the
/// value, and the graph must not change while an algorithm borrows it.
///
/// # Example
///
/// ```rust
/// use skein::graph::{ByValue, Capabilities, Edge, Graph, GraphEdges, Vertices};
///
/// /// `i -> i + 1` for every `i < len - 1`.
/// struct Chain {
///     len: u32,
/// }
///
/// impl Graph for Chain {
///     type Vertex = u32;
///     type EdgeData = ();
///     type Compare = ByValue;
///
///     fn is_directed(&self) -> bool {
///         true
///     }
///
///     fn capabilities(&self) -> Capabilities {
///         Capabilities::NONE.with_vertex_list().with_out_edges()
///     }
///
///     fn vertices(&self) -> Vertices<'_, u32> {
///         Box::new(0..self.len)
///     }
///
///     fn out_edges(&self, vertex: &u32) -> GraphEdges<'_, Self> {
///         let next = vertex + 1;
///         Box::new((next < self.len).then(|| Edge::new(*vertex, next)).into_iter())
///     }
/// }
///
/// let depths = skein::search::shortest_depths(&Chain { len: 4 }, [0]).unwrap();
/// assert_eq!(depths, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
/// ```
pub trait Graph {
    /// The vertex type.
    type Vertex: Clone;
    /// The value attached to every edge (`()` when edges carry nothing).
    type EdgeData: Clone;
    /// The identity policy for vertices.
    type Compare: VertexCompare<Self::Vertex>;

    /// Returns `true` if `(a, b)` and `(b, a)` are distinct edges.
    fn is_directed(&self) -> bool;

    /// Returns the operations this graph supports.
    fn capabilities(&self) -> Capabilities;

    /// Lists every vertex.
    fn vertices(&self) -> Vertices<'_, Self::Vertex> {
        Box::new(core::iter::empty())
    }

    /// Lists every edge. Undirected graphs list each edge once, in either
    /// orientation.
    fn edges(&self) -> GraphEdges<'_, Self> {
        Box::new(core::iter::empty())
    }

    /// Lists the edges whose tail is `vertex`.
    fn out_edges(&self, vertex: &Self::Vertex) -> GraphEdges<'_, Self> {
        let _ = vertex;
        Box::new(core::iter::empty())
    }

    /// Lists the edges whose head is `vertex`.
    fn in_edges(&self, vertex: &Self::Vertex) -> GraphEdges<'_, Self> {
        let _ = vertex;
        Box::new(core::iter::empty())
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    type Vertex = G::Vertex;
    type EdgeData = G::EdgeData;
    type Compare = G::Compare;

    #[inline]
    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    #[inline]
    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }

    fn vertices(&self) -> Vertices<'_, Self::Vertex> {
        (**self).vertices()
    }

    fn edges(&self) -> GraphEdges<'_, Self> {
        (**self).edges()
    }

    fn out_edges(&self, vertex: &Self::Vertex) -> GraphEdges<'_, Self> {
        (**self).out_edges(vertex)
    }

    fn in_edges(&self, vertex: &Self::Vertex) -> GraphEdges<'_, Self> {
        (**self).in_edges(vertex)
    }
}
