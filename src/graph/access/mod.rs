//! Capability resolution.
//!
//! Algorithms resolve how they will reach the neighbours of a vertex exactly
//! once, at entry, and keep the resulting [`EdgeAccess`] for the whole call.
//! Resolution prefers the most direct operation the graph advertises:
//!
//! | Wanted    | 1st choice  | 2nd choice (undirected only) | 3rd choice           |
//! |-----------|-------------|------------------------------|----------------------|
//! | out-edges | `out_edges` | `in_edges`, transposed       | `edges`, by tail     |
//! | in-edges  | `in_edges`  | `out_edges`, transposed      | `edges`, by head     |
//!
//! On an undirected graph a stored edge may come back in either orientation
//! from any of these listings, so every edge is matched on either endpoint
//! and oriented so that the requested vertex sits on the expected side.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CapabilityError;
use crate::graph::{Graph, GraphEdge, GraphEdges, VertexCompare};

/// A graph operation an algorithm may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Requirement {
    /// Enumerating every vertex.
    VertexList,
    /// Enumerating every edge.
    EdgeList,
    /// Listing the edges leaving a vertex.
    OutEdges,
    /// Listing the edges entering a vertex.
    InEdges,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VertexList => "vertex-list",
            Self::EdgeList => "edge-list",
            Self::OutEdges => "out-edge",
            Self::InEdges => "in-edge",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Outgoing,
    Incoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Direct,
    Transposed,
    EdgeList,
}

/// A resolved way of listing the edges on one side of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeAccess {
    direction: Direction,
    source: Source,
    directed: bool,
}

impl EdgeAccess {
    /// Resolves out-edge access for `graph`.
    ///
    /// `operation` names the caller in the error.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError::Missing`] if no advertised operation can
    /// produce out-edges.
    pub fn outgoing<G: Graph + ?Sized>(
        graph: &G,
        operation: &'static str,
    ) -> Result<Self, CapabilityError> {
        Self::resolve(graph, Direction::Outgoing, operation)
    }

    /// Resolves in-edge access for `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError::Missing`] if no advertised operation can
    /// produce in-edges.
    pub fn incoming<G: Graph + ?Sized>(
        graph: &G,
        operation: &'static str,
    ) -> Result<Self, CapabilityError> {
        Self::resolve(graph, Direction::Incoming, operation)
    }

    fn resolve<G: Graph + ?Sized>(
        graph: &G,
        direction: Direction,
        operation: &'static str,
    ) -> Result<Self, CapabilityError> {
        let caps = graph.capabilities();
        let directed = graph.is_directed();
        let (direct, opposite, requirement) = match direction {
            Direction::Outgoing => (caps.out_edges, caps.in_edges, Requirement::OutEdges),
            Direction::Incoming => (caps.in_edges, caps.out_edges, Requirement::InEdges),
        };

        let source = if direct {
            Source::Direct
        } else if opposite && !directed {
            Source::Transposed
        } else if caps.edge_list {
            Source::EdgeList
        } else {
            return Err(missing(operation, requirement));
        };

        Ok(Self {
            direction,
            source,
            directed,
        })
    }

    /// Returns `true` if edges come straight from the graph's own per-vertex
    /// listing rather than being derived.
    pub fn is_direct(&self) -> bool {
        self.source == Source::Direct
    }

    /// Lists the edges of `vertex` on the resolved side.
    ///
    /// Out-edges always have `vertex` as their tail and in-edges as their
    /// head, including on undirected graphs.
    pub fn edges<'g, G: Graph + ?Sized>(
        self,
        graph: &'g G,
        vertex: &G::Vertex,
    ) -> AccessEdges<'g, G> {
        let inner = match (self.source, self.direction) {
            (Source::Direct, Direction::Outgoing) | (Source::Transposed, Direction::Incoming) => {
                graph.out_edges(vertex)
            }
            (Source::Direct, Direction::Incoming) | (Source::Transposed, Direction::Outgoing) => {
                graph.in_edges(vertex)
            }
            (Source::EdgeList, _) => graph.edges(),
        };
        // Transposed access only resolves on undirected graphs.
        let mode = match (self.directed, self.source, self.direction) {
            (false, _, direction) => Mode::Incident(vertex.clone(), direction),
            (true, Source::Direct | Source::Transposed, _) => Mode::Pass,
            (true, Source::EdgeList, Direction::Outgoing) => Mode::Tail(vertex.clone()),
            (true, Source::EdgeList, Direction::Incoming) => Mode::Head(vertex.clone()),
        };
        AccessEdges { inner, mode }
    }
}

/// Fails with [`CapabilityError::Missing`] unless `graph` lists its vertices.
///
/// # Errors
///
/// See above.
pub fn require_vertex_list<G: Graph + ?Sized>(
    graph: &G,
    operation: &'static str,
) -> Result<(), CapabilityError> {
    if graph.capabilities().vertex_list {
        Ok(())
    } else {
        Err(missing(operation, Requirement::VertexList))
    }
}

/// Fails with [`CapabilityError::Undirected`] unless `graph` is directed.
///
/// # Errors
///
/// See above.
pub fn require_directed<G: Graph + ?Sized>(
    graph: &G,
    operation: &'static str,
) -> Result<(), CapabilityError> {
    if graph.is_directed() {
        Ok(())
    } else {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation, "rejected undirected graph");
        Err(CapabilityError::Undirected { operation })
    }
}

fn missing(operation: &'static str, requirement: Requirement) -> CapabilityError {
    #[cfg(feature = "tracing")]
    tracing::debug!(operation, %requirement, "graph lacks a required capability");
    CapabilityError::Missing {
        operation,
        requirement,
    }
}

enum Mode<V> {
    Pass,
    Tail(V),
    Head(V),
    Incident(V, Direction),
}

/// Edges produced by an [`EdgeAccess`].
pub struct AccessEdges<'g, G: Graph + ?Sized> {
    inner: GraphEdges<'g, G>,
    mode: Mode<G::Vertex>,
}

impl<G: Graph + ?Sized> Iterator for AccessEdges<'_, G> {
    type Item = GraphEdge<G>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let edge = self.inner.next()?;
            match &self.mode {
                Mode::Pass => return Some(edge),
                Mode::Tail(v) => {
                    if G::Compare::eq(&edge.tail, v) {
                        return Some(edge);
                    }
                }
                Mode::Head(v) => {
                    if G::Compare::eq(&edge.head, v) {
                        return Some(edge);
                    }
                }
                Mode::Incident(v, direction) => {
                    let (near, far) = match direction {
                        Direction::Outgoing => (&edge.tail, &edge.head),
                        Direction::Incoming => (&edge.head, &edge.tail),
                    };
                    if G::Compare::eq(near, v) {
                        return Some(edge);
                    }
                    if G::Compare::eq(far, v) {
                        return Some(edge.transposed());
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.mode {
            Mode::Pass => self.inner.size_hint(),
            _ => (0, self.inner.size_hint().1),
        }
    }
}

impl<G: Graph + ?Sized> fmt::Debug for AccessEdges<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.mode {
            Mode::Pass => "pass",
            Mode::Tail(_) => "tail",
            Mode::Head(_) => "head",
            Mode::Incident(..) => "incident",
        };
        f.debug_struct("AccessEdges").field("mode", &mode).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyList, Capabilities, Edge, EdgeListGraph};

    #[test]
    fn prefers_direct_out_edges() {
        let g = AdjacencyList::from_adjacency(vec![vec![1], vec![]]);
        let access = EdgeAccess::outgoing(&g, "test").unwrap();
        assert!(access.is_direct());
        let edges: Vec<_> = access.edges(&g, &0).collect();
        assert_eq!(edges, vec![Edge::new(0, 1)]);
    }

    #[test]
    fn directed_edge_list_filters_by_endpoint() {
        let g = EdgeListGraph::directed_from_edges([(1, 2), (2, 3), (1, 3)]);
        let out = EdgeAccess::outgoing(&g, "test").unwrap();
        assert!(!out.is_direct());
        let heads: Vec<_> = out.edges(&g, &1).map(|e| e.head).collect();
        assert_eq!(heads, vec![2, 3]);

        let incoming = EdgeAccess::incoming(&g, "test").unwrap();
        let tails: Vec<_> = incoming.edges(&g, &3).map(|e| e.tail).collect();
        assert_eq!(tails, vec![2, 1]);
    }

    #[test]
    fn undirected_edge_list_orients_matches() {
        let g = EdgeListGraph::undirected_from_edges([(1, 2), (3, 1)]);
        let out = EdgeAccess::outgoing(&g, "test").unwrap();
        let edges: Vec<_> = out.edges(&g, &1).collect();
        assert_eq!(edges, vec![Edge::new(1, 2), Edge::new(1, 3)]);
    }

    #[test]
    fn undirected_in_edges_stand_in_for_out_edges() {
        struct InOnly;

        impl Graph for InOnly {
            type Vertex = u8;
            type EdgeData = ();
            type Compare = crate::graph::ByValue;

            fn is_directed(&self) -> bool {
                false
            }

            fn capabilities(&self) -> Capabilities {
                Capabilities::NONE.with_in_edges()
            }

            fn in_edges(&self, vertex: &u8) -> GraphEdges<'_, Self> {
                Box::new(core::iter::once(Edge::new(vertex.wrapping_add(1), *vertex)))
            }
        }

        let access = EdgeAccess::outgoing(&InOnly, "test").unwrap();
        let edges: Vec<_> = access.edges(&InOnly, &4).collect();
        assert_eq!(edges, vec![Edge::new(4, 5)]);
    }

    /// One undirected edge stored as `1 -- 2`, listed as stored from both ends.
    struct StoredOnce;

    impl Graph for StoredOnce {
        type Vertex = u8;
        type EdgeData = ();
        type Compare = crate::graph::ByValue;

        fn is_directed(&self) -> bool {
            false
        }

        fn capabilities(&self) -> Capabilities {
            Capabilities::NONE.with_out_edges().with_in_edges()
        }

        fn out_edges(&self, vertex: &u8) -> GraphEdges<'_, Self> {
            Box::new(Some(Edge::new(1, 2)).filter(|_| matches!(*vertex, 1 | 2)).into_iter())
        }

        fn in_edges(&self, vertex: &u8) -> GraphEdges<'_, Self> {
            self.out_edges(vertex)
        }
    }

    #[test]
    fn undirected_direct_listing_is_oriented_from_the_vertex() {
        let out = EdgeAccess::outgoing(&StoredOnce, "test").unwrap();
        assert!(out.is_direct());
        assert_eq!(out.edges(&StoredOnce, &1).collect::<Vec<_>>(), vec![Edge::new(1, 2)]);
        assert_eq!(out.edges(&StoredOnce, &2).collect::<Vec<_>>(), vec![Edge::new(2, 1)]);

        let incoming = EdgeAccess::incoming(&StoredOnce, "test").unwrap();
        assert_eq!(incoming.edges(&StoredOnce, &1).collect::<Vec<_>>(), vec![Edge::new(2, 1)]);

        assert_eq!(crate::search::shortest_depths(&StoredOnce, [2]).unwrap(), vec![(2, 0), (1, 1)]);
        assert_eq!(crate::search::shortest_depths(&StoredOnce, [1]).unwrap(), vec![(1, 0), (2, 1)]);
    }

    #[test]
    fn directed_in_edges_do_not_stand_in_for_out_edges() {
        let g = AdjacencyList::from_adjacency(vec![vec![1], vec![]]).with_in_edges();
        let transposed = crate::graph::Transposed::new(&g);
        assert!(EdgeAccess::outgoing(&transposed, "test").is_ok());

        struct Bare;
        impl Graph for Bare {
            type Vertex = u8;
            type EdgeData = ();
            type Compare = crate::graph::ByValue;
            fn is_directed(&self) -> bool {
                true
            }
            fn capabilities(&self) -> Capabilities {
                Capabilities::NONE.with_in_edges().with_vertex_list()
            }
        }

        let err = EdgeAccess::outgoing(&Bare, "probe").unwrap_err();
        assert_eq!(
            err,
            CapabilityError::Missing {
                operation: "probe",
                requirement: Requirement::OutEdges,
            }
        );
    }
}
