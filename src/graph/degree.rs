//! Degree queries.
//!
//! Degrees count the edges on one side of a vertex through the same
//! capability resolution the algorithms use, so they work on any graph that
//! can list out-edges (or in-edges) in some way. The root, branch and leaf
//! classifications only make sense for directed graphs.

use crate::error::CapabilityError;
use crate::graph::access::{require_directed, EdgeAccess};
use crate::graph::Graph;

/// Returns the number of edges leaving `vertex`. Self-loops count once.
///
/// # Errors
///
/// Returns [`CapabilityError::Missing`] if out-edges cannot be listed.
pub fn out_degree<G: Graph + ?Sized>(graph: &G, vertex: &G::Vertex) -> Result<usize, CapabilityError> {
    let access = EdgeAccess::outgoing(graph, "out_degree")?;
    Ok(access.edges(graph, vertex).count())
}

/// Returns the number of edges entering `vertex`. Self-loops count once.
///
/// # Errors
///
/// Returns [`CapabilityError::Missing`] if in-edges cannot be listed.
pub fn in_degree<G: Graph + ?Sized>(graph: &G, vertex: &G::Vertex) -> Result<usize, CapabilityError> {
    let access = EdgeAccess::incoming(graph, "in_degree")?;
    Ok(access.edges(graph, vertex).count())
}

/// Returns `true` if no edge enters `vertex`.
///
/// # Errors
///
/// Fails on undirected graphs and on graphs that cannot list in-edges.
pub fn is_root<G: Graph + ?Sized>(graph: &G, vertex: &G::Vertex) -> Result<bool, CapabilityError> {
    require_directed(graph, "is_root")?;
    let access = EdgeAccess::incoming(graph, "is_root")?;
    Ok(access.edges(graph, vertex).next().is_none())
}

/// Returns `true` if at least one edge leaves `vertex`.
///
/// # Errors
///
/// Fails on undirected graphs and on graphs that cannot list out-edges.
pub fn is_branch<G: Graph + ?Sized>(graph: &G, vertex: &G::Vertex) -> Result<bool, CapabilityError> {
    require_directed(graph, "is_branch")?;
    let access = EdgeAccess::outgoing(graph, "is_branch")?;
    Ok(access.edges(graph, vertex).next().is_some())
}

/// Returns `true` if no edge leaves `vertex`.
///
/// # Errors
///
/// Fails on undirected graphs and on graphs that cannot list out-edges.
pub fn is_leaf<G: Graph + ?Sized>(graph: &G, vertex: &G::Vertex) -> Result<bool, CapabilityError> {
    is_branch(graph, vertex).map(|branch| !branch)
}
