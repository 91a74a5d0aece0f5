//! Breadth-first and depth-first search.
//!
//! Both searches run the same engine and differ only in the frontier: a
//! first-in first-out queue gives breadth-first order, a last-in first-out
//! stack gives depth-first order. A vertex is *discovered* when it is taken
//! from the frontier, and is marked visited when it is put there, so with a
//! tracking visited set every reachable vertex is discovered exactly once.
//!
//! Each entry point resolves out-edge access before asking any provider for
//! storage; a graph that cannot list out-edges is rejected with
//! [`SearchError::Capability`] and no hook runs.
//!
//! | Entry point | Frontier | Visited set |
//! |-------------|----------|-------------|
//! | [`breadth_first_search`] | `VecDeque` | `HashSet` |
//! | [`depth_first_search`] | `Vec` | `HashSet` |
//! | [`breadth_first_search_with`] | any [`DequeStorage`] | any [`SetStorage`] |
//! | [`depth_first_search_with`] | any [`SequenceStorage`] | any [`SetStorage`] |
//! | [`traverse`] | any [`Frontier`] | any [`SetStorage`] |

mod engine;
pub mod visitor;

#[cfg(test)]
mod tests;

pub use engine::{Frontier, GraphPending, Pending, Queue, Stack};
pub use visitor::{
    fallible_visitor_for, visitor_for, Control, EdgeVisit, FnVisitor, HookOutput, SearchControl,
    SearchOutcome, Visit, Visitor,
};

use std::collections::{HashSet, VecDeque};

use crate::error::{CapabilityError, SearchError};
use crate::graph::access::EdgeAccess;
use crate::graph::{Graph, VertexKey};
use crate::storage::{DefaultStorage, DequeStorage, SequenceStorage, SetStorage, StorageProvider};

fn resolve<G: Graph + ?Sized>(graph: &G, operation: &'static str) -> Result<EdgeAccess, CapabilityError> {
    let access = EdgeAccess::outgoing(graph, operation)?;
    #[cfg(feature = "tracing")]
    tracing::debug!(
        operation,
        directed = graph.is_directed(),
        direct = access.is_direct(),
        "search started"
    );
    Ok(access)
}

/// Searches from `roots` with a caller-chosen frontier and visited set.
///
/// # Errors
///
/// [`SearchError::Capability`] if `graph` cannot list out-edges;
/// [`SearchError::Visitor`] if a hook fails.
pub fn traverse<G, R, V, F, FP, S, SP>(
    graph: &G,
    roots: R,
    mut visitor: V,
    frontier: FP,
    visited: SP,
) -> Result<SearchOutcome, SearchError<V::Error>>
where
    G: Graph + ?Sized,
    R: IntoIterator<Item = G::Vertex>,
    V: Visitor<G>,
    FP: StorageProvider<F>,
    F: Frontier<GraphPending<G>>,
    SP: StorageProvider<S>,
    S: SetStorage<VertexKey<G>>,
{
    let access = resolve(graph, "traverse")?;
    let mut frontier = frontier.provide();
    let mut visited = visited.provide();
    engine::run(graph, access, roots, &mut visitor, &mut frontier, &mut visited)
        .map_err(SearchError::Visitor)
}

/// Breadth-first search from `roots` with default storage.
///
/// # Errors
///
/// See [`traverse`].
pub fn breadth_first_search<G, R, V>(
    graph: &G,
    roots: R,
    visitor: V,
) -> Result<SearchOutcome, SearchError<V::Error>>
where
    G: Graph + ?Sized,
    R: IntoIterator<Item = G::Vertex>,
    V: Visitor<G>,
{
    breadth_first_search_with(
        graph,
        roots,
        visitor,
        DefaultStorage::<VecDeque<GraphPending<G>>>::new(),
        DefaultStorage::<HashSet<VertexKey<G>>>::new(),
    )
}

/// Breadth-first search from `roots` with caller-provided storage.
///
/// # Errors
///
/// See [`traverse`].
pub fn breadth_first_search_with<G, R, V, Q, QP, S, SP>(
    graph: &G,
    roots: R,
    mut visitor: V,
    queue: QP,
    visited: SP,
) -> Result<SearchOutcome, SearchError<V::Error>>
where
    G: Graph + ?Sized,
    R: IntoIterator<Item = G::Vertex>,
    V: Visitor<G>,
    QP: StorageProvider<Q>,
    Q: DequeStorage<GraphPending<G>>,
    SP: StorageProvider<S>,
    S: SetStorage<VertexKey<G>>,
{
    let access = resolve(graph, "breadth_first_search")?;
    let mut frontier = Queue(queue.provide());
    let mut visited = visited.provide();
    engine::run(graph, access, roots, &mut visitor, &mut frontier, &mut visited)
        .map_err(SearchError::Visitor)
}

/// Depth-first search from `roots` with default storage.
///
/// # Errors
///
/// See [`traverse`].
pub fn depth_first_search<G, R, V>(
    graph: &G,
    roots: R,
    visitor: V,
) -> Result<SearchOutcome, SearchError<V::Error>>
where
    G: Graph + ?Sized,
    R: IntoIterator<Item = G::Vertex>,
    V: Visitor<G>,
{
    depth_first_search_with(
        graph,
        roots,
        visitor,
        DefaultStorage::<Vec<GraphPending<G>>>::new(),
        DefaultStorage::<HashSet<VertexKey<G>>>::new(),
    )
}

/// Depth-first search from `roots` with caller-provided storage.
///
/// # Errors
///
/// See [`traverse`].
pub fn depth_first_search_with<G, R, V, K, KP, S, SP>(
    graph: &G,
    roots: R,
    mut visitor: V,
    stack: KP,
    visited: SP,
) -> Result<SearchOutcome, SearchError<V::Error>>
where
    G: Graph + ?Sized,
    R: IntoIterator<Item = G::Vertex>,
    V: Visitor<G>,
    KP: StorageProvider<K>,
    K: SequenceStorage<GraphPending<G>>,
    SP: StorageProvider<S>,
    S: SetStorage<VertexKey<G>>,
{
    let access = resolve(graph, "depth_first_search")?;
    let mut frontier = Stack(stack.provide());
    let mut visited = visited.provide();
    engine::run(graph, access, roots, &mut visitor, &mut frontier, &mut visited)
        .map_err(SearchError::Visitor)
}

/// Returns every vertex reachable from `roots` with its hop distance from
/// the nearest root, in breadth-first order.
///
/// # Errors
///
/// Fails if `graph` cannot list out-edges.
pub fn shortest_depths<G, R>(graph: &G, roots: R) -> Result<Vec<(G::Vertex, usize)>, CapabilityError>
where
    G: Graph + ?Sized,
    R: IntoIterator<Item = G::Vertex>,
{
    let mut depths = Vec::new();
    let visitor = visitor_for(graph).on_discover_vertex(|visit| {
        depths.push((visit.vertex.clone(), visit.depth));
    });
    breadth_first_search(graph, roots, visitor)?;
    Ok(depths)
}
