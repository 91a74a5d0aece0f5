//! The traversal loop shared by every search.

use std::collections::VecDeque;

use crate::graph::access::EdgeAccess;
use crate::graph::{Edge, Graph, Keyed, VertexKey};
use crate::storage::{DequeStorage, SequenceStorage, SetStorage};

use super::visitor::{Control, EdgeVisit, SearchControl, SearchOutcome, Visit, Visitor};

/// A vertex waiting in the frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending<V, D = ()> {
    /// The vertex to expand.
    pub vertex: V,
    /// Its depth.
    pub depth: usize,
    /// The tree edge it was reached through.
    pub predecessor: Option<Edge<V, D>>,
}

/// The frontier entry type for graph `G`.
pub type GraphPending<G> = Pending<<G as Graph>::Vertex, <G as Graph>::EdgeData>;

/// The order in which discovered vertices are expanded.
pub trait Frontier<T> {
    /// Adds `item`.
    fn put(&mut self, item: T);
    /// Removes the next item to expand.
    fn take(&mut self) -> Option<T>;
}

/// First in, first out.
impl<T> Frontier<T> for VecDeque<T> {
    #[inline]
    fn put(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn take(&mut self) -> Option<T> {
        self.pop_front()
    }
}

/// Last in, first out.
impl<T> Frontier<T> for Vec<T> {
    #[inline]
    fn put(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    fn take(&mut self) -> Option<T> {
        self.pop()
    }
}

impl<T, F: Frontier<T> + ?Sized> Frontier<T> for &mut F {
    #[inline]
    fn put(&mut self, item: T) {
        (**self).put(item);
    }

    #[inline]
    fn take(&mut self) -> Option<T> {
        (**self).take()
    }
}

/// Uses any [`DequeStorage`] as a first-in first-out frontier.
#[derive(Debug, Clone, Default)]
pub struct Queue<S>(
    /// The backing storage.
    pub S,
);

impl<T, S: DequeStorage<T>> Frontier<T> for Queue<S> {
    #[inline]
    fn put(&mut self, item: T) {
        self.0.push_back(item);
    }

    #[inline]
    fn take(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

/// Uses any [`SequenceStorage`] as a last-in first-out frontier.
#[derive(Debug, Clone, Default)]
pub struct Stack<S>(
    /// The backing storage.
    pub S,
);

impl<T, S: SequenceStorage<T>> Frontier<T> for Stack<S> {
    #[inline]
    fn put(&mut self, item: T) {
        self.0.push(item);
    }

    #[inline]
    fn take(&mut self) -> Option<T> {
        self.0.pop()
    }
}

macro_rules! on_stop {
    ($signal:expr, $outcome:expr) => {
        match $signal {
            Control::Continue => false,
            Control::StopTree => true,
            Control::StopSearch => return Ok($outcome.stopped()),
        }
    };
}

struct Tally {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    discovered: usize,
}

impl Tally {
    fn stopped(&self) -> SearchOutcome {
        #[cfg(feature = "tracing")]
        tracing::debug!(discovered = self.discovered, "search stopped by visitor");
        SearchOutcome::Stopped
    }

    fn finished(&self) -> SearchOutcome {
        #[cfg(feature = "tracing")]
        tracing::debug!(discovered = self.discovered, "search finished");
        SearchOutcome::Finished
    }
}

/// Runs one search. Capability checks and storage provisioning happen
/// before this is called.
pub(crate) fn run<G, R, V, F, S>(
    graph: &G,
    access: EdgeAccess,
    roots: R,
    visitor: &mut V,
    frontier: &mut F,
    visited: &mut S,
) -> Result<SearchOutcome, V::Error>
where
    G: Graph + ?Sized,
    R: IntoIterator<Item = G::Vertex>,
    V: Visitor<G> + ?Sized,
    F: Frontier<GraphPending<G>> + ?Sized,
    S: SetStorage<VertexKey<G>> + ?Sized,
{
    let mut tally = Tally { discovered: 0 };
    let directed = graph.is_directed();

    if visitor.begin_search(graph)? == SearchControl::Stop {
        return Ok(tally.stopped());
    }

    for root in roots {
        if visited.insert(Keyed::new(root.clone())) {
            frontier.put(Pending {
                vertex: root,
                depth: 0,
                predecessor: None,
            });
        }
    }

    while let Some(Pending {
        vertex,
        depth,
        predecessor,
    }) = frontier.take()
    {
        tally.discovered += 1;
        let visit = Visit {
            vertex: &vertex,
            depth,
            predecessor: predecessor.as_ref(),
            graph,
        };
        if on_stop!(visitor.discover_vertex(&visit)?, tally) {
            continue;
        }

        let mut edges = access.edges(graph, &vertex).peekable();
        if directed {
            let signal = if edges.peek().is_some() {
                visitor.discover_branch(&visit)?
            } else {
                visitor.discover_leaf(&visit)?
            };
            if on_stop!(signal, tally) {
                continue;
            }
        }

        for edge in edges {
            let head = Keyed::new(edge.head.clone());
            let edge_visit = EdgeVisit {
                edge: &edge,
                depth,
                graph,
            };
            if visited.contains(&head) {
                on_stop!(visitor.discover_seen_edge(&edge_visit)?, tally);
            } else if !on_stop!(visitor.discover_new_edge(&edge_visit)?, tally) {
                visited.insert(head);
                frontier.put(Pending {
                    vertex: edge.head.clone(),
                    depth: depth + 1,
                    predecessor: Some(edge),
                });
            }
        }

        if visitor.finish_vertex(&visit)? == SearchControl::Stop {
            return Ok(tally.stopped());
        }
    }

    if visitor.finish_search(graph)? == SearchControl::Stop {
        return Ok(tally.stopped());
    }
    Ok(tally.finished())
}
