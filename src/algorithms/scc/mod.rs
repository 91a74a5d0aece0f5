//! Strongly connected components (iterative Tarjan).
//!
//! The recursion of the textbook algorithm is replaced by an explicit call
//! stack of vertices; each vertex's bookkeeping entry owns the cursor over
//! its out-edges, so resuming a vertex after a child finishes continues
//! exactly where it left off.
//!
//! ## Invariants
//! - Discovery indices are handed out in strictly increasing order.
//! - A low-link only ever decreases, and never drops below the index of the
//!   root of the vertex's component.
//! - A vertex leaves the component stack exactly once, together with the
//!   rest of its component.
//!
//! Components are emitted in reverse topological order of the condensation:
//! a component is emitted only after every component it can reach.

mod sink;


pub use sink::{sink_fn, ComponentLabels, ComponentSink, FnSink};

use std::collections::HashMap;

use crate::error::CapabilityError;
use crate::graph::access::{require_directed, require_vertex_list, AccessEdges, EdgeAccess};
use crate::graph::{Graph, Keyed, VertexKey};
use crate::storage::{DefaultStorage, MapStorage, SequenceStorage, StorageProvider};

const BOOKKEEPING: &str = "every vertex on the call or component stack has an entry";

/// Per-vertex Tarjan bookkeeping.
pub struct TarjanEntry<'g, G: Graph + ?Sized> {
    /// Discovery index.
    pub index: usize,
    /// Smallest index reachable through the vertex's DFS subtree plus one
    /// back edge.
    pub low_link: usize,
    /// Whether the vertex is still on the component stack.
    pub on_stack: bool,
    stack_pos: usize,
    edges: AccessEdges<'g, G>,
}

impl<G: Graph + ?Sized> core::fmt::Debug for TarjanEntry<'_, G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TarjanEntry")
            .field("index", &self.index)
            .field("low_link", &self.low_link)
            .field("on_stack", &self.on_stack)
            .finish_non_exhaustive()
    }
}

struct Tarjan<'g, G: Graph + ?Sized, S, C, M> {
    graph: &'g G,
    access: EdgeAccess,
    next_index: usize,
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    components: usize,
    stack: S,
    calls: C,
    entries: M,
}

impl<'g, G, S, C, M> Tarjan<'g, G, S, C, M>
where
    G: Graph + ?Sized,
    S: SequenceStorage<VertexKey<G>>,
    C: SequenceStorage<VertexKey<G>>,
    M: MapStorage<VertexKey<G>, TarjanEntry<'g, G>>,
{
    fn enter(&mut self, key: VertexKey<G>) {
        let entry = TarjanEntry {
            index: self.next_index,
            low_link: self.next_index,
            on_stack: true,
            stack_pos: self.stack.len(),
            edges: self.access.edges(self.graph, key.vertex()),
        };
        self.next_index += 1;
        self.entries.insert(key.clone(), entry);
        self.stack.push(key.clone());
        self.calls.push(key);
    }

    fn entry_mut(&mut self, key: &VertexKey<G>) -> &mut TarjanEntry<'g, G> {
        self.entries.get_mut(key).expect(BOOKKEEPING)
    }

    fn run<K: ComponentSink<G::Vertex>>(&mut self, sink: &mut K, min_size: usize) {
        let graph = self.graph;
        for root in graph.vertices() {
            let root = Keyed::new(root);
            if self.entries.contains_key(&root) {
                continue;
            }
            self.enter(root);

            while let Some(top) = self.calls.last().cloned() {
                match self.entry_mut(&top).edges.next() {
                    Some(edge) => {
                        let head = Keyed::new(edge.head);
                        match self.entries.get(&head).map(|e| (e.on_stack, e.index)) {
                            None => self.enter(head),
                            Some((true, head_index)) => {
                                let entry = self.entry_mut(&top);
                                entry.low_link = entry.low_link.min(head_index);
                            }
                            Some((false, _)) => {}
                        }
                    }
                    None => {
                        self.calls.pop();
                        let (index, low_link, stack_pos) = {
                            let entry = self.entry_mut(&top);
                            (entry.index, entry.low_link, entry.stack_pos)
                        };
                        if low_link == index {
                            self.pop_component(stack_pos, sink, min_size);
                        }
                        if let Some(parent) = self.calls.last().cloned() {
                            let entry = self.entry_mut(&parent);
                            entry.low_link = entry.low_link.min(low_link);
                        }
                    }
                }
            }
        }
    }

    fn pop_component<K: ComponentSink<G::Vertex>>(&mut self, stack_pos: usize, sink: &mut K, min_size: usize) {
        let size = self.stack.len() - stack_pos;
        let emit = size >= min_size;
        #[cfg(feature = "tracing")]
        tracing::trace!(size, emit, "component closed");

        if emit {
            self.components += 1;
            sink.begin_component();
        }
        for _ in 0..size {
            let member = self.stack.pop().expect(BOOKKEEPING);
            self.entry_mut(&member).on_stack = false;
            if emit {
                sink.add_vertex(member.into_vertex());
            }
        }
        if emit {
            sink.end_component();
        }
    }
}

/// The bookkeeping map used by [`strongly_connected_components`].
pub type DefaultEntries<'g, G> = HashMap<VertexKey<G>, TarjanEntry<'g, G>>;

/// Finds the strongly connected components of `graph` with default storage.
///
/// Components with fewer than `min_size` vertices are not reported; `0` and
/// `1` report every component.
///
/// # Errors
///
/// Fails if `graph` is undirected, cannot list its vertices, or cannot list
/// out-edges.
pub fn strongly_connected_components<G, K>(graph: &G, sink: K, min_size: usize) -> Result<(), CapabilityError>
where
    G: Graph + ?Sized,
    K: ComponentSink<G::Vertex>,
{
    strongly_connected_components_with(
        graph,
        sink,
        min_size,
        DefaultStorage::<Vec<VertexKey<G>>>::new(),
        DefaultStorage::<Vec<VertexKey<G>>>::new(),
        DefaultStorage::<DefaultEntries<'_, G>>::new(),
    )
}

/// Finds the strongly connected components of `graph` with caller-provided
/// storage for the call stack (the vertices being explored, deepest last),
/// the component stack (visited vertices not yet assigned to a component)
/// and the bookkeeping map, in that order.
///
/// # Errors
///
/// See [`strongly_connected_components`].
pub fn strongly_connected_components_with<'g, G, K, C, CP, S, SP, M, MP>(
    graph: &'g G,
    mut sink: K,
    min_size: usize,
    call_stack: CP,
    component_stack: SP,
    entries: MP,
) -> Result<(), CapabilityError>
where
    G: Graph + ?Sized,
    K: ComponentSink<G::Vertex>,
    CP: StorageProvider<C>,
    C: SequenceStorage<VertexKey<G>>,
    SP: StorageProvider<S>,
    S: SequenceStorage<VertexKey<G>>,
    MP: StorageProvider<M>,
    M: MapStorage<VertexKey<G>, TarjanEntry<'g, G>>,
{
    const OPERATION: &str = "strongly_connected_components";
    require_directed(graph, OPERATION)?;
    require_vertex_list(graph, OPERATION)?;
    let access = EdgeAccess::outgoing(graph, OPERATION)?;

    let mut tarjan = Tarjan {
        graph,
        access,
        next_index: 0,
        components: 0,
        stack: component_stack.provide(),
        calls: call_stack.provide(),
        entries: entries.provide(),
    };
    tarjan.run(&mut sink, min_size);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        vertices = tarjan.next_index,
        components = tarjan.components,
        min_size,
        "strongly connected components found"
    );
    Ok(())
}

/// Collects the strongly connected components of `graph` into vectors.
///
/// # Errors
///
/// See [`strongly_connected_components`].
pub fn strongly_connected_components_vec<G>(graph: &G, min_size: usize) -> Result<Vec<Vec<G::Vertex>>, CapabilityError>
where
    G: Graph + ?Sized,
{
    let mut groups = Vec::new();
    strongly_connected_components(graph, &mut groups, min_size)?;
    Ok(groups)
}
