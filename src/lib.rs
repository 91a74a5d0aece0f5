//! # `skein` - Graph Traversal Toolkit
//!
//! Generic breadth-first and depth-first search with fine-grained visitor
//! control, and strongly connected components by an iterative Tarjan
//! algorithm, over any value that implements the [`Graph`] contract.
//!
//! ## Key Features
//!
//! - **Capability-driven graphs**: a graph advertises which of vertex list,
//!   edge list, out-edges and in-edges it supports; algorithms derive what
//!   they need from what is there and reject the rest before doing any work.
//! - **Pluggable storage**: every frontier, visited set, stack and map an
//!   algorithm uses comes from a [`StorageProvider`], so callers pick between
//!   `std` collections, dense integer storage, or their own reused instances.
//! - **Visitor signals**: hooks steer a search with
//!   [`Control::StopTree`] and [`Control::StopSearch`], and may fail with
//!   their own error type.
//! - **No recursion**: both engines keep their state on explicit stacks, so
//!   graph depth is bounded by memory, not by the thread's stack.
//!
//! ## Architecture
//!
//! - [`graph`]: the contract, identity policies, capability resolution,
//!   degree queries, and two small owned graphs.
//! - [`storage`]: storage kinds, `std` and dense implementations, providers.
//! - [`search`]: the visitor interface and the shared traversal engine.
//! - [`algorithms`]: strongly connected components.
//!
//! ## Logging
//!
//! With the default `tracing` feature, engines emit `debug` events when a
//! search starts and ends and when a capability check fails, and `trace`
//! events per component closed.
//!
//! ## Example
//!
//! ```rust
//! use skein::graph::AdjacencyList;
//! use skein::search::{breadth_first_search, visitor_for};
//! use skein::algorithms::strongly_connected_components_vec;
//!
//! let g = AdjacencyList::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);
//!
//! let mut reached = Vec::new();
//! breadth_first_search(&g, [0], visitor_for(&g).on_discover_vertex(|v| reached.push(*v.vertex)))?;
//! assert_eq!(reached, vec![0, 1, 2, 3]);
//!
//! let groups = strongly_connected_components_vec(&g, 2)?;
//! assert_eq!(groups.len(), 1);
//! # Ok::<(), skein::CapabilityError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod search;
pub mod storage;

pub use algorithms::{strongly_connected_components, strongly_connected_components_vec, ComponentSink};
pub use error::{CapabilityError, SearchError};
pub use graph::{ByAddress, ByValue, Capabilities, Edge, Graph};
pub use search::{breadth_first_search, depth_first_search, Control, SearchControl, SearchOutcome, Visitor};
pub use storage::{StorageKind, StorageProvider};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Signals fit in a byte.
    assert!(mem::size_of::<Control>() == 1);
    assert!(mem::size_of::<SearchControl>() == 1);

    // Identity policies are zero-sized, so a keyed vertex is just the vertex.
    assert!(mem::size_of::<graph::Keyed<u32, ByValue>>() == mem::size_of::<u32>());
    assert!(mem::size_of::<graph::Keyed<&u8, ByAddress>>() == mem::size_of::<&u8>());

    // An edge without data is two vertices.
    assert!(mem::size_of::<Edge<u32>>() == 2 * mem::size_of::<u32>());

    // Capability errors stay small enough to return by value.
    assert!(mem::size_of::<CapabilityError>() <= mem::size_of::<usize>() * 4);
};
