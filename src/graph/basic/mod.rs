//! Basic graph implementations.
//!
//! Small owned representations that implement [`Graph`](crate::graph::Graph)
//! directly. They cover the two ends of the capability range: an
//! adjacency list with per-vertex access, and a bare edge list that only
//! enumerates.

pub mod adjacency_list;
pub mod edge_list;

pub use adjacency_list::AdjacencyList;
pub use edge_list::EdgeListGraph;
