//! Whole-graph algorithms.

pub mod scc;

pub use scc::{
    sink_fn, strongly_connected_components, strongly_connected_components_vec,
    strongly_connected_components_with, ComponentLabels, ComponentSink, DefaultEntries, FnSink,
    TarjanEntry,
};
