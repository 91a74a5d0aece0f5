//! Error types.

use core::convert::Infallible;

use thiserror::Error;

use crate::graph::Requirement;

/// The graph handed to an algorithm cannot support it.
///
/// Always reported at call entry, before any storage is requested or any
/// visitor hook runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// No advertised operation provides the required access.
    #[error("`{operation}` needs {requirement} access, which the graph does not provide")]
    Missing {
        /// The algorithm or utility that was called.
        operation: &'static str,
        /// The access it could not obtain.
        requirement: Requirement,
    },
    /// The algorithm is only defined for directed graphs.
    #[error("`{operation}` is only defined for directed graphs")]
    Undirected {
        /// The algorithm or utility that was called.
        operation: &'static str,
    },
}

/// Failure of a search.
#[derive(Debug, Error)]
pub enum SearchError<E> {
    /// The graph was rejected before the search started.
    #[error(transparent)]
    Capability(#[from] CapabilityError),
    /// A visitor hook failed; the search state was abandoned.
    #[error("visitor failed: {0}")]
    Visitor(E),
}

impl<E> SearchError<E> {
    /// Returns the visitor's error, if that is what stopped the search.
    pub fn into_visitor_error(self) -> Option<E> {
        match self {
            Self::Visitor(e) => Some(e),
            Self::Capability(_) => None,
        }
    }
}

impl SearchError<Infallible> {
    /// Narrows the error of an infallible visitor to the only case left.
    pub fn into_capability(self) -> CapabilityError {
        match self {
            Self::Capability(e) => e,
            Self::Visitor(never) => match never {},
        }
    }
}

impl From<SearchError<Infallible>> for CapabilityError {
    fn from(err: SearchError<Infallible>) -> Self {
        err.into_capability()
    }
}
