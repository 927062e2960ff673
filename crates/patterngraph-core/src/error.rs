//! Error types for graph construction and pattern search.

use thiserror::Error;

use crate::graph::VertexId;

/// Errors returned by `patterngraph-core` operations.
///
/// Invalid-argument conditions (`InvalidLabel`, `UnknownVertex`,
/// `EmptyPattern`) are raised synchronously at the violating call.
/// `StartNotFound` is the one not-found condition: the first pattern label
/// matched no vertex reachable from the search root.
#[derive(Debug, Error)]
pub enum Error {
    /// A vertex or pattern label was empty or whitespace-only.
    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    /// An operation referenced a vertex handle that is not registered.
    #[error("Unknown vertex handle: {0:?}")]
    UnknownVertex(VertexId),

    /// A pattern search was invoked with an empty label sequence.
    #[error("Pattern must contain at least one label")]
    EmptyPattern,

    /// The first pattern label matched no vertex reachable from the root.
    #[error("No reachable vertex matches start label '{0}'")]
    StartNotFound(String),
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
