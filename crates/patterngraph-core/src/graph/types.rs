//! Vertex and edge types with arena-index handles.
//!
//! Handles compare by arena index, so identity follows creation: two
//! vertices added with identical payloads stay distinct. Payload types hold
//! the data a handle points at and never change after creation.

use std::fmt;

use crate::error::{Error, Result};

/// Opaque handle to a vertex stored in a [`PatternGraph`](super::PatternGraph).
///
/// Equal only when referring to the same stored vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Returns the underlying arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Opaque handle to an edge stored in a [`PatternGraph`](super::PatternGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Returns the underlying arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A typed vertex: a caller-supplied identifier plus the label used for
/// pattern matching.
///
/// Identifiers are opaque to the engine and are not required to be unique;
/// labels are stored trimmed and may repeat across vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: u64,
    label: String,
}

impl Vertex {
    /// Creates a vertex after validating its label.
    pub(crate) fn new(id: u64, label: &str) -> Result<Self> {
        let label = validate_label(label)?;
        Ok(Self {
            id,
            label: label.to_string(),
        })
    }

    /// Returns the caller-supplied identifier.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the type label used for pattern matching.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Vertex {
    /// Renders the identifier only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// An undirected edge, stored as the ordered endpoint pair it was created
/// with. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    first: VertexId,
    second: VertexId,
}

impl Edge {
    pub(crate) fn new(first: VertexId, second: VertexId) -> Self {
        Self { first, second }
    }

    /// Returns the endpoint the edge was created from.
    #[must_use]
    pub fn first(&self) -> VertexId {
        self.first
    }

    /// Returns the endpoint the edge was created towards.
    #[must_use]
    pub fn second(&self) -> VertexId {
        self.second
    }

    /// Returns the endpoint opposite `vertex`, or `None` when `vertex` is
    /// not an endpoint of this edge.
    #[must_use]
    pub fn adjacent_to(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.first {
            Some(self.second)
        } else if vertex == self.second {
            Some(self.first)
        } else {
            None
        }
    }
}

/// Rejects empty or whitespace-only labels; returns the trimmed label.
pub(crate) fn validate_label(label: &str) -> Result<&str> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidLabel(
            "label cannot be empty or whitespace-only".to_string(),
        ));
    }
    Ok(trimmed)
}
