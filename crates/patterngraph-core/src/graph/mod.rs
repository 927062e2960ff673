//! In-memory labeled multigraph with pattern-based path search.
//!
//! Vertices carry a caller-supplied identifier and a type label; edges are
//! undirected and indexed from both endpoints, and duplicates between the
//! same pair are allowed. [`search`] matches an ordered label sequence
//! against paths starting at a root vertex.
//!
//! # Example
//!
//! ```rust
//! use patterngraph_core::graph::{search, PatternGraph};
//!
//! let mut graph = PatternGraph::new();
//! let post = graph.add_vertex(10, "Post").unwrap();
//! let author = graph.add_vertex(11, "User").unwrap();
//! let comment = graph.add_vertex(12, "Comment").unwrap();
//! graph.add_edge(post, author).unwrap();
//! graph.add_edge(post, comment).unwrap();
//!
//! let paths = search(&graph, post, &["Post", "Comment"]).unwrap();
//! assert_eq!(paths, vec![vec![post, comment]]);
//! ```

mod pattern;
mod store;
mod traversal;
mod types;

#[cfg(test)]
mod store_tests;

pub use pattern::{search, PatternPath};
pub use store::PatternGraph;
pub use traversal::{bfs_by_label, dfs_by_label};
pub use types::{Edge, EdgeId, Vertex, VertexId};
