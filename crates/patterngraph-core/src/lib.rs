//! # PatternGraph Core
//!
//! In-memory labeled graph engine with pattern-based path search.
//!
//! A [`PatternGraph`] owns typed vertices and undirected edges. Given a root
//! vertex and an ordered sequence of type labels, [`search`] returns every
//! path whose vertices carry the labels in order: the first label is resolved
//! by a breadth-first scan from the root, then the path frontier is expanded
//! one label at a time through each path's last vertex.
//!
//! ## Quick Start
//!
//! ```rust
//! use patterngraph_core::{search, PatternGraph};
//!
//! fn main() -> patterngraph_core::Result<()> {
//!     let mut graph = PatternGraph::new();
//!     let alice = graph.add_vertex(1, "Person")?;
//!     let acme = graph.add_vertex(2, "Company")?;
//!     graph.add_edge(alice, acme)?;
//!
//!     let paths = search(&graph, alice, &["Person", "Company"])?;
//!     assert_eq!(paths, vec![vec![alice, acme]]);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod graph;


pub use error::{Error, Result};
pub use graph::{
    bfs_by_label, dfs_by_label, search, Edge, EdgeId, PatternGraph, PatternPath, Vertex, VertexId,
};
