//! Breadth- and depth-first label resolution over a pattern graph.
//!
//! Both resolvers collect every vertex reachable from a root (inclusive)
//! whose label equals a target, visiting each vertex at most once. Visited
//! marks are a per-call boolean array keyed by arena index; nothing is
//! stored on the vertices, so repeated or interleaved calls cannot observe
//! each other's state.

use std::collections::VecDeque;

use crate::error::{Error, Result};

use super::store::PatternGraph;
use super::types::{validate_label, VertexId};

/// Finds every vertex reachable from `root` (inclusive) whose label equals
/// `label`, in breadth-first discovery order.
///
/// Traversal moves across each incident edge to its true opposite endpoint
/// ([`Edge::adjacent_to`](super::Edge::adjacent_to)), so edges are walked
/// correctly from either side. Each vertex is enqueued at most once, which
/// guarantees termination on cyclic graphs.
///
/// # Errors
///
/// Returns [`Error::InvalidLabel`] if `label` is empty or whitespace-only,
/// and [`Error::UnknownVertex`] if `root` is not registered in `graph`.
pub fn bfs_by_label(graph: &PatternGraph, root: VertexId, label: &str) -> Result<Vec<VertexId>> {
    let label = validate_label(label)?;
    if !graph.has_vertex(root) {
        return Err(Error::UnknownVertex(root));
    }

    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();
    let mut matches = Vec::new();

    visited[root.index()] = true;
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        if graph
            .vertex(current)
            .is_some_and(|vertex| vertex.label() == label)
        {
            matches.push(current);
        }
        for &edge_id in graph.incident_edges(current) {
            let Some(next) = graph
                .edge(edge_id)
                .and_then(|edge| edge.adjacent_to(current))
            else {
                continue;
            };
            if !visited[next.index()] {
                visited[next.index()] = true;
                queue.push_back(next);
            }
        }
    }

    Ok(matches)
}

/// Depth-first variant of [`bfs_by_label`]: same contract and result
/// membership, in depth-first discovery order.
///
/// # Errors
///
/// Returns [`Error::InvalidLabel`] if `label` is empty or whitespace-only,
/// and [`Error::UnknownVertex`] if `root` is not registered in `graph`.
pub fn dfs_by_label(graph: &PatternGraph, root: VertexId, label: &str) -> Result<Vec<VertexId>> {
    let label = validate_label(label)?;
    if !graph.has_vertex(root) {
        return Err(Error::UnknownVertex(root));
    }

    let mut visited = vec![false; graph.vertex_count()];
    let mut stack = vec![root];
    let mut matches = Vec::new();

    visited[root.index()] = true;

    while let Some(current) = stack.pop() {
        if graph
            .vertex(current)
            .is_some_and(|vertex| vertex.label() == label)
        {
            matches.push(current);
        }
        for &edge_id in graph.incident_edges(current) {
            let Some(next) = graph
                .edge(edge_id)
                .and_then(|edge| edge.adjacent_to(current))
            else {
                continue;
            };
            if !visited[next.index()] {
                visited[next.index()] = true;
                stack.push(next);
            }
        }
    }

    Ok(matches)
}
