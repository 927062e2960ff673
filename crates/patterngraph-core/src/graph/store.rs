//! Arena-backed storage for vertices, edges, and incidence lists.

use smallvec::SmallVec;

use crate::error::{Error, Result};

use super::types::{Edge, EdgeId, Vertex, VertexId};

/// Incident edges per vertex, kept inline for low-degree vertices.
type IncidenceList = SmallVec<[EdgeId; 4]>;

/// An in-memory labeled multigraph.
///
/// Vertices and edges are created once and live for the graph's lifetime;
/// the handles returned at creation are the only way to address them.
/// Duplicate edges between the same pair of vertices are allowed and indexed
/// independently. There is no removal.
///
/// All read accessors take `&self`; traversal state lives with the caller
/// (see [`bfs_by_label`](super::bfs_by_label)), so a shared graph can serve
/// any number of overlapping searches.
#[derive(Debug, Default, Clone)]
pub struct PatternGraph {
    /// Vertex payloads in insertion order; [`VertexId`] indexes this arena.
    vertices: Vec<Vertex>,
    /// Edge payloads in insertion order; [`EdgeId`] indexes this arena.
    edges: Vec<Edge>,
    /// Incident-edge lists, parallel to `vertices`.
    incidence: Vec<IncidenceList>,
}

impl PatternGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(expected_vertices: usize, expected_edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(expected_vertices),
            edges: Vec::with_capacity(expected_edges),
            incidence: Vec::with_capacity(expected_vertices),
        }
    }

    // ── Construction ───────────────────────────────────────────────────

    /// Creates a vertex and registers it with an empty incident-edge list.
    ///
    /// Identifiers are caller-supplied and are not required to be unique:
    /// adding two vertices with the same `(id, label)` yields two distinct
    /// handles addressing two distinct vertices. Retain the returned handle
    /// to reuse a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLabel`] if `label` is empty or
    /// whitespace-only.
    pub fn add_vertex(&mut self, id: u64, label: &str) -> Result<VertexId> {
        let vertex = Vertex::new(id, label)?;
        let handle = VertexId(self.vertices.len());
        self.vertices.push(vertex);
        self.incidence.push(IncidenceList::new());
        Ok(handle)
    }

    /// Creates an edge between two registered vertices.
    ///
    /// The edge id is appended to both endpoints' incident-edge lists, so
    /// traversal discovers it from either side. A self-loop appears twice in
    /// its vertex's list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if either handle is not registered.
    pub fn add_edge(&mut self, first: VertexId, second: VertexId) -> Result<EdgeId> {
        self.check_registered(first)?;
        self.check_registered(second)?;

        let handle = EdgeId(self.edges.len());
        self.edges.push(Edge::new(first, second));
        self.incidence[first.index()].push(handle);
        self.incidence[second.index()].push(handle);
        Ok(handle)
    }

    // ── Lookup ─────────────────────────────────────────────────────────

    /// Gets a vertex payload by handle.
    #[must_use]
    pub fn vertex(&self, handle: VertexId) -> Option<&Vertex> {
        self.vertices.get(handle.index())
    }

    /// Gets an edge payload by handle.
    #[must_use]
    pub fn edge(&self, handle: EdgeId) -> Option<&Edge> {
        self.edges.get(handle.index())
    }

    /// Returns true if `handle` refers to a registered vertex.
    #[must_use]
    pub fn has_vertex(&self, handle: VertexId) -> bool {
        handle.index() < self.vertices.len()
    }

    /// Returns the total number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns all vertex handles in insertion order.
    #[must_use]
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        (0..self.vertices.len()).map(VertexId).collect()
    }

    /// Returns handles of all vertices carrying `label`, in insertion order.
    #[must_use]
    pub fn vertices_with_label(&self, label: &str) -> Vec<VertexId> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, vertex)| vertex.label() == label)
            .map(|(index, _)| VertexId(index))
            .collect()
    }

    /// Returns the incident-edge count of a vertex.
    ///
    /// Duplicate edges count once per addition and a self-loop counts twice.
    #[must_use]
    pub fn degree(&self, handle: VertexId) -> usize {
        self.incidence.get(handle.index()).map_or(0, SmallVec::len)
    }

    /// Returns the incident edges of a vertex, oldest first. Unknown handles
    /// yield an empty slice.
    #[must_use]
    pub fn incident_edges(&self, handle: VertexId) -> &[EdgeId] {
        self.incidence
            .get(handle.index())
            .map_or(&[], |edges| edges.as_slice())
    }

    // ── Neighbor resolution ────────────────────────────────────────────

    /// Returns the `second` endpoint of every edge incident to `vertex`.
    ///
    /// Edges are indexed from both endpoints, so a lookup performed from an
    /// edge's `second` side yields that same vertex back rather than the
    /// opposite endpoint. Pattern expansion ([`search`](super::search))
    /// builds on this resolution; [`bfs_by_label`](super::bfs_by_label)
    /// instead resolves the true opposite endpoint via
    /// [`Edge::adjacent_to`].
    #[must_use]
    pub fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        self.incident_edges(vertex)
            .iter()
            .filter_map(|&edge_id| self.edge(edge_id))
            .map(Edge::second)
            .collect()
    }

    /// [`Self::neighbors`] filtered to vertices carrying `label`.
    #[must_use]
    pub fn neighbors_with_label(&self, vertex: VertexId, label: &str) -> Vec<VertexId> {
        self.incident_edges(vertex)
            .iter()
            .filter_map(|&edge_id| self.edge(edge_id))
            .map(Edge::second)
            .filter(|&neighbor| {
                self.vertex(neighbor)
                    .is_some_and(|vertex| vertex.label() == label)
            })
            .collect()
    }

    // ── Display helpers ────────────────────────────────────────────────

    /// Renders an edge as both endpoints' identifiers joined by a comma.
    #[must_use]
    pub fn format_edge(&self, edge: EdgeId) -> String {
        let Some(edge) = self.edge(edge) else {
            return String::new();
        };
        format!(
            "{},{}",
            self.format_vertex(edge.first()),
            self.format_vertex(edge.second())
        )
    }

    /// Renders a path as its vertices' identifiers joined by commas.
    #[must_use]
    pub fn format_path(&self, path: &[VertexId]) -> String {
        path.iter()
            .map(|&vertex| self.format_vertex(vertex))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn format_vertex(&self, vertex: VertexId) -> String {
        self.vertex(vertex)
            .map_or_else(String::new, ToString::to_string)
    }

    fn check_registered(&self, handle: VertexId) -> Result<()> {
        if self.has_vertex(handle) {
            Ok(())
        } else {
            Err(Error::UnknownVertex(handle))
        }
    }
}
