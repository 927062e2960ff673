//! Pattern-based path search: BFS-seeded, expanded one label at a time.

use indexmap::IndexSet;

use crate::error::{Error, Result};

use super::store::PatternGraph;
use super::traversal::bfs_by_label;
use super::types::{validate_label, VertexId};

/// A complete match: one vertex per pattern label, in pattern order.
pub type PatternPath = Vec<VertexId>;

/// Finds every path starting at a vertex reachable from `root` whose i-th
/// vertex carries the i-th label of `pattern`.
///
/// The first label is resolved by [`bfs_by_label`]; every match seeds a
/// singleton path. Each remaining label then extends every path through its
/// last vertex's label-matching neighbors
/// ([`PatternGraph::neighbors_with_label`]); paths with no matching neighbor
/// are dropped, and extended paths accumulate into an insertion-ordered set,
/// so duplicate full paths collapse and the result order is deterministic.
/// Pattern length bounds the number of expansion rounds, so the search
/// terminates on cyclic graphs; vertices may repeat within a path.
///
/// Seeds that exist but produce no complete match yield an empty result,
/// not an error.
///
/// # Errors
///
/// - [`Error::EmptyPattern`] if `pattern` has no labels.
/// - [`Error::InvalidLabel`] if any label is empty or whitespace-only.
/// - [`Error::UnknownVertex`] if `root` is not registered in `graph`.
/// - [`Error::StartNotFound`] if no reachable vertex carries `pattern[0]`.
pub fn search(
    graph: &PatternGraph,
    root: VertexId,
    pattern: &[&str],
) -> Result<Vec<PatternPath>> {
    let mut labels = Vec::with_capacity(pattern.len());
    for label in pattern {
        labels.push(validate_label(label)?);
    }
    let Some((&start_label, rest)) = labels.split_first() else {
        return Err(Error::EmptyPattern);
    };

    let seeds = bfs_by_label(graph, root, start_label)?;
    if seeds.is_empty() {
        return Err(Error::StartNotFound(start_label.to_string()));
    }
    tracing::debug!(
        label = start_label,
        seeds = seeds.len(),
        "resolved pattern start label"
    );

    let mut paths: IndexSet<PatternPath> = seeds.into_iter().map(|seed| vec![seed]).collect();

    for &label in rest {
        paths = expand(graph, &paths, label);
        tracing::trace!(label, paths = paths.len(), "expanded pattern frontier");
    }

    Ok(paths.into_iter().collect())
}

/// Extends every path by one vertex carrying `label`; paths whose last
/// vertex has no such neighbor do not survive.
fn expand(
    graph: &PatternGraph,
    paths: &IndexSet<PatternPath>,
    label: &str,
) -> IndexSet<PatternPath> {
    let mut next = IndexSet::new();
    for path in paths {
        let Some(&last) = path.last() else {
            continue;
        };
        for neighbor in graph.neighbors_with_label(last, label) {
            let mut extended = path.clone();
            extended.push(neighbor);
            next.insert(extended);
        }
    }
    next
}
