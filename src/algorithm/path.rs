use std::collections::HashSet;

use log::warn;

use crate::algorithm::tables::PredecessorTable;
use crate::graph::VertexId;

/// Rebuilds the path `source -> ... -> target` from a predecessor table.
///
/// Returns `[source]` when `source == target` and an empty vector when the
/// predecessor chain from `target` does not lead back to `source`. A chain
/// that revisits a vertex also yields an empty path.
pub fn reconstruct_path<V>(predecessors: &PredecessorTable<V>, source: &V, target: &V) -> Vec<V>
where
    V: VertexId,
{
    if source == target {
        return vec![source.clone()];
    }

    let mut path = vec![target.clone()];
    let mut visited = HashSet::new();
    visited.insert(target);
    let mut current = target;

    while let Some(pred) = predecessors.get(current) {
        if !visited.insert(pred) {
            warn!("Cycle in predecessor chain at {:?}, no path to {:?}", pred, target);
            return Vec::new();
        }
        path.push(pred.clone());
        if pred == source {
            path.reverse();
            return path;
        }
        current = pred;
    }

    Vec::new()
}
