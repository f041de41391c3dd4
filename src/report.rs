//! Human and JSON presentation of shortest path results.

use std::fmt;

use serde::Serialize;

use crate::algorithm::ShortestPathResult;
use crate::graph::{EdgeWeight, VertexId};

/// One line of the distance listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceRow {
    pub vertex: String,
    /// `None` when the vertex is unreachable
    pub distance: Option<f64>,
}

/// Distances from one source to every vertex, sorted by vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathReport {
    pub source: String,
    pub rows: Vec<DistanceRow>,
}

impl ShortestPathReport {
    pub fn from_result<V, W>(result: &ShortestPathResult<V, W>) -> Self
    where
        V: VertexId + fmt::Display,
        W: EdgeWeight,
    {
        let mut entries: Vec<(&V, W)> = result.distances.iter().map(|(v, d)| (v, *d)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let rows = entries
            .into_iter()
            .map(|(vertex, distance)| DistanceRow {
                vertex: vertex.to_string(),
                distance: finite(distance),
            })
            .collect();

        ShortestPathReport {
            source: result.source.to_string(),
            rows,
        }
    }
}

impl fmt::Display for ShortestPathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shortest distances from {}:", self.source)?;
        for row in &self.rows {
            match row.distance {
                Some(d) => writeln!(f, "  {} -> {}: {}", self.source, row.vertex, d)?,
                None => writeln!(f, "  {} -> {}: unreachable", self.source, row.vertex)?,
            }
        }
        Ok(())
    }
}

/// A single reconstructed route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub source: String,
    pub target: String,
    /// Empty when the target is unreachable
    pub path: Vec<String>,
    pub length: Option<f64>,
}

impl PathReport {
    pub fn new<V, W>(result: &ShortestPathResult<V, W>, target: &V) -> Self
    where
        V: VertexId + fmt::Display,
        W: EdgeWeight,
    {
        let path = result.path_to(target);
        let length = if path.is_empty() {
            None
        } else {
            result.distance_to(target).and_then(finite)
        };

        PathReport {
            source: result.source.to_string(),
            target: target.to_string(),
            path: path.iter().map(|v| v.to_string()).collect(),
            length,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path {} -> {}: ", self.source, self.target)?;
        match self.length {
            Some(length) if self.is_reachable() => {
                write!(f, "{} (length = {})", self.path.join(" -> "), length)
            }
            _ => write!(f, "unreachable"),
        }
    }
}

fn finite<W: EdgeWeight>(distance: W) -> Option<f64> {
    if distance.is_finite() {
        distance.to_f64()
    } else {
        None
    }
}
