use std::collections::hash_map;
use std::collections::HashMap;

use serde::Serialize;

use crate::graph::{EdgeWeight, VertexId};

/// Shortest known distance from the source to each vertex.
///
/// Unreachable vertices hold `W::infinity()`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    distances: HashMap<V, W>,
}

impl<V, W> DistanceTable<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Every vertex starts at infinity
    pub(crate) fn unreached<'a, I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let distances = vertices
            .into_iter()
            .map(|v| (v.clone(), W::infinity()))
            .collect();
        DistanceTable { distances }
    }

    pub(crate) fn set(&mut self, vertex: V, distance: W) {
        self.distances.insert(vertex, distance);
    }

    /// Distance of `vertex`, or `None` if the vertex is not part of the table
    pub fn get(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Distance of `vertex`, treating vertices outside the table as unreachable
    pub fn get_or_infinity(&self, vertex: &V) -> W {
        self.get(vertex).unwrap_or_else(W::infinity)
    }

    /// True if the vertex has a finite distance
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.get(vertex).map_or(false, |d| d.is_finite())
    }

    /// Number of vertices in the table
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Iterates over `(vertex, distance)` in arbitrary order
    pub fn iter(&self) -> hash_map::Iter<'_, V, W> {
        self.distances.iter()
    }

    /// Iterates over the vertices with a finite distance
    pub fn reachable(&self) -> impl Iterator<Item = (&V, W)> + '_ {
        self.distances
            .iter()
            .filter(|(_, d)| d.is_finite())
            .map(|(v, d)| (v, *d))
    }
}

/// The vertex preceding each vertex on its recorded shortest path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorTable<V>
where
    V: VertexId,
{
    predecessors: HashMap<V, Option<V>>,
}

impl<V> PredecessorTable<V>
where
    V: VertexId,
{
    /// Every vertex starts without a predecessor
    pub(crate) fn unset<'a, I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let predecessors = vertices.into_iter().map(|v| (v.clone(), None)).collect();
        PredecessorTable { predecessors }
    }

    pub(crate) fn set(&mut self, vertex: V, predecessor: V) {
        self.predecessors.insert(vertex, Some(predecessor));
    }

    /// Predecessor of `vertex`, `None` if unset or unknown
    pub fn get(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex).and_then(|p| p.as_ref())
    }

    /// True if the vertex is part of the table, with or without a predecessor
    pub fn contains(&self, vertex: &V) -> bool {
        self.predecessors.contains_key(vertex)
    }

    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, V, Option<V>> {
        self.predecessors.iter()
    }
}

impl<V> FromIterator<(V, Option<V>)> for PredecessorTable<V>
where
    V: VertexId,
{
    fn from_iter<I: IntoIterator<Item = (V, Option<V>)>>(iter: I) -> Self {
        PredecessorTable {
            predecessors: iter.into_iter().collect(),
        }
    }
}

/// Counters collected during one shortest path computation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Entries pushed onto the frontier, the source included
    pub pushes: usize,
    /// Entries popped from the frontier
    pub pops: usize,
    /// Popped entries discarded as stale
    pub stale_skipped: usize,
    /// Vertices whose distance became final
    pub finalized: usize,
    /// Edges that improved a distance
    pub relaxations: usize,
    /// Largest frontier size, stale entries included
    pub peak_frontier: usize,
}
