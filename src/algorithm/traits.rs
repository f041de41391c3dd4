use crate::algorithm::path::reconstruct_path;
use crate::algorithm::tables::{DistanceTable, PredecessorTable, SearchStats};
use crate::graph::{EdgeWeight, Graph, VertexId};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Distances from source to each vertex
    pub distances: DistanceTable<V, W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: PredecessorTable<V>,

    /// Source vertex
    pub source: V,

    /// Frontier and relaxation counters of the run
    pub stats: SearchStats,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Distance from the source to `target`, `None` if unreachable or unknown
    pub fn distance_to(&self, target: &V) -> Option<W> {
        self.distances.get(target).filter(|d| d.is_finite())
    }

    /// Path from the source to `target`; empty when no path exists
    pub fn path_to(&self, target: &V) -> Vec<V> {
        reconstruct_path(&self.predecessors, &self.source, target)
    }
}

/// Trait for shortest path algorithms
///
/// Type parameters live on the methods so `name` and `get_path` resolve
/// without naming the graph type.
pub trait ShortestPathAlgorithm {
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths<V, W, G>(
        &self,
        graph: &G,
        source: &V,
    ) -> Result<ShortestPathResult<V, W>>
    where
        V: VertexId,
        W: EdgeWeight,
        G: Graph<V, W>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path<V, W>(&self, result: &ShortestPathResult<V, W>, target: &V) -> Vec<V>
    where
        V: VertexId,
        W: EdgeWeight,
    {
        result.path_to(target)
    }
}
