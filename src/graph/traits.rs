use num_traits::Float;
use std::fmt::Debug;
use std::hash::Hash;

/// Opaque vertex token: anything comparable, hashable and cheap enough to clone
pub trait VertexId: Clone + Eq + Hash + Ord + Debug {}

impl<T> VertexId for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Edge weight usable as a heap priority (e.g. `OrderedFloat<f64>`)
pub trait EdgeWeight: Float + Debug + Copy + Ord {}

impl<T> EdgeWeight for T where T: Float + Debug + Copy + Ord {}

/// Trait representing a weighted directed graph
pub trait Graph<V, W>: Debug
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges counted separately
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every vertex of the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns the outgoing edges of a vertex in insertion order
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the smallest weight among the edges `from -> to`, if any exist
    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}
