use crate::graph::traits::{EdgeWeight, Graph, VertexId};
use std::collections::HashMap;

/// A directed graph stored as a mapping from vertex to its adjacency list
///
/// Parallel edges are kept as separate entries. Weights are stored as given;
/// negative weights are reported by the shortest path engine when it reaches
/// them, not rejected here.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Outgoing edges for each vertex: vertex -> [(target_vertex, weight)]
    outgoing_edges: HashMap<V, Vec<(V, W)>>,
}

impl<V, W> AdjacencyGraph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyGraph {
            outgoing_edges: HashMap::with_capacity(vertices),
        }
    }

    /// Builds a graph from `(vertex, [(neighbor, weight), ...])` entries.
    ///
    /// Neighbors that never appear as a key become vertices without outgoing
    /// edges. A vertex listed twice gets both lists appended in order.
    pub fn from_adjacency<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = (V, E)>,
        E: IntoIterator<Item = (V, W)>,
    {
        let mut graph = AdjacencyGraph::new();
        for (vertex, edges) in entries {
            graph.add_vertex(vertex.clone());
            for (target, weight) in edges {
                graph.add_edge(vertex.clone(), target, weight);
            }
        }
        graph
    }

    /// Adds a vertex without edges. Returns false if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.outgoing_edges.contains_key(&vertex) {
            return false;
        }
        self.outgoing_edges.insert(vertex, Vec::new());
        true
    }

    /// Appends a directed edge, registering both endpoints as vertices
    pub fn add_edge(&mut self, from: V, to: V, weight: W) {
        self.add_vertex(to.clone());
        self.outgoing_edges
            .entry(from)
            .or_insert_with(Vec::new)
            .push((to, weight));
    }

    /// Returns a copy of the graph with every vertex renamed by `f`.
    ///
    /// `f` should be injective; vertices mapped to the same name are merged.
    pub fn map_vertices<U, F>(&self, mut f: F) -> AdjacencyGraph<U, W>
    where
        U: VertexId,
        F: FnMut(&V) -> U,
    {
        let mut mapped = AdjacencyGraph::with_capacity(self.outgoing_edges.len());
        for (vertex, edges) in &self.outgoing_edges {
            let from = f(vertex);
            mapped.add_vertex(from.clone());
            for (target, weight) in edges {
                mapped.add_edge(from.clone(), f(target), *weight);
            }
        }
        mapped
    }
}

impl<V, W> Default for AdjacencyGraph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> From<HashMap<V, Vec<(V, W)>>> for AdjacencyGraph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    fn from(adjacency: HashMap<V, Vec<(V, W)>>) -> Self {
        AdjacencyGraph::from_adjacency(adjacency)
    }
}

impl<V, W> Graph<V, W> for AdjacencyGraph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.outgoing_edges.keys())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.outgoing_edges.contains_key(vertex)
    }
}
