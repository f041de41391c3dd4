#![allow(dead_code)]

use ordered_float::OrderedFloat;
use shortest_paths::graph::{Graph, VertexId};
use std::collections::HashSet;

pub type W = OrderedFloat<f64>;

/// Minimum weight over every simple path from `source` to `target`, by exhaustive search.
pub fn brute_force_distance<V, G>(graph: &G, source: &V, target: &V) -> Option<f64>
where
    V: VertexId,
    G: Graph<V, W>,
{
    fn walk<V, G>(
        graph: &G,
        current: &V,
        target: &V,
        cost: f64,
        visited: &mut HashSet<V>,
        best: &mut Option<f64>,
    ) where
        V: VertexId,
        G: Graph<V, W>,
    {
        if current == target {
            if best.map_or(true, |b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for (next, weight) in graph.outgoing_edges(current) {
            if visited.insert(next.clone()) {
                walk(graph, next, target, cost + weight.into_inner(), visited, best);
                visited.remove(next);
            }
        }
    }

    let mut visited = HashSet::new();
    visited.insert(source.clone());
    let mut best = None;
    walk(graph, source, target, 0.0, &mut visited, &mut best);
    best
}

/// Sum of the cheapest edge between consecutive vertices of `path`.
pub fn path_weight<V, G>(graph: &G, path: &[V]) -> f64
where
    V: VertexId,
    G: Graph<V, W>,
{
    path.windows(2)
        .map(|pair| {
            graph
                .get_edge_weight(&pair[0], &pair[1])
                .expect("path uses a missing edge")
                .into_inner()
        })
        .sum()
}
