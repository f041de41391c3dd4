use crate::graph::AdjacencyGraph;
use ordered_float::OrderedFloat;
use rand::Rng;

/// The six-vertex road map used by the demo binary and the tests.
///
/// Shortest distances from `A` are A:0, B:3, C:2, D:8, E:10, F:13.
pub fn sample_graph() -> AdjacencyGraph<&'static str, OrderedFloat<f64>> {
    let w = OrderedFloat;
    AdjacencyGraph::from_adjacency([
        ("A", vec![("B", w(4.0)), ("C", w(2.0))]),
        ("B", vec![("A", w(4.0)), ("C", w(1.0)), ("D", w(5.0))]),
        ("C", vec![("A", w(2.0)), ("B", w(1.0)), ("D", w(8.0)), ("E", w(10.0))]),
        ("D", vec![("B", w(5.0)), ("C", w(8.0)), ("E", w(2.0)), ("F", w(6.0))]),
        ("E", vec![("C", w(10.0)), ("D", w(2.0)), ("F", w(3.0))]),
        ("F", vec![("D", w(6.0)), ("E", w(3.0))]),
    ])
}

/// Generates a random directed graph with vertices `0..num_vertices` and
/// about `edge_factor * num_vertices` edges weighted in `[1, 100)`.
///
/// Self-loops are skipped; parallel edges may appear.
pub fn random_graph<R: Rng + ?Sized>(
    num_vertices: usize,
    edge_factor: f64,
    rng: &mut R,
) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_capacity(num_vertices);
    for v in 0..num_vertices {
        graph.add_vertex(v);
    }
    if num_vertices < 2 {
        return graph;
    }

    let num_edges = (edge_factor * num_vertices as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..num_vertices);
        let v = rng.gen_range(0..num_vertices);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width * height` grid where vertex `y * width + x` connects to
/// its 8 neighbours: cardinal moves cost 1.0, diagonal moves 1.4.
pub fn grid_graph(width: usize, height: usize) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_capacity(width * height);

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            graph.add_vertex(vertex);

            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_graph_shape() {
        let graph = sample_graph();
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 18);
        assert_eq!(graph.get_edge_weight(&"C", &"B"), Some(OrderedFloat(1.0)));
    }

    #[test]
    fn test_random_graph_has_no_self_loops() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = random_graph(50, 3.0, &mut rng);
        assert_eq!(graph.vertex_count(), 50);
        for v in 0..50 {
            assert!(!graph.has_edge(&v, &v));
            for (_, weight) in graph.outgoing_edges(&v) {
                assert!(weight >= OrderedFloat(1.0) && weight < OrderedFloat(100.0));
            }
        }
    }

    #[test]
    fn test_grid_graph_degrees() {
        let graph = grid_graph(3, 3);
        assert_eq!(graph.vertex_count(), 9);
        // corner, edge and centre cells
        assert_eq!(graph.outgoing_edges(&0).count(), 3);
        assert_eq!(graph.outgoing_edges(&1).count(), 5);
        assert_eq!(graph.outgoing_edges(&4).count(), 8);
        assert_eq!(graph.get_edge_weight(&0, &4), Some(OrderedFloat(1.4)));
    }
}
