mod common;

use common::{path_weight, W};
use ordered_float::OrderedFloat;
use shortest_paths::algorithm::ShortestPathAlgorithm;
use shortest_paths::graph::generators::sample_graph;
use shortest_paths::graph::{AdjacencyGraph, Graph};
use shortest_paths::{reconstruct_path, Dijkstra, Error, SourcePolicy};
use std::collections::HashMap;

#[test]
fn test_sample_graph_distances() {
    let graph = sample_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();

    let expected = [("A", 0.0), ("B", 3.0), ("C", 2.0), ("D", 8.0), ("E", 10.0), ("F", 13.0)];
    for (vertex, distance) in expected {
        assert_eq!(
            result.distances.get(&vertex),
            Some(OrderedFloat(distance)),
            "distance to {}",
            vertex
        );
    }
    assert_eq!(result.distances.len(), 6);
}

#[test]
fn test_sample_graph_path_to_f() {
    let graph = sample_graph();
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, &"A").unwrap();

    let path = dijkstra.get_path(&result, &"F");
    assert_eq!(path.first(), Some(&"A"));
    assert_eq!(path.last(), Some(&"F"));
    assert_eq!(path_weight(&graph, &path), 13.0);
    // The only path of length 13
    assert_eq!(path, vec!["A", "C", "B", "D", "E", "F"]);
}

#[test]
fn test_unreachable_vertex_stays_infinite() {
    let mut graph: AdjacencyGraph<&str, W> = AdjacencyGraph::from_adjacency([
        ("A", vec![("B", OrderedFloat(1.0))]),
        ("C", vec![("A", OrderedFloat(1.0))]),
    ]);
    graph.add_vertex("lonely");

    let result = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();

    assert_eq!(result.distances.get(&"C"), Some(OrderedFloat(f64::INFINITY)));
    assert_eq!(result.distances.get(&"lonely"), Some(OrderedFloat(f64::INFINITY)));
    assert!(result.distance_to(&"lonely").is_none());
    assert!(result.path_to(&"C").is_empty());
    assert!(result.path_to(&"lonely").is_empty());
    assert_eq!(result.predecessors.get(&"lonely"), None);
}

#[test]
fn test_source_to_itself() {
    let graph = sample_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, &"D").unwrap();
    assert_eq!(reconstruct_path(&result.predecessors, &"D", &"D"), vec!["D"]);
    assert_eq!(result.distance_to(&"D"), Some(OrderedFloat(0.0)));
}

#[test]
fn test_negative_weight_rejected() {
    let graph: AdjacencyGraph<&str, W> = AdjacencyGraph::from_adjacency([
        ("A", vec![("B", OrderedFloat(1.0))]),
        ("B", vec![("C", OrderedFloat(-2.0))]),
    ]);

    let err = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap_err();
    assert_eq!(
        err,
        Error::NegativeWeight {
            from: "B".to_string(),
            to: "C".to_string(),
            weight: -2.0,
        }
    );
}

#[test]
fn test_negative_weight_detected_during_traversal() {
    // The negative edge is never reached from A, so the run succeeds
    let graph: AdjacencyGraph<&str, W> = AdjacencyGraph::from_adjacency([
        ("A", vec![("B", OrderedFloat(1.0))]),
        ("X", vec![("A", OrderedFloat(-1.0))]),
    ]);

    let result = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();
    assert_eq!(result.distance_to(&"B"), Some(OrderedFloat(1.0)));
    assert!(Dijkstra::new().compute_shortest_paths(&graph, &"X").is_err());
}

#[test]
fn test_unknown_source_policies() {
    let graph = sample_graph();

    let strict = Dijkstra::new().compute_shortest_paths(&graph, &"Z");
    assert!(matches!(strict, Err(Error::UnknownVertex(_))));

    let isolated = Dijkstra::new()
        .with_source_policy(SourcePolicy::Isolated)
        .compute_shortest_paths(&graph, &"Z")
        .unwrap();
    assert_eq!(isolated.distances.reachable().count(), 1);
    assert_eq!(isolated.distances.len(), 7);
    assert!(isolated.path_to(&"A").is_empty());
    assert_eq!(isolated.predecessors.iter().filter(|(_, p)| p.is_some()).count(), 0);
    assert!(!isolated.predecessors.is_empty());
    assert!(!isolated.distances.is_empty());
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let mut graph: AdjacencyGraph<usize, W> = AdjacencyGraph::new();
    graph.add_edge(0, 1, OrderedFloat(9.0));
    graph.add_edge(0, 1, OrderedFloat(4.0));
    graph.add_edge(0, 1, OrderedFloat(6.0));

    let result = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap();
    assert_eq!(result.distance_to(&1), Some(OrderedFloat(4.0)));
    assert_eq!(result.path_to(&1), vec![0, 1]);
}

#[test]
fn test_zero_weight_edges() {
    let graph: AdjacencyGraph<usize, W> = AdjacencyGraph::from_adjacency([
        (0, vec![(1, OrderedFloat(0.0))]),
        (1, vec![(2, OrderedFloat(0.0)), (0, OrderedFloat(0.0))]),
    ]);

    let result = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap();
    assert_eq!(result.distance_to(&2), Some(OrderedFloat(0.0)));
    assert_eq!(result.path_to(&2), vec![0, 1, 2]);
    // The source never gets a predecessor
    assert_eq!(result.predecessors.get(&0), None);
    assert!(result.predecessors.contains(&0));
}

#[test]
fn test_string_vertices_from_hash_map() {
    let mut adjacency = HashMap::new();
    adjacency.insert("home".to_string(), vec![("work".to_string(), OrderedFloat(7.5))]);
    adjacency.insert("work".to_string(), vec![("gym".to_string(), OrderedFloat(1.5))]);
    let graph: AdjacencyGraph<String, W> = adjacency.into();

    assert_eq!(graph.vertex_count(), 3);
    let result = Dijkstra::new()
        .compute_shortest_paths(&graph, &"home".to_string())
        .unwrap();
    assert_eq!(result.distance_to(&"gym".to_string()), Some(OrderedFloat(9.0)));
}

#[test]
fn test_frontier_operations_are_bounded() {
    let graph = sample_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();
    let stats = result.stats;

    assert_eq!(stats.pushes, stats.relaxations + 1);
    assert!(stats.relaxations <= graph.edge_count());
    assert_eq!(stats.pops, stats.pushes);
    assert_eq!(stats.finalized + stats.stale_skipped, stats.pops);
    assert_eq!(stats.finalized, 6);
}

#[test]
fn test_algorithm_name() {
    assert_eq!(Dijkstra::new().name(), "Dijkstra");
}
