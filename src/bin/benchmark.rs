use std::env;
use std::time::{Duration, Instant};

use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use shortest_paths::algorithm::ShortestPathAlgorithm;
use shortest_paths::graph::generators::random_graph;
use shortest_paths::graph::Graph;
use shortest_paths::{AdjacencyGraph, Dijkstra};

type BenchGraph = AdjacencyGraph<usize, OrderedFloat<f64>>;

// Number of independent sources queried per graph
const QUERIES_PER_GRAPH: usize = 8;

// Runs one query and reports (elapsed, reachable vertices)
fn run_query(dijkstra: &Dijkstra, graph: &BenchGraph, source: usize) -> (Duration, usize) {
    let start = Instant::now();
    let result = match dijkstra.compute_shortest_paths(graph, &source) {
        Ok(result) => result,
        Err(e) => {
            log::error!("query from {} failed: {}", source, e);
            return (start.elapsed(), 0);
        }
    };
    let duration = start.elapsed();
    (duration, result.distances.reachable().count())
}

fn main() {
    env_logger::init();

    // Graph sizes may be given on the command line
    let mut graph_sizes: Vec<usize> = env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();
    if graph_sizes.is_empty() {
        graph_sizes = vec![1_000, 10_000, 50_000, 100_000];
    }

    // Edge factor: average number of edges per vertex
    let edge_factor = 2.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra on random graphs");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = random_graph(size, edge_factor, &mut rng);
        println!(
            "Graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        // Single query for the sequential baseline
        let (sequential, reachable) = run_query(&dijkstra, &graph, 0);
        println!("  - Source 0: {} reachable vertices in {:?}", reachable, sequential);

        // Every query owns its tables, so they fan out without sharing state
        let sources: Vec<usize> = (0..QUERIES_PER_GRAPH)
            .map(|i| i * size / QUERIES_PER_GRAPH)
            .collect();
        let start = Instant::now();
        let parallel: Vec<(Duration, usize)> = sources
            .par_iter()
            .map(|&source| run_query(&dijkstra, &graph, source))
            .collect();
        let wall = start.elapsed();
        let avg_reachable =
            parallel.iter().map(|(_, r)| r).sum::<usize>() / parallel.len().max(1);
        println!(
            "  - {} parallel queries in {:?} (avg {} reachable)",
            parallel.len(),
            wall,
            avg_reachable
        );

        results.push((size, sequential, wall));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<20}", "Vertices", "Single (ms)", "Parallel batch (ms)");
    println!("-----------------------------------------------------");

    for (size, sequential, wall) in &results {
        println!(
            "{:<10} | {:<15.2} | {:<20.2}",
            size,
            sequential.as_secs_f64() * 1000.0,
            wall.as_secs_f64() * 1000.0
        );
    }
}
