use shortest_paths::algorithm::ShortestPathAlgorithm;
use shortest_paths::graph::generators::sample_graph;
use shortest_paths::graph::Graph;
use shortest_paths::{Dijkstra, PathReport, ShortestPathReport};
use std::env;

/// Command line options: `shortest_paths [SOURCE] [TARGET] [--json]`
#[derive(Debug)]
struct DemoConfig {
    source: String,
    target: String,
    json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            source: "A".to_string(),
            target: "F".to_string(),
            json: false,
        }
    }
}

impl DemoConfig {
    fn from_args(args: impl Iterator<Item = String>) -> Self {
        let mut config = DemoConfig::default();
        let mut positional = Vec::new();
        for arg in args {
            if arg == "--json" {
                config.json = true;
            } else {
                positional.push(arg);
            }
        }
        let mut positional = positional.into_iter();
        if let Some(source) = positional.next() {
            config.source = source;
        }
        if let Some(target) = positional.next() {
            config.target = target;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = DemoConfig::from_args(env::args().skip(1));
    log::debug!("{:?}", config);

    let graph = sample_graph().map_vertices(|v| v.to_string());
    log::info!(
        "Sample graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let dijkstra = Dijkstra::new();
    let result = match dijkstra.compute_shortest_paths(&graph, &config.source) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let distances = ShortestPathReport::from_result(&result);
    let path = PathReport::new(&result, &config.target);

    if config.json {
        let output = serde_json::json!({
            "distances": distances,
            "path": path,
            "stats": result.stats,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", distances);
        println!();
        println!("{}", path);
    }

    Ok(())
}
