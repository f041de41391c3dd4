//! Shortest Paths - single-source shortest paths over weighted directed graphs
//!
//! The engine is Dijkstra's algorithm driven by a binary heap with lazy
//! deletion: outdated heap entries are skipped when popped instead of being
//! updated in place.
//!
//! Graphs map an opaque vertex token (`&str`, `String`, `usize`, ...) to an
//! ordered list of `(neighbor, weight)` pairs. Weights must be non-negative.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod report;

pub use algorithm::{
    dijkstra::{Dijkstra, SourcePolicy},
    path::reconstruct_path,
    DistanceTable, PredecessorTable, SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;
pub use report::{PathReport, ShortestPathReport};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("Edge weight on {from} -> {to} is not a number")]
    InvalidWeight { from: String, to: String },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
