pub mod traits;
pub mod tables;
pub mod path;
pub mod dijkstra;

pub use tables::{DistanceTable, PredecessorTable, SearchStats};
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
