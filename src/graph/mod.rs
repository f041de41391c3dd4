pub mod traits;
pub mod adjacency;
pub mod generators;

pub use traits::{EdgeWeight, Graph, VertexId};
pub use adjacency::AdjacencyGraph;
