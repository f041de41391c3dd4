use log::{debug, trace};

use crate::algorithm::tables::{DistanceTable, PredecessorTable, SearchStats};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{EdgeWeight, Graph, VertexId};
use crate::{Error, Result};

/// What to do when the source vertex is not part of the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourcePolicy {
    /// Fail with [`Error::UnknownVertex`]
    #[default]
    Strict,
    /// Treat the source as an isolated vertex with no outgoing edges
    Isolated,
}

/// Classic Dijkstra's algorithm with lazy deletion from the frontier
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    source_policy: SourcePolicy,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            source_policy: SourcePolicy::Strict,
        }
    }

    /// Set how an unknown source vertex is handled
    pub fn with_source_policy(mut self, policy: SourcePolicy) -> Self {
        self.source_policy = policy;
        self
    }

    pub fn source_policy(&self) -> SourcePolicy {
        self.source_policy
    }
}

/// Renders a vertex for error messages; string tokens lose their `Debug` quotes
pub(crate) fn vertex_name<V: VertexId>(vertex: &V) -> String {
    let rendered = format!("{:?}", vertex);
    match rendered.strip_prefix('"').and_then(|r| r.strip_suffix('"')) {
        Some(inner) => inner.to_string(),
        _ => rendered,
    }
}

fn check_weight<V, W>(from: &V, to: &V, weight: W) -> Result<()>
where
    V: VertexId,
    W: EdgeWeight,
{
    if weight.is_nan() {
        return Err(Error::InvalidWeight {
            from: vertex_name(from),
            to: vertex_name(to),
        });
    }
    if weight < W::zero() {
        return Err(Error::NegativeWeight {
            from: vertex_name(from),
            to: vertex_name(to),
            weight: weight.to_f64().unwrap_or(f64::NEG_INFINITY),
        });
    }
    Ok(())
}

impl ShortestPathAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths<V, W, G>(
        &self,
        graph: &G,
        source: &V,
    ) -> Result<ShortestPathResult<V, W>>
    where
        V: VertexId,
        W: EdgeWeight,
        G: Graph<V, W>,
    {
        if !graph.has_vertex(source) && self.source_policy == SourcePolicy::Strict {
            return Err(Error::UnknownVertex(vertex_name(source)));
        }

        debug!(
            "Dijkstra from {:?} over {} vertices, {} edges",
            source,
            graph.vertex_count(),
            graph.edge_count()
        );

        // Initialize distances and predecessors; an isolated source joins the tables here
        let mut distances = DistanceTable::unreached(graph.vertices());
        let mut predecessors = PredecessorTable::unset(graph.vertices().chain(Some(source)));
        distances.set(source.clone(), W::zero());

        let mut stats = SearchStats::default();
        let mut queue = Frontier::new();
        queue.push(source.clone(), W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            stats.pops += 1;

            // Entry left behind by a later improvement
            if distances.get_or_infinity(&u) != dist_u {
                stats.stale_skipped += 1;
                continue;
            }
            stats.finalized += 1;

            for (v, weight) in graph.outgoing_edges(&u) {
                check_weight(&u, v, weight)?;

                let new_dist = dist_u + weight;
                if new_dist < distances.get_or_infinity(v) {
                    trace!("relax {:?} -> {:?}: {:?}", u, v, new_dist);
                    distances.set(v.clone(), new_dist);
                    predecessors.set(v.clone(), u.clone());
                    queue.push(v.clone(), new_dist);
                    stats.relaxations += 1;
                }
            }
        }

        stats.pushes = queue.pushes();
        stats.peak_frontier = queue.peak_len();
        debug!("Dijkstra from {:?} done: {:?}", source, stats);

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
            stats,
        })
    }
}
