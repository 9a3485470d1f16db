//! Weighted hotspot ranking

use crate::config::{CentralityParams, HotspotWeights};
use crate::insights::centrality::approximate_centrality;
use crate::insights::degree::DegreeTally;
use crate::models::DependencyGraph;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A node ranked by its importance as a change hotspot.
///
/// One record per entry in the import graph's node list; immutable once
/// produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub id: String,
    pub in_degree: usize,
    pub out_degree: usize,
    pub centrality: f64,
    pub churn: u64,
    pub loc: u64,
    pub score: f64,
}

impl Hotspot {
    /// Combined fan-in and fan-out. Rendered summaries collapse the two
    /// degrees into this single field.
    pub fn total_connections(&self) -> usize {
        self.in_degree + self.out_degree
    }
}

/// Rank every node in the import graph's node list by weighted score.
///
/// Degrees come from both graphs' edges, centrality from the import graph
/// only. Nodes with no edges still appear, with centrality 0. The result is
/// sorted by score descending; ties keep node-list order.
pub(crate) fn rank(
    import_graph: &DependencyGraph,
    call_graph: Option<&DependencyGraph>,
    weights: &HotspotWeights,
    centrality_params: &CentralityParams,
) -> Vec<Hotspot> {
    let degrees = DegreeTally::tally(import_graph, call_graph);
    let centrality = approximate_centrality(import_graph, centrality_params);

    let mut hotspots: Vec<Hotspot> = import_graph
        .nodes
        .iter()
        .map(|node| {
            let in_degree = degrees.in_degree(&node.id);
            let out_degree = degrees.out_degree(&node.id);
            let cent = centrality.get(node.id.as_str()).copied().unwrap_or(0.0);

            // Churn and loc are normalized so typical magnitudes land in
            // the same range as degrees.
            let score = weights.in_degree * in_degree as f64
                + weights.out_degree * out_degree as f64
                + weights.centrality * cent
                + weights.churn * (node.churn as f64 / 100.0)
                + weights.loc * (node.loc as f64 / 1000.0);

            Hotspot {
                id: node.id.clone(),
                in_degree,
                out_degree,
                centrality: cent,
                churn: node.churn,
                loc: node.loc,
                score,
            }
        })
        .collect();

    hotspots.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!("Ranked {} hotspots", hotspots.len());
    hotspots
}
