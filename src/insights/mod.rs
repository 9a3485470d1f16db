//! Interpretive graph scoring engine
//!
//! Everything in this module is interpretation, not extraction: weighted
//! hotspot ranking, approximate centrality, opinionated health grading,
//! and actionable recommendations over a graph someone else has already
//! built. All operations are pure over in-memory structures and recompute
//! from scratch on every call.
//!
//! # Hotspot Scoring Formula
//!
//! ```text
//! score = w_in·in_degree + w_out·out_degree + w_cent·centrality
//!       + w_churn·(churn / 100) + w_loc·(loc / 1000)
//! ```
//!
//! Weights come from [`InsightsConfig`] and default to
//! `0.3 / 0.2 / 0.3 / 0.1 / 0.1`.

pub mod centrality;
pub mod degree;
mod health;
mod hotspots;
mod impact;
mod recommend;
mod summary;

pub use health::{HealthGrade, HealthMetrics};
pub use hotspots::Hotspot;
pub use impact::impact_ratio;
pub use summary::{
    interpret_graph_summary, ArchitecturalInsights, CallGraphStats, CouplingLevel, CycleStats,
    GraphStats, GraphSummary, HotspotStats, InterpretedSummary, LayerStats, RenderedHotspot,
    RenderedStatistics, RenderedSummary,
};

use crate::analyzer::GraphAnalyzer;
use crate::config::InsightsConfig;
use crate::models::{Cycle, DependencyGraph, LayerMap};
use anyhow::Result;
use tracing::info;

/// The insights engine.
///
/// Holds the scoring configuration (read-only after construction) and a
/// reference to the external graph analyzer that supplies cycle and layer
/// data when the caller has not precomputed them.
pub struct GraphInsights<'a> {
    config: InsightsConfig,
    analyzer: &'a dyn GraphAnalyzer,
}

impl<'a> GraphInsights<'a> {
    pub fn new(config: InsightsConfig, analyzer: &'a dyn GraphAnalyzer) -> Self {
        Self { config, analyzer }
    }

    /// Rank every node in the import graph's node list as a hotspot.
    ///
    /// Degrees are tallied over both graphs' edges; centrality is computed
    /// over the import graph only. The result is sorted by score
    /// descending, ties keeping node-list order.
    pub fn rank_hotspots(
        &self,
        import_graph: &DependencyGraph,
        call_graph: Option<&DependencyGraph>,
    ) -> Vec<Hotspot> {
        hotspots::rank(
            import_graph,
            call_graph,
            &self.config.weights,
            &self.config.centrality,
        )
    }

    /// Compute the 0-100 health score, letter grade, fragility score, and
    /// quality flags. Absent or empty optional inputs contribute nothing.
    pub fn calculate_health_metrics(
        &self,
        import_graph: &DependencyGraph,
        cycles: Option<&[Cycle]>,
        hotspots: Option<&[Hotspot]>,
        layers: Option<&LayerMap>,
    ) -> HealthMetrics {
        health::calculate(import_graph, cycles, hotspots, layers)
    }

    /// Generate ordered action items from the same statistics the health
    /// scorer reads. Returns an empty list when no rule fires.
    pub fn generate_recommendations(
        &self,
        import_graph: &DependencyGraph,
        cycles: Option<&[Cycle]>,
        hotspots: Option<&[Hotspot]>,
        layers: Option<&LayerMap>,
    ) -> Vec<String> {
        recommend::generate(import_graph, cycles, hotspots, layers)
    }

    /// Compose the aggregate report.
    ///
    /// Cycles and hotspots may be passed in when the caller already has
    /// them; otherwise cycles and layers come from the injected analyzer
    /// and hotspots from [`rank_hotspots`](Self::rank_hotspots). The only
    /// fallible paths are the analyzer calls.
    pub fn summarize(
        &self,
        import_graph: &DependencyGraph,
        call_graph: Option<&DependencyGraph>,
        cycles: Option<Vec<Cycle>>,
        hotspots: Option<Vec<Hotspot>>,
    ) -> Result<GraphSummary> {
        let cycles = match cycles {
            Some(cycles) => cycles,
            None => self.analyzer.detect_cycles(import_graph)?,
        };
        let hotspots = match hotspots {
            Some(hotspots) => hotspots,
            None => self.rank_hotspots(import_graph, call_graph),
        };
        let layers = self.analyzer.identify_layers(import_graph)?;

        let import_stats = GraphStats {
            nodes: import_graph.nodes.len(),
            edges: import_graph.edges.len(),
            density: import_graph.density(),
        };
        let call_stats = call_graph.map(|calls| CallGraphStats {
            nodes: calls.nodes.len(),
            edges: calls.edges.len(),
        });

        let health_metrics =
            health::calculate(import_graph, Some(&cycles), Some(&hotspots), Some(&layers));
        let recommendations =
            recommend::generate(import_graph, Some(&cycles), Some(&hotspots), Some(&layers));

        info!(
            "Graph summary: {} nodes, {} cycles, health {:.0} ({})",
            import_stats.nodes,
            cycles.len(),
            health_metrics.health_score,
            health_metrics.health_grade
        );

        Ok(GraphSummary {
            import_graph: import_stats,
            call_graph: call_stats,
            cycles: CycleStats::from_cycles(&cycles),
            hotspots: HotspotStats::from_hotspots(&hotspots),
            layers: LayerStats {
                count: layers.len(),
                distribution: layers.iter().map(|(tier, ids)| (*tier, ids.len())).collect(),
            },
            health_metrics,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::NullAnalyzer;
    use crate::models::{GraphEdge, GraphNode};

    fn triangle() -> DependencyGraph {
        DependencyGraph {
            nodes: vec![GraphNode::new("a"), GraphNode::new("b"), GraphNode::new("c")],
            edges: vec![
                GraphEdge::new("a", "b"),
                GraphEdge::new("b", "c"),
                GraphEdge::new("c", "a"),
            ],
        }
    }

    #[test]
    fn test_rank_hotspots_is_deterministic() {
        let insights = GraphInsights::new(InsightsConfig::default(), &NullAnalyzer);
        let graph = triangle();
        let first = insights.rank_hotspots(&graph, None);
        let second = insights.rank_hotspots(&graph, None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_summarize_uses_supplied_cycles() {
        let insights = GraphInsights::new(InsightsConfig::default(), &NullAnalyzer);
        let cycles = vec![Cycle {
            nodes: vec!["a".into(), "b".into(), "c".into()],
            size: 3,
        }];
        let summary = insights
            .summarize(&triangle(), None, Some(cycles), None)
            .unwrap();
        assert_eq!(summary.cycles.total, 1);
        assert_eq!(summary.cycles.largest, 3);
        assert_eq!(summary.cycles.nodes_in_cycles, 3);
        assert_eq!(summary.health_metrics.health_score, 75.0);
        assert_eq!(summary.health_metrics.health_grade, HealthGrade::C);
    }

    #[test]
    fn test_summarize_without_call_graph_omits_its_stats() {
        let insights = GraphInsights::new(InsightsConfig::default(), &NullAnalyzer);
        let summary = insights.summarize(&triangle(), None, None, None).unwrap();
        assert!(summary.call_graph.is_none());
        assert_eq!(summary.import_graph.nodes, 3);
        assert_eq!(summary.import_graph.edges, 3);
    }
}
