//! Aggregate graph summary and summary enrichment

use crate::insights::health::HealthMetrics;
use crate::insights::hotspots::Hotspot;
use crate::models::Cycle;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Node/edge counts and density for the import graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub density: f64,
}

/// Node/edge counts for the optional call graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallGraphStats {
    pub nodes: usize,
    pub edges: usize,
}

/// Cycle statistics. `largest` is the maximum cycle size; `nodes_in_cycles`
/// counts distinct nodes appearing in any cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleStats {
    pub total: usize,
    pub largest: usize,
    pub nodes_in_cycles: usize,
}

impl CycleStats {
    pub(crate) fn from_cycles(cycles: &[Cycle]) -> Self {
        let distinct: FxHashSet<&str> = cycles
            .iter()
            .flat_map(|c| c.nodes.iter().map(String::as_str))
            .collect();
        Self {
            total: cycles.len(),
            largest: cycles.iter().map(|c| c.size).max().unwrap_or(0),
            nodes_in_cycles: distinct.len(),
        }
    }
}

/// Top-ranked hotspot ids and degree extremes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotspotStats {
    pub top_5: Vec<String>,
    pub max_in_degree: usize,
    pub max_out_degree: usize,
}

impl HotspotStats {
    pub(crate) fn from_hotspots(hotspots: &[Hotspot]) -> Self {
        Self {
            top_5: hotspots.iter().take(5).map(|h| h.id.clone()).collect(),
            max_in_degree: hotspots.iter().map(|h| h.in_degree).max().unwrap_or(0),
            max_out_degree: hotspots.iter().map(|h| h.out_degree).max().unwrap_or(0),
        }
    }
}

/// Layer count and per-tier size distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStats {
    pub count: usize,
    pub distribution: BTreeMap<u32, usize>,
}

/// Aggregate report composed by [`GraphInsights::summarize`].
///
/// [`GraphInsights::summarize`]: crate::GraphInsights::summarize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub import_graph: GraphStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_graph: Option<CallGraphStats>,
    pub cycles: CycleStats,
    pub hotspots: HotspotStats,
    pub layers: LayerStats,
    pub health_metrics: HealthMetrics,
    pub recommendations: Vec<String>,
}

/// Raw statistics block of an already-rendered summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedStatistics {
    #[serde(default)]
    pub graph_density: f64,
}

/// Hotspot entry of an already-rendered summary. Rendered summaries carry a
/// collapsed `total_connections` field (in-degree plus out-degree) instead
/// of separate degrees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedHotspot {
    pub id: String,
    #[serde(default)]
    pub in_degree: usize,
    #[serde(default)]
    pub total_connections: usize,
}

/// An already-rendered summary as produced by the reporting layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedSummary {
    #[serde(default)]
    pub statistics: RenderedStatistics,
    #[serde(default)]
    pub top_hotspots: Vec<RenderedHotspot>,
}

/// Coupling classification derived from graph density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouplingLevel {
    High,
    Medium,
    Low,
}

impl CouplingLevel {
    /// `high` above 0.3, `medium` above 0.1, else `low`
    pub fn from_density(density: f64) -> Self {
        if density > 0.3 {
            CouplingLevel::High
        } else if density > 0.1 {
            CouplingLevel::Medium
        } else {
            CouplingLevel::Low
        }
    }
}

impl std::fmt::Display for CouplingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CouplingLevel::High => write!(f, "high"),
            CouplingLevel::Medium => write!(f, "medium"),
            CouplingLevel::Low => write!(f, "low"),
        }
    }
}

/// Interpretive labels attached to a rendered summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitecturalInsights {
    pub coupling_level: CouplingLevel,
    /// Hotspots with in-degree above 30
    pub potential_god_objects: usize,
    /// Hotspots with more than 20 total connections
    pub highly_connected: usize,
}

/// A rendered summary with interpretive labels attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretedSummary {
    #[serde(flatten)]
    pub summary: RenderedSummary,
    pub architectural_insights: ArchitecturalInsights,
}

/// Attach interpretive labels to a rendered summary.
///
/// Pure: consumes the input and returns a new augmented record instead of
/// mutating shared data.
pub fn interpret_graph_summary(summary: RenderedSummary) -> InterpretedSummary {
    let architectural_insights = ArchitecturalInsights {
        coupling_level: CouplingLevel::from_density(summary.statistics.graph_density),
        potential_god_objects: summary
            .top_hotspots
            .iter()
            .filter(|h| h.in_degree > 30)
            .count(),
        highly_connected: summary
            .top_hotspots
            .iter()
            .filter(|h| h.total_connections > 20)
            .count(),
    };

    InterpretedSummary {
        summary,
        architectural_insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(density: f64, hotspots: Vec<(usize, usize)>) -> RenderedSummary {
        RenderedSummary {
            statistics: RenderedStatistics {
                graph_density: density,
            },
            top_hotspots: hotspots
                .into_iter()
                .enumerate()
                .map(|(i, (in_degree, total))| RenderedHotspot {
                    id: format!("n{i}"),
                    in_degree,
                    total_connections: total,
                })
                .collect(),
        }
    }

    #[test]
    fn test_coupling_level_boundaries() {
        assert_eq!(CouplingLevel::from_density(0.05), CouplingLevel::Low);
        assert_eq!(CouplingLevel::from_density(0.1), CouplingLevel::Low);
        assert_eq!(CouplingLevel::from_density(0.2), CouplingLevel::Medium);
        assert_eq!(CouplingLevel::from_density(0.3), CouplingLevel::Medium);
        assert_eq!(CouplingLevel::from_density(0.31), CouplingLevel::High);
    }

    #[test]
    fn test_interpret_counts_god_objects_and_connections() {
        let out = interpret_graph_summary(rendered(0.2, vec![(45, 50), (31, 10), (5, 25), (2, 3)]));
        assert_eq!(out.architectural_insights.potential_god_objects, 2);
        assert_eq!(out.architectural_insights.highly_connected, 2);
        assert_eq!(out.architectural_insights.coupling_level, CouplingLevel::Medium);
        // Input survives unchanged in the returned record
        assert_eq!(out.summary.top_hotspots.len(), 4);
    }

    #[test]
    fn test_interpreted_summary_serializes_flat() {
        let out = interpret_graph_summary(rendered(0.5, vec![]));
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["statistics"]["graph_density"], 0.5);
        assert_eq!(json["architectural_insights"]["coupling_level"], "high");
    }

    #[test]
    fn test_cycle_stats_deduplicate_nodes() {
        let cycles = vec![
            Cycle {
                nodes: vec!["a".into(), "b".into()],
                size: 2,
            },
            Cycle {
                nodes: vec!["b".into(), "c".into(), "d".into()],
                size: 3,
            },
        ];
        let stats = CycleStats::from_cycles(&cycles);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.largest, 3);
        assert_eq!(stats.nodes_in_cycles, 4);
    }

    #[test]
    fn test_hotspot_stats_empty() {
        let stats = HotspotStats::from_hotspots(&[]);
        assert!(stats.top_5.is_empty());
        assert_eq!(stats.max_in_degree, 0);
        assert_eq!(stats.max_out_degree, 0);
    }
}
