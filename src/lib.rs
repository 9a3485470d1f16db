//! Graphsight - interpretive metrics for extracted code graphs
//!
//! Computes derived, opinionated metrics over a dependency/call graph that
//! an external extractor has already built: hotspot ranking, approximate
//! centrality, a 0-100 health score with a letter grade, a fragility
//! score, actionable recommendations, and a change-impact ratio. The
//! results feed a reporting layer; this crate neither parses source code
//! nor renders reports.
//!
//! # Example
//!
//! ```
//! use graphsight::{DependencyGraph, GraphInsights, InsightsConfig, NullAnalyzer};
//!
//! let graph = DependencyGraph::from_json(
//!     r#"{"nodes": [{"id": "app"}, {"id": "util"}],
//!         "edges": [{"source": "app", "target": "util"}]}"#,
//! )?;
//!
//! let insights = GraphInsights::new(InsightsConfig::default(), &NullAnalyzer);
//! let hotspots = insights.rank_hotspots(&graph, None);
//! assert_eq!(hotspots[0].id, "util");
//! # Ok::<(), graphsight::ContractError>(())
//! ```

pub mod analyzer;
pub mod config;
pub mod insights;
pub mod models;

pub use analyzer::{GraphAnalyzer, NullAnalyzer};
pub use config::{load_insights_config, CentralityParams, HotspotWeights, InsightsConfig};
pub use insights::{
    impact_ratio, interpret_graph_summary, GraphInsights, GraphSummary, HealthGrade,
    HealthMetrics, Hotspot, InterpretedSummary, RenderedSummary,
};
pub use models::{ContractError, Cycle, DependencyGraph, GraphEdge, GraphNode, LayerMap};
