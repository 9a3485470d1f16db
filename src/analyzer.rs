//! External graph-analysis collaborator seam
//!
//! Cycle detection and layer identification are not part of this crate;
//! they belong to the graph extractor. The summary orchestrator receives a
//! collaborator implementing this trait at construction time, so the
//! dependency is explicit instead of resolved lazily at call time.

use crate::models::{Cycle, DependencyGraph, LayerMap};
use anyhow::Result;

/// Interface to the external graph analyzer supplying cycle and layer data.
pub trait GraphAnalyzer: Send + Sync {
    /// Detect dependency cycles in the graph
    fn detect_cycles(&self, graph: &DependencyGraph) -> Result<Vec<Cycle>>;

    /// Group nodes into architectural layers keyed by tier index
    fn identify_layers(&self, graph: &DependencyGraph) -> Result<LayerMap>;
}

/// Analyzer that reports no cycles and no layers.
///
/// For callers that always pass precomputed cycle data to `summarize`;
/// layer statistics come out empty and `well_layered` stays false.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAnalyzer;

impl GraphAnalyzer for NullAnalyzer {
    fn detect_cycles(&self, _graph: &DependencyGraph) -> Result<Vec<Cycle>> {
        Ok(Vec::new())
    }

    fn identify_layers(&self, _graph: &DependencyGraph) -> Result<LayerMap> {
        Ok(LayerMap::new())
    }
}
