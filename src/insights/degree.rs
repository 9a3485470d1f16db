//! Degree counting over one or two edge sets

use crate::models::DependencyGraph;
use rustc_hash::FxHashMap;

/// In-/out-degree tallies across the import graph and optional call graph.
///
/// Nodes never appearing as an edge endpoint have degree 0; a missing call
/// graph simply contributes nothing.
#[derive(Debug, Clone, Default)]
pub struct DegreeTally {
    in_degree: FxHashMap<String, usize>,
    out_degree: FxHashMap<String, usize>,
}

impl DegreeTally {
    /// Count degrees over both graphs' edge lists.
    pub fn tally(import_graph: &DependencyGraph, call_graph: Option<&DependencyGraph>) -> Self {
        let mut tally = Self::default();
        tally.accumulate(import_graph);
        if let Some(calls) = call_graph {
            tally.accumulate(calls);
        }
        tally
    }

    fn accumulate(&mut self, graph: &DependencyGraph) {
        for edge in &graph.edges {
            *self.out_degree.entry(edge.source.clone()).or_insert(0) += 1;
            *self.in_degree.entry(edge.target.clone()).or_insert(0) += 1;
        }
    }

    /// Number of edges pointing at `id`
    pub fn in_degree(&self, id: &str) -> usize {
        self.in_degree.get(id).copied().unwrap_or(0)
    }

    /// Number of edges leaving `id`
    pub fn out_degree(&self, id: &str) -> usize {
        self.out_degree.get(id).copied().unwrap_or(0)
    }
}
