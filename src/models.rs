//! Core data models for graphsight
//!
//! These types form the input contract with the external graph extractor:
//! graphs arrive as node/edge lists, cycles and layers arrive precomputed.
//! Optional fields default to zero so partial payloads degrade gracefully
//! instead of failing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised when external graph data violates the input contract.
///
/// The engine itself never raises these; they only occur at the boundary
/// where raw payloads are parsed and validated.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("invalid graph payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate node id `{0}` in node list")]
    DuplicateNode(String),
}

/// A node in a dependency or call graph.
///
/// `churn` is the commit-change count and `loc` the lines of code; both are
/// optional in the wire format and default to 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(default)]
    pub churn: u64,
    #[serde(default)]
    pub loc: u64,
}

impl GraphNode {
    /// Create a node with zero churn and loc
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            churn: 0,
            loc: 0,
        }
    }

    /// Set the commit-change count
    pub fn with_churn(mut self, churn: u64) -> Self {
        self.churn = churn;
        self
    }

    /// Set the lines of code
    pub fn with_loc(mut self, loc: u64) -> Self {
        self.loc = loc;
        self
    }
}

/// A directed edge between two nodes.
///
/// Endpoints are not required to appear in the node list; degree and
/// centrality tolerate edges referencing unlisted nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// An extracted dependency or call graph.
///
/// Two instances may describe the same codebase (import graph, call graph);
/// they share node-identifier space but are processed with independent
/// edge sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyGraph {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl DependencyGraph {
    /// Parse and validate a graph payload from the external extractor.
    ///
    /// Rejects duplicate node ids; edges referencing unlisted nodes remain
    /// legal and simply accrue degree without appearing in hotspot output.
    pub fn from_json(payload: &str) -> Result<Self, ContractError> {
        let graph: DependencyGraph = serde_json::from_str(payload)?;
        graph.validate()?;
        Ok(graph)
    }

    fn validate(&self) -> Result<(), ContractError> {
        let mut seen = rustc_hash::FxHashSet::default();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(ContractError::DuplicateNode(node.id.clone()));
            }
        }
        Ok(())
    }

    /// Edge-to-possible-edge ratio for a directed graph without self-loops.
    ///
    /// With 0 or 1 nodes the denominator falls back to 1, so the value is
    /// the raw edge count rather than a true density. Guards divide-by-zero.
    pub fn density(&self) -> f64 {
        let nodes = self.nodes.len();
        let max_edges = if nodes > 1 { nodes * (nodes - 1) } else { 1 };
        self.edges.len() as f64 / max_edges as f64
    }
}

/// A dependency cycle reported by the external cycle detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    pub nodes: Vec<String>,
    pub size: usize,
}

/// Architectural layers keyed by numeric tier index, as reported by the
/// external layer identifier.
///
/// Keys are typed as tier indices (0 = outermost); semantic layer names are
/// out of contract. `BTreeMap` keeps tiers ordered so the maximum tier is
/// well defined for the `well_layered` flag.
pub type LayerMap = BTreeMap<u32, Vec<String>>;
