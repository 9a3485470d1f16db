//! Change-impact ratio

use std::collections::HashSet;

/// Fraction of the graph impacted by a change, in `[0, 1]`.
///
/// `targets` (the original change targets) is accepted for signature parity
/// with callers that track them alongside the expanded impact set, but does
/// not enter the computation. Returns 0.0 for an empty graph.
#[allow(clippy::implicit_hasher)]
pub fn impact_ratio(targets: &[String], all_impacted: &HashSet<String>, total_nodes: usize) -> f64 {
    let _ = targets;
    if total_nodes == 0 {
        return 0.0;
    }
    all_impacted.len() as f64 / total_nodes as f64
}
