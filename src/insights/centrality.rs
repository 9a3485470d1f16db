//! Power-method centrality approximation
//!
//! PageRank-style propagation over the import graph's edges. This is an
//! approximation, not exact PageRank: it runs a fixed iteration count with
//! no convergence check, and that behavior is part of the output contract.

use crate::config::CentralityParams;
use crate::models::DependencyGraph;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Approximate per-node centrality in `[0, 1]`.
///
/// The adjacency relation is built from edges only: a node with no incident
/// edge receives no entry at all, not zero. Every edge endpoint starts at
/// 1.0; each iteration updates all nodes synchronously with
/// `new[n] = (1 - d) + d * Σ score[s] / max(|adj[s]|, 1)` over sources `s`
/// whose adjacency contains `n`. Duplicate edges inflate `|adj[s]|` but a
/// source contributes to a given target at most once per iteration. Scores
/// are normalized by the maximum after the final iteration.
pub fn approximate_centrality(
    graph: &DependencyGraph,
    params: &CentralityParams,
) -> FxHashMap<String, f64> {
    let mut adj: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    let mut nodes: FxHashSet<&str> = FxHashSet::default();

    for edge in &graph.edges {
        adj.entry(edge.source.as_str()).or_default().push(edge.target.as_str());
        nodes.insert(edge.source.as_str());
        nodes.insert(edge.target.as_str());
    }

    if nodes.is_empty() {
        return FxHashMap::default();
    }

    let mut scores: FxHashMap<&str, f64> = nodes.iter().map(|n| (*n, 1.0)).collect();

    for _ in 0..params.iterations {
        let mut next: FxHashMap<&str, f64> = nodes
            .iter()
            .map(|n| (*n, 1.0 - params.damping))
            .collect();

        for (source, targets) in &adj {
            let source_score = scores.get(source).copied().unwrap_or(0.0);
            let share = params.damping * source_score / targets.len().max(1) as f64;
            let mut seen: FxHashSet<&str> = FxHashSet::default();
            for target in targets {
                if seen.insert(*target) {
                    if let Some(score) = next.get_mut(*target) {
                        *score += share;
                    }
                }
            }
        }

        scores = next;
    }

    // Normalize to [0, 1]. An all-zero maximum is unreachable with a
    // positive base term, but stays guarded.
    let max_score = scores.values().copied().fold(0.0_f64, f64::max);
    if max_score > 0.0 {
        for score in scores.values_mut() {
            *score /= max_score;
        }
    }

    debug!(
        "Centrality: {} nodes, {} iterations, damping {}",
        scores.len(),
        params.iterations,
        params.damping
    );

    scores
        .into_iter()
        .map(|(id, score)| (id.to_string(), score))
        .collect()
}
