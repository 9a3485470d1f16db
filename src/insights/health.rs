//! Health and fragility scoring
//!
//! Converts raw graph statistics into an opinionated 0-100 health score
//! with a letter grade, an independent 0-100 fragility score, and four
//! boolean quality flags.
//!
//! # Scoring Formula
//!
//! ```text
//! health   = 100 - min(5·cycles, 30)
//!                - min((density - 0.3)·100, 20)   [only if density > 0.3]
//!                - min(top_in_degree ÷ 10, 20)    [only if top_in_degree > 50]
//!            floored at 0
//!
//! fragility = min(top_score·10, 40) + min(3·cycles, 30) + min(density·100, 30)
//!             capped at 100
//! ```

use crate::insights::hotspots::Hotspot;
use crate::models::{Cycle, DependencyGraph, LayerMap};
use serde::{Deserialize, Serialize};

/// Letter grade for a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthGrade {
    A,
    B,
    C,
    D,
    F,
}

impl HealthGrade {
    /// Grade by threshold: `>=90 A, >=80 B, >=70 C, >=60 D, else F`
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => HealthGrade::A,
            s if s >= 80.0 => HealthGrade::B,
            s if s >= 70.0 => HealthGrade::C,
            s if s >= 60.0 => HealthGrade::D,
            _ => HealthGrade::F,
        }
    }
}

impl std::fmt::Display for HealthGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthGrade::A => write!(f, "A"),
            HealthGrade::B => write!(f, "B"),
            HealthGrade::C => write!(f, "C"),
            HealthGrade::D => write!(f, "D"),
            HealthGrade::F => write!(f, "F"),
        }
    }
}

/// Interpreted health metrics for an import graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub health_score: f64,
    pub health_grade: HealthGrade,
    pub fragility_score: f64,
    pub density: f64,
    pub cycle_free: bool,
    pub well_layered: bool,
    pub loosely_coupled: bool,
    pub no_god_objects: bool,
}

/// Compute health metrics from the graph and optional precomputed inputs.
///
/// An empty cycles/hotspots/layers collection behaves like an absent one.
pub(crate) fn calculate(
    import_graph: &DependencyGraph,
    cycles: Option<&[Cycle]>,
    hotspots: Option<&[Hotspot]>,
    layers: Option<&LayerMap>,
) -> HealthMetrics {
    let density = import_graph.density();
    let cycle_count = cycles.map(<[Cycle]>::len).unwrap_or(0);
    let top_hotspot = hotspots.and_then(|h| h.first());

    let mut health_score = 100.0;

    if cycle_count > 0 {
        health_score -= (cycle_count as f64 * 5.0).min(30.0);
    }

    if density > 0.3 {
        health_score -= ((density - 0.3) * 100.0).min(20.0);
    }

    if let Some(top) = top_hotspot {
        if top.in_degree > 50 {
            health_score -= ((top.in_degree / 10) as f64).min(20.0);
        }
    }

    let health_score = health_score.max(0.0);

    let mut fragility = 0.0;
    if let Some(top) = top_hotspot {
        fragility += (top.score * 10.0).min(40.0);
    }
    if cycle_count > 0 {
        fragility += (cycle_count as f64 * 3.0).min(30.0);
    }
    fragility += (density * 100.0).min(30.0);

    let well_layered = layers.is_some_and(|layers| {
        layers.len() > 2 && layers.keys().next_back().is_some_and(|tier| *tier < 10)
    });

    HealthMetrics {
        health_score,
        health_grade: HealthGrade::from_score(health_score),
        fragility_score: fragility.min(100.0),
        density,
        cycle_free: cycle_count == 0,
        well_layered,
        loosely_coupled: density < 0.2,
        no_god_objects: top_hotspot.map_or(true, |top| top.in_degree < 30),
    }
}
