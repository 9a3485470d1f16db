//! Configuration for the insights engine
//!
//! Loads per-project configuration from `graphsight.toml` or
//! `.graphsightrc.json` in the repository root. Configuration is advisory:
//! a missing or malformed file falls back to defaults with a warning.
//!
//! # Configuration Format
//!
//! ```toml
//! # graphsight.toml
//!
//! [weights]
//! in_degree = 0.3
//! out_degree = 0.2
//! centrality = 0.3
//! churn = 0.1
//! loc = 0.1
//!
//! [centrality]
//! damping = 0.85
//! iterations = 10
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Weights for the hotspot score. Defaults sum to 1.0 but that is not
/// enforced; callers may supply any non-negative values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotspotWeights {
    pub in_degree: f64,
    pub out_degree: f64,
    pub centrality: f64,
    pub churn: f64,
    pub loc: f64,
}

impl Default for HotspotWeights {
    fn default() -> Self {
        Self {
            in_degree: 0.3,
            out_degree: 0.2,
            centrality: 0.3,
            churn: 0.1,
            loc: 0.1,
        }
    }
}

/// Parameters for the power-method centrality approximation.
///
/// The defaults (10 iterations, damping 0.85) are a behavioral contract:
/// the engine runs a fixed iteration count with no convergence check, so
/// changing them changes centrality output on graphs that have not settled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CentralityParams {
    pub damping: f64,
    pub iterations: usize,
}

impl Default for CentralityParams {
    fn default() -> Self {
        Self {
            damping: 0.85,
            iterations: 10,
        }
    }
}

/// Complete engine configuration, passed at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    pub weights: HotspotWeights,
    pub centrality: CentralityParams,
}

/// Load configuration from a repository root.
///
/// Tries `graphsight.toml` first, then `.graphsightrc.json`. Malformed
/// files are logged and skipped; the result always carries usable values.
pub fn load_insights_config(repo_path: &Path) -> InsightsConfig {
    let toml_path = repo_path.join("graphsight.toml");
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded insights config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    let json_path = repo_path.join(".graphsightrc.json");
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded insights config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    InsightsConfig::default()
}

fn load_toml_config(path: &Path) -> anyhow::Result<InsightsConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: InsightsConfig = toml::from_str(&content)?;
    Ok(config)
}

fn load_json_config(path: &Path) -> anyhow::Result<InsightsConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: InsightsConfig = serde_json::from_str(&content)?;
    Ok(config)
}
