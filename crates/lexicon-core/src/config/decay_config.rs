use serde::{Deserialize, Serialize};

use super::defaults;

/// Decay subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Ticks for a weight to fall to `1/e` of its value.
    pub half_life_ticks: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            half_life_ticks: defaults::DEFAULT_HALF_LIFE_TICKS,
        }
    }
}
