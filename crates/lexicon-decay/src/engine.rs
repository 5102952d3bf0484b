use lexicon_core::config::{defaults, DecayConfig};
use lexicon_core::{IDecayModel, TickCount};

use crate::formula;

/// Decay model with a configurable half-life measured in ticks.
#[derive(Debug, Clone, Copy)]
pub struct DecayEngine {
    half_life_ticks: f64,
}

impl DecayEngine {
    /// Create a DecayEngine with the default half-life.
    pub fn new() -> Self {
        Self {
            half_life_ticks: defaults::DEFAULT_HALF_LIFE_TICKS,
        }
    }

    /// Create with a custom half-life. Non-positive or non-finite values fall back to the default.
    pub fn with_half_life(half_life_ticks: f64) -> Self {
        if half_life_ticks.is_finite() && half_life_ticks > 0.0 {
            Self { half_life_ticks }
        } else {
            Self::new()
        }
    }

    pub fn from_config(config: &DecayConfig) -> Self {
        Self::with_half_life(config.half_life_ticks)
    }

    pub fn half_life_ticks(&self) -> f64 {
        self.half_life_ticks
    }
}

impl Default for DecayEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IDecayModel for DecayEngine {
    fn decay(&self, start: TickCount, end: TickCount, weight: f64, at: TickCount) -> f64 {
        let elapsed = formula::elapsed_ticks(start, end, at);
        formula::decayed_weight(weight, elapsed, self.half_life_ticks)
    }
}
