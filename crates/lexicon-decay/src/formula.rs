use lexicon_core::TickCount;

/// Ticks elapsed between the recording tick and the evaluation tick.
///
/// Recording ticks before `start` are treated as `start`; recording ticks
/// after `end` give zero.
pub fn elapsed_ticks(start: TickCount, end: TickCount, at: TickCount) -> f64 {
    end.saturating_sub(at.max(start)) as f64
}

/// Exponential decay: `weight × e^(-elapsed / halfLife)`.
///
/// Identity at zero elapsed ticks.
pub fn decayed_weight(weight: f64, elapsed: f64, half_life: f64) -> f64 {
    if elapsed <= 0.0 {
        return weight;
    }
    weight * (-elapsed / half_life).exp()
}
