use crate::models::TickCount;

/// Normalizes a usage weight recorded at one tick to a later tick.
pub trait IDecayModel {
    /// Value that `weight`, recorded at tick `at`, contributes when evaluated
    /// at `end`, for the interval `[start, end)`.
    ///
    /// Must be non-increasing in `end - at` and the identity when `at == end`.
    fn decay(&self, start: TickCount, end: TickCount, weight: f64, at: TickCount) -> f64;
}
