//! Result types for the simulation estimator

/// Result of one simulation run
///
/// Returned by value; holds the conditional violation probability and the
/// size of the conditioning set it was computed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Frequency of fine-group violations among coarse-valid draws, in
    /// `[0, 1]`. When no draw is coarse-valid the probability is undefined;
    /// it is reported as `0.0` by convention, distinguishable via
    /// [`has_support`](Self::has_support).
    pub probability: f64,
    /// Number of draws that passed both the ordering filter and the
    /// coarse-group test
    pub coarse_valid: usize,
}

impl Estimate {
    /// The zero-support result: no draw survived the coarse test
    pub fn degenerate() -> Self {
        Self {
            probability: 0.0,
            coarse_valid: 0,
        }
    }

    /// Whether the probability was estimated from at least one coarse-valid
    /// draw, i.e. whether it is a defined conditional frequency rather than
    /// the degenerate `0.0` convention
    pub fn has_support(&self) -> bool {
        self.coarse_valid > 0
    }
}
