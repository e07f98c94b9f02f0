//! Fixed 1/f shaping filter.

use super::Filter;
use crate::Sample;

/// Feed-forward coefficients of the pink noise filter.
///
/// From J. O. Smith, "Example: Synthesis of 1/f Noise (Pink Noise)",
/// Spectral Audio Signal Processing.
pub const PINK_B: [f64; 4] = [0.049922035, -0.095993537, 0.050612699, -0.004408786];

/// Feedback coefficients of the pink noise filter.
pub const PINK_A: [f64; 4] = [1.000000000, -2.494956002, 2.017265875, -0.522189400];

impl<F: Sample> Filter<F> {
    /// A fresh pink noise shaping filter with its own delay line.
    ///
    /// Fed white noise, the output has roughly equal power per octave.
    pub fn pink() -> Self {
        let b = PINK_B.iter().map(|&c| F::from_double(c)).collect();
        let a = PINK_A.iter().map(|&c| F::from_double(c)).collect();
        Self::new(b, a)
    }
}
