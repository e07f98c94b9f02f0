//! Sample representation shared by signals and filters.
//!
//! Signals and filters are generic over a floating point `Sample` type so the
//! same graph code runs at single or double precision. Parameters may use a
//! different precision than the signal they act on; they are converted with
//! [`Sample::cast`] before use.

use num_traits::{Float, FloatConst};
use rand::distributions::uniform::SampleUniform;
use std::fmt::Debug;
use std::iter::Sum;

/// Numeric type a signal or filter computes with.
///
/// Arithmetic, `sin`, `abs` and `epsilon` come from [`num_traits::Float`].
/// [`SampleUniform`] lets noise generators draw directly in the sample type.
/// This trait adds lossless-enough conversion through `f64` and the
/// scale-by-scalar primitive used for coefficient normalization.
///
/// # Examples
///
/// ```
/// use blockdsp::Sample;
///
/// let x: f32 = 0.25_f64.cast();
/// assert_eq!(x, 0.25_f32);
///
/// let mut taps = [1.0_f64, 2.0, 4.0];
/// f64::scale_slice(&mut taps, 0.5);
/// assert_eq!(taps, [0.5, 1.0, 2.0]);
/// ```
pub trait Sample: Float + FloatConst + SampleUniform + Default + Debug + Sum + 'static {
    /// Converts from double precision.
    fn from_double(value: f64) -> Self;

    /// Converts to double precision.
    fn to_double(self) -> f64;

    /// Converts to another sample precision.
    fn cast<P: Sample>(self) -> P {
        P::from_double(self.to_double())
    }

    /// Multiplies every element of `values` by `factor` in place.
    fn scale_slice(values: &mut [Self], factor: Self) {
        for value in values.iter_mut() {
            *value = *value * factor;
        }
    }
}

impl Sample for f32 {
    fn from_double(value: f64) -> Self {
        value as f32
    }

    fn to_double(self) -> f64 {
        self as f64
    }
}

impl Sample for f64 {
    fn from_double(value: f64) -> Self {
        value
    }

    fn to_double(self) -> f64 {
        self
    }
}

/// Returns `count` zero samples.
pub(crate) fn zeros<P: Sample>(count: usize) -> Vec<P> {
    vec![P::zero(); count]
}
