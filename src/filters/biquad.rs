//! Biquad filter designs.
//!
//! Second-order coefficient sets from Robert Bristow-Johnson's Audio EQ
//! Cookbook. The designs return unnormalized `b`/`a` arrays; [`Filter`]
//! divides them by `a[0]` on construction.

use super::Filter;
use crate::{Result, Sample};
use std::f64::consts::PI;

/// The type of filter to design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    /// Low-pass filter - attenuates frequencies above the cutoff
    LowPass,
    /// High-pass filter - attenuates frequencies below the cutoff
    HighPass,
    /// Band-pass filter - passes frequencies near the center, attenuates others
    BandPass,
    /// Notch/band-reject filter - attenuates frequencies near the center
    Notch,
    /// All-pass filter - passes all frequencies but shifts phase
    AllPass,
}

impl FilterType {
    /// Cookbook coefficients `(b, a)` for this filter type.
    ///
    /// The cutoff is clamped to `[1, 0.49 * sample_rate]` Hz and `q` to at
    /// least 0.001.
    pub fn coefficients(self, sample_rate: u32, cutoff: f64, q: f64) -> ([f64; 3], [f64; 3]) {
        let sample_rate = sample_rate as f64;
        let freq = cutoff.clamp(1.0, sample_rate * 0.49);
        let q = q.max(0.001);

        let omega = 2.0 * PI * freq / sample_rate;
        let sin_omega = omega.sin();
        let cos_omega = omega.cos();
        let alpha = sin_omega / (2.0 * q);

        let a = [1.0 + alpha, -2.0 * cos_omega, 1.0 - alpha];
        let b = match self {
            FilterType::LowPass => {
                let side = (1.0 - cos_omega) / 2.0;
                [side, 1.0 - cos_omega, side]
            }
            FilterType::HighPass => {
                let side = (1.0 + cos_omega) / 2.0;
                [side, -(1.0 + cos_omega), side]
            }
            // Constant 0 dB peak gain
            FilterType::BandPass => [alpha, 0.0, -alpha],
            FilterType::Notch => [1.0, -2.0 * cos_omega, 1.0],
            FilterType::AllPass => [1.0 - alpha, -2.0 * cos_omega, 1.0 + alpha],
        };
        (b, a)
    }
}

impl<F: Sample> Filter<F> {
    /// Designs a biquad of the given type.
    ///
    /// # Arguments
    ///
    /// * `kind` - Response shape of the filter
    /// * `sample_rate` - Sample rate in Hz
    /// * `cutoff` - Cutoff (or center) frequency in Hz
    /// * `q` - Resonance; 0.707 gives a Butterworth response
    ///
    /// # Returns
    ///
    /// A second-order recursive filter with `a[0]` normalized to 1.
    ///
    /// # Errors
    ///
    /// Fails if the parameters produce non-finite coefficients (for example a
    /// NaN cutoff).
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdsp::{Filter, FilterType};
    ///
    /// let lowpass = Filter::<f64>::biquad(FilterType::LowPass, 44100, 1000.0, 0.707).unwrap();
    /// assert_eq!(lowpass.a()[0], 1.0);
    /// ```
    pub fn biquad(kind: FilterType, sample_rate: u32, cutoff: f64, q: f64) -> Result<Self> {
        let (b, a) = kind.coefficients(sample_rate, cutoff, q);
        Self::try_new(
            b.iter().map(|&c| F::from_double(c)).collect(),
            a.iter().map(|&c| F::from_double(c)).collect(),
        )
    }

    /// Designs a low-pass biquad.
    pub fn lowpass(sample_rate: u32, cutoff: f64, q: f64) -> Result<Self> {
        Self::biquad(FilterType::LowPass, sample_rate, cutoff, q)
    }

    /// Designs a high-pass biquad.
    pub fn highpass(sample_rate: u32, cutoff: f64, q: f64) -> Result<Self> {
        Self::biquad(FilterType::HighPass, sample_rate, cutoff, q)
    }

    /// Designs a band-pass biquad around `center`.
    pub fn bandpass(sample_rate: u32, center: f64, q: f64) -> Result<Self> {
        Self::biquad(FilterType::BandPass, sample_rate, center, q)
    }

    /// Designs a notch biquad rejecting `center`.
    pub fn notch(sample_rate: u32, center: f64, q: f64) -> Result<Self> {
        Self::biquad(FilterType::Notch, sample_rate, center, q)
    }

    /// Designs an all-pass biquad.
    pub fn allpass(sample_rate: u32, frequency: f64, q: f64) -> Result<Self> {
        Self::biquad(FilterType::AllPass, sample_rate, frequency, q)
    }
}
