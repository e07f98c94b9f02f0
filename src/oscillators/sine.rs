//! Sine wave generator.

use crate::{Sample, Signal};

impl<S: Sample> Signal<S> {
    /// A sine wave at `frequency` Hz.
    ///
    /// Sample `i` is `sin(2π · i · frequency / sample_rate)`, computed in the
    /// precision of `frequency` and converted to the signal's sample type.
    /// The signal is pure: any index can be read, in any order.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100 for CD quality)
    /// * `frequency` - Frequency in Hz, in any sample precision
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdsp::Signal;
    ///
    /// // A quarter of the sample rate completes a cycle every 4 samples.
    /// let sine = Signal::<f64>::sine_wave(48000, 12000.0_f64);
    /// assert!((sine.at(1) - 1.0).abs() < 1e-12);
    /// ```
    pub fn sine_wave<P: Sample>(sample_rate: u32, frequency: P) -> Self {
        let phi = frequency / P::from_double(sample_rate as f64);
        let two_pi = P::TAU();
        Self::new(move |i| {
            let phase = two_pi * P::from_double(i as f64) * phi;
            phase.sin().cast()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_starts_at_zero() {
        let sine = Signal::<f64>::sine_wave(44100, 440.0_f64);
        assert_eq!(sine.at(0), 0.0);
    }

    #[test]
    fn test_follows_sample_index() {
        let sine = Signal::<f64>::sine_wave(44100, 440.0_f64);
        for i in [1, 17, 100, 44_099] {
            let expected = (2.0 * PI * i as f64 * 440.0 / 44100.0).sin();
            assert!((sine.at(i) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_is_not_silent() {
        let sine = Signal::<f32>::sine_wave(44100, 440.0_f64);
        let peak = sine
            .output(0, 200)
            .into_iter()
            .fold(0.0_f32, |acc, s| acc.max(s.abs()));
        assert!(peak > 0.99);
    }

    #[test]
    fn test_sample_range() {
        let sine = Signal::<f32>::sine_wave(44100, 1234.5_f32);
        for sample in sine.output(0, 44100) {
            assert!((-1.0..=1.0).contains(&sample));
        }
    }

    #[test]
    fn test_periodicity() {
        let sine = Signal::<f64>::sine_wave(48000, 1000.0_f64);
        for i in 0..48 {
            assert!((sine.at(i) - sine.at(i + 48)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_random_access_is_pure() {
        let sine = Signal::<f64>::sine_wave(44100, 440.0_f64);
        let forward = sine.output(0, 16);
        let again = sine.at(9);
        assert_eq!(forward[9], again);
    }
}
