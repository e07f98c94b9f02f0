//! White noise generator implementation.

use crate::{Sample, Signal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

impl<S: Sample> Signal<S> {
    /// White noise from a seeded generator.
    ///
    /// Each read draws a fresh value uniformly distributed in `[-1, 1)`,
    /// whatever the index. Two signals built from the same seed produce the
    /// same sequence when read the same number of times.
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed for the underlying `StdRng`
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdsp::Signal;
    ///
    /// let a = Signal::<f32>::white_noise(42);
    /// let b = Signal::<f32>::white_noise(42);
    /// assert_eq!(a.output(0, 8), b.output(0, 8));
    /// ```
    pub fn white_noise(seed: u64) -> Self {
        Self::white_noise_with_rng(StdRng::seed_from_u64(seed))
    }

    /// White noise drawn from a caller-supplied generator.
    ///
    /// Values are drawn in the signal's own precision, so the upper bound is
    /// excluded for `f32` as well as `f64`.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random number generator to draw from
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdsp::Signal;
    ///
    /// let noise = Signal::<f64>::white_noise_with_rng(rand::thread_rng());
    /// let sample = noise.at(0);
    /// assert!((-1.0..1.0).contains(&sample));
    /// ```
    pub fn white_noise_with_rng<R: Rng + 'static>(rng: R) -> Self {
        let rng = RefCell::new(rng);
        Self::new(move |_| rng.borrow_mut().gen_range(-S::one()..S::one()))
    }
}
