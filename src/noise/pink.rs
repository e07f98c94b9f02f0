//! Pink noise generator implementation.

use crate::{Sample, Signal};

impl<S: Sample> Signal<S> {
    /// Pink (1/f) noise: seeded white noise through a fresh pink filter.
    ///
    /// The result is stateful and must be read once per index, in order.
    pub fn pink_noise(seed: u64) -> Self {
        Self::white_noise(seed).pink_filter()
    }
}
