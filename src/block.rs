//! Arity-tagged signal transforms.
//!
//! A [`Block`] maps a fixed number of input signals to a fixed number of
//! output signals. Blocks hold no state of their own: each call to
//! [`process`](Block::process) builds new output signals, and any filter state
//! lives inside those signals.

use crate::filters::Filter;
use crate::{Error, Result, Sample, Signal};
use std::fmt;
use std::rc::Rc;

type ProcessFn<S> = dyn Fn(&[Signal<S>]) -> Vec<Signal<S>>;

/// A transform from `input_count` signals to `output_count` signals.
///
/// Cloning a block is cheap and shares its process function.
///
/// # Examples
///
/// ```
/// use blockdsp::{Block, Signal};
///
/// let swap = Block::new(2, 2, |inputs: &[Signal<f64>]| {
///     vec![inputs[1].clone(), inputs[0].clone()]
/// });
/// let outputs = swap.process(&[Signal::constant(1.0), Signal::constant(2.0)]);
/// assert_eq!(outputs[0].at(0), 2.0);
/// assert_eq!(outputs[1].at(0), 1.0);
/// ```
pub struct Block<S> {
    input_count: usize,
    output_count: usize,
    process: Rc<ProcessFn<S>>,
}

impl<S> Clone for Block<S> {
    fn clone(&self) -> Self {
        Self {
            input_count: self.input_count,
            output_count: self.output_count,
            process: Rc::clone(&self.process),
        }
    }
}

impl<S> fmt::Debug for Block<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("input_count", &self.input_count)
            .field("output_count", &self.output_count)
            .finish_non_exhaustive()
    }
}

impl<S: Sample> Block<S> {
    /// Creates a block from its arity and process function.
    ///
    /// # Arguments
    ///
    /// * `input_count` - Number of signals `process` receives
    /// * `output_count` - Number of signals `process` must return
    /// * `process` - Builds the output signals from the inputs
    ///
    /// `process` is only ever called with exactly `input_count` signals.
    pub fn new(
        input_count: usize,
        output_count: usize,
        process: impl Fn(&[Signal<S>]) -> Vec<Signal<S>> + 'static,
    ) -> Self {
        Self {
            input_count,
            output_count,
            process: Rc::new(process),
        }
    }

    /// Number of input signals the block consumes.
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// Number of output signals the block produces.
    pub fn output_count(&self) -> usize {
        self.output_count
    }

    /// Runs the block on `inputs`.
    ///
    /// # Errors
    ///
    /// Fails if `inputs` does not hold exactly `input_count` signals.
    pub fn try_process(&self, inputs: &[Signal<S>]) -> Result<Vec<Signal<S>>> {
        if inputs.len() != self.input_count {
            return Err(Error::InputCount {
                expected: self.input_count,
                found: inputs.len(),
            });
        }
        let outputs = (self.process)(inputs);
        debug_assert_eq!(
            outputs.len(),
            self.output_count,
            "block produced the wrong number of outputs"
        );
        Ok(outputs)
    }

    /// Runs the block on `inputs`.
    ///
    /// # Panics
    ///
    /// Panics if `inputs` does not hold exactly `input_count` signals.
    pub fn process(&self, inputs: &[Signal<S>]) -> Vec<Signal<S>> {
        match self.try_process(inputs) {
            Ok(outputs) => outputs,
            Err(e) => panic!("{e}"),
        }
    }

    /// A zero-input block producing the signal built by `make`.
    ///
    /// `make` runs on every call to `process`, so stateful sources start
    /// fresh each time.
    pub fn source(make: impl Fn() -> Signal<S> + 'static) -> Self {
        Self::new(0, 1, move |_| vec![make()])
    }

    /// A sine generator leaf. See [`Signal::sine_wave`].
    pub fn sine<P: Sample>(sample_rate: u32, frequency: P) -> Self {
        Self::source(move || Signal::sine_wave(sample_rate, frequency))
    }

    /// A white noise generator leaf. See [`Signal::white_noise`].
    ///
    /// Every `process` call reseeds, so each run yields the same sequence.
    pub fn white_noise(seed: u64) -> Self {
        Self::source(move || Signal::white_noise(seed))
    }

    /// A pink noise generator leaf. See [`Signal::pink_noise`].
    pub fn pink_noise(seed: u64) -> Self {
        Self::source(move || Signal::pink_noise(seed))
    }

    /// A one-in, one-out block scaling its input by `amplitude`.
    pub fn gain<P: Sample>(amplitude: P) -> Self {
        Self::new(1, 1, move |inputs| vec![inputs[0].scale(amplitude)])
    }

    /// A one-in, one-out block running its input through `filter`.
    ///
    /// Each `process` call filters with its own copy of `filter`, starting
    /// from an empty delay line.
    pub fn filter<F: Sample>(filter: Filter<F>) -> Self {
        Self::new(1, 1, move |inputs| {
            let mut fresh = filter.clone();
            fresh.reset();
            vec![inputs[0].filt(fresh)]
        })
    }

    /// A one-in, one-out pink noise shaping block.
    pub fn pink_filter() -> Self {
        Self::filter(Filter::<f64>::pink())
    }
}
