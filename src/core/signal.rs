//! Lazily evaluated, index-addressed signals.
//!
//! A [`Signal`] is a function from a sample index to a sample value. Deriving
//! a signal (scaling, mixing, filtering) wraps the source in a new function;
//! nothing is computed until a sample is read.
//!
//! Most signals are pure: reading index `i` twice gives the same value.
//! Filtered signals are not. They carry a delay line that advances on every
//! read, so they must be read once per index, in increasing order, starting
//! at 0. [`Renderer`](crate::Renderer) drives a graph that way.

use crate::Sample;
use crate::filters::Filter;
use std::cell::RefCell;
use std::fmt;
use std::iter::Sum;
use std::ops::Range;
use std::rc::Rc;

/// An infinite sequence of samples, produced on demand.
///
/// Cloning a signal is cheap and shares the underlying function, including
/// any filter state it captures.
///
/// # Examples
///
/// ```
/// use blockdsp::Signal;
///
/// let ramp = Signal::new(|i| i as f64);
/// let louder = ramp.scale(2.0_f32);
/// assert_eq!(louder.output(3, 3), vec![6.0, 8.0, 10.0]);
/// ```
pub struct Signal<S> {
    compute: Rc<dyn Fn(usize) -> S>,
}

impl<S> Clone for Signal<S> {
    fn clone(&self) -> Self {
        Self {
            compute: Rc::clone(&self.compute),
        }
    }
}

impl<S> fmt::Debug for Signal<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal").finish_non_exhaustive()
    }
}

impl<S: Sample> Signal<S> {
    /// Creates a signal from a function of the sample index.
    pub fn new(compute: impl Fn(usize) -> S + 'static) -> Self {
        Self {
            compute: Rc::new(compute),
        }
    }

    /// Evaluates the signal at `index`.
    ///
    /// # Panics
    ///
    /// Panics if a filtered signal is re-entered while it is already being
    /// evaluated.
    pub fn at(&self, index: usize) -> S {
        (self.compute)(index)
    }

    /// The constant-zero signal.
    pub fn null() -> Self {
        Self::new(|_| S::zero())
    }

    /// A signal holding `value` at every index.
    pub fn constant(value: S) -> Self {
        Self::new(move |_| value)
    }

    /// Multiplies every sample by `amplitude`.
    ///
    /// The amplitude may use a different precision; it is converted to the
    /// signal's sample type first.
    pub fn scale<P: Sample>(&self, amplitude: P) -> Self {
        let source = self.clone();
        let amplitude: S = amplitude.cast();
        Self::new(move |i| source.at(i) * amplitude)
    }

    /// Sums this signal with `other`, sample by sample.
    pub fn mix(&self, other: &Signal<S>) -> Self {
        let a = self.clone();
        let b = other.clone();
        Self::new(move |i| a.at(i) + b.at(i))
    }

    /// Sums any number of signals. An empty set mixes to silence.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdsp::Signal;
    ///
    /// let silence = Signal::<f32>::mix_all(Vec::new());
    /// assert_eq!(silence.at(7), 0.0);
    ///
    /// let three = Signal::mix_all(vec![Signal::constant(1.0_f64); 3]);
    /// assert_eq!(three.at(0), 3.0);
    /// ```
    pub fn mix_all(signals: impl IntoIterator<Item = Signal<S>>) -> Self {
        let signals: Vec<Signal<S>> = signals.into_iter().collect();
        Self::new(move |i| signals.iter().fold(S::zero(), |acc, s| acc + s.at(i)))
    }

    /// Applies `func` to every sample.
    pub fn map(&self, func: impl Fn(S) -> S + 'static) -> Self {
        let source = self.clone();
        Self::new(move |i| func(source.at(i)))
    }

    /// Converts the signal to another sample precision.
    pub fn cast<T: Sample>(&self) -> Signal<T> {
        let source = self.clone();
        Signal::new(move |i| source.at(i).cast())
    }

    /// Reads `count` consecutive samples starting at `index`.
    ///
    /// # Arguments
    ///
    /// * `index` - First sample index to read
    /// * `count` - Number of samples to read
    ///
    /// # Panics
    ///
    /// Panics if `index + count` overflows `usize`.
    pub fn output(&self, index: usize, count: usize) -> Vec<S> {
        match index.checked_add(count) {
            Some(end) => self.output_range(index..end),
            None => panic!("sample range overflows: {index} + {count}"),
        }
    }

    /// Reads every sample in `range`, in order.
    ///
    /// An empty or reversed range reads nothing.
    pub fn output_range(&self, range: Range<usize>) -> Vec<S> {
        range.map(|i| self.at(i)).collect()
    }

    /// Fills `buffer` with the samples starting at `start`.
    pub fn fill(&self, start: usize, buffer: &mut [S]) {
        for (offset, sample) in buffer.iter_mut().enumerate() {
            *sample = self.at(start + offset);
        }
    }

    /// Runs this signal through `filter`.
    ///
    /// The returned signal owns the filter and its delay line. It must be read
    /// exactly once per index, in increasing order from 0: every read advances
    /// the delay line, whatever index was requested. Reads at an unexpected
    /// index are logged at `warn` level.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdsp::{Filter, Signal};
    ///
    /// // One-pole smoother: y[n] = x[n] + 0.5 y[n-1]
    /// let impulse = Signal::new(|i| if i == 0 { 1.0_f64 } else { 0.0 });
    /// let smoothed = impulse.filt(Filter::new(vec![1.0], vec![1.0, -0.5]));
    /// assert_eq!(smoothed.output(0, 3), vec![1.0, 0.5, 0.25]);
    /// ```
    pub fn filt<F: Sample>(&self, filter: Filter<F>) -> Self {
        let source = self.clone();
        let cursor = RefCell::new(FilterCursor { filter, next: 0 });
        Self::new(move |i| {
            let x: F = source.at(i).cast();
            let mut cursor = cursor.borrow_mut();
            if i != cursor.next {
                tracing::warn!(
                    index = i,
                    expected = cursor.next,
                    "filtered signal read out of order"
                );
            }
            cursor.next = i + 1;
            cursor.filter.advance(x).cast()
        })
    }

    /// Shapes this signal with a fresh 1/f (pink) filter.
    pub fn pink_filter(&self) -> Self {
        self.filt(Filter::<f64>::pink())
    }
}

/// A filter together with the index its owning signal expects next.
struct FilterCursor<F: Sample> {
    filter: Filter<F>,
    next: usize,
}

impl<S: Sample> Default for Signal<S> {
    fn default() -> Self {
        Self::null()
    }
}

impl<S: Sample> Sum for Signal<S> {
    fn sum<I: Iterator<Item = Signal<S>>>(iter: I) -> Self {
        Self::mix_all(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Signal<f64> {
        Signal::new(|i| i as f64)
    }

    #[test]
    fn test_null_is_silent() {
        let null = Signal::<f32>::null();
        assert_eq!(null.at(0), 0.0);
        assert_eq!(null.at(10_000), 0.0);
    }

    #[test]
    fn test_constant() {
        let c = Signal::constant(0.75_f32);
        assert_eq!(c.output(5, 3), vec![0.75; 3]);
    }

    #[test]
    fn test_scale_converts_precision() {
        let scaled = ramp().scale(0.5_f32);
        assert_eq!(scaled.output(0, 4), vec![0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_mix_two() {
        let mixed = ramp().mix(&Signal::constant(10.0));
        assert_eq!(mixed.output(0, 3), vec![10.0, 11.0, 12.0]);
    }

    #[test]
    fn test_mix_all_empty_is_null() {
        let mixed = Signal::<f64>::mix_all(Vec::new());
        for i in [0, 1, 99, 4096] {
            assert_eq!(mixed.at(i), Signal::<f64>::null().at(i));
        }
    }

    #[test]
    fn test_mix_all_identical_unit_signals() {
        for k in 1..6 {
            let units = vec![Signal::constant(1.0_f64); k];
            let mixed = Signal::mix_all(units);
            assert_eq!(mixed.at(42), k as f64);
        }
    }

    #[test]
    #[should_panic(expected = "sample range overflows")]
    fn test_output_overflowing_range_panics() {
        ramp().output(usize::MAX, 2);
    }

    #[test]
    fn test_output_up_to_last_index() {
        assert_eq!(ramp().output(usize::MAX - 1, 1), vec![(usize::MAX - 1) as f64]);
    }

    #[test]
    fn test_sum_trait() {
        let total: Signal<f64> = (1..=3).map(|k| Signal::constant(k as f64)).sum();
        assert_eq!(total.at(0), 6.0);
    }

    #[test]
    fn test_output_reads_count_samples_from_index() {
        assert_eq!(ramp().output(4, 3), vec![4.0, 5.0, 6.0]);
        assert!(ramp().output(4, 0).is_empty());
    }

    #[test]
    fn test_output_range_reproduces_reference_bound() {
        // The reference read `index..count`, so asking for 3 samples at 4 read nothing.
        let s = ramp();
        assert!(s.output_range(4..3).is_empty());
        assert_eq!(s.output_range(1..4), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_fill_matches_output() {
        let s = ramp();
        let mut buffer = [0.0; 5];
        s.fill(2, &mut buffer);
        assert_eq!(buffer.to_vec(), s.output(2, 5));
    }

    #[test]
    fn test_map_and_cast() {
        let squared = ramp().map(|x| x * x).cast::<f32>();
        assert_eq!(squared.output(0, 4), vec![0.0_f32, 1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_pure_signal_rereads_identically() {
        let s = ramp().scale(3.0_f64).mix(&Signal::constant(1.0));
        assert_eq!(s.at(7), s.at(7));
    }

    #[test]
    fn test_filtered_signal_advances_on_every_read() {
        // y[n] = x[n] + 0.5 y[n-1] over a constant input of 1
        let ones = Signal::constant(1.0_f64);
        let filtered = ones.filt(Filter::new(vec![1.0], vec![1.0, -0.5]));

        assert_eq!(filtered.at(0), 1.0);
        // Reading index 0 again does not replay it; the delay line moves on.
        assert_eq!(filtered.at(0), 1.5);
        assert_eq!(filtered.at(1), 1.75);
    }

    #[test]
    fn test_clones_share_filter_state() {
        let ones = Signal::constant(1.0_f64);
        let filtered = ones.filt(Filter::new(vec![1.0], vec![1.0, -0.5]));
        let twin = filtered.clone();

        assert_eq!(filtered.at(0), 1.0);
        assert_eq!(twin.at(1), 1.5);
    }

    #[test]
    fn test_separate_pink_filters_do_not_share_state() {
        let impulse = Signal::new(|i| if i == 0 { 1.0_f64 } else { 0.0 });
        let first = impulse.pink_filter();
        let second = impulse.pink_filter();

        let a = first.output(0, 8);
        let b = second.output(0, 8);
        assert_eq!(a, b);
    }

    #[test]
    fn test_debug_is_opaque() {
        assert_eq!(format!("{:?}", Signal::<f32>::null()), "Signal { .. }");
    }
}
