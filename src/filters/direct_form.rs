//! General linear recursive filter.
//!
//! Implements the difference equation
//!
//! ```text
//! a[0] y[n] = b[0] x[n] + b[1] x[n-1] + ... - a[1] y[n-1] - a[2] y[n-2] - ...
//! ```
//!
//! in transposed direct form: a single delay line `w` of length
//! `max(len(a), len(b)) - 1` holds the partial sums carried to the next
//! sample.

use crate::core::sample::zeros;
use crate::{Error, Result, Sample};

/// How a filter's difference equation is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Feedback coefficients present (IIR).
    Recursive,
    /// Feed-forward only, with a delay line (FIR).
    Transversal,
    /// A single feed-forward tap and no delay line.
    Gain,
}

/// A linear filter with its own delay line.
///
/// A `Filter` is an owned value: coefficients plus state. Each call to
/// [`advance`](Filter::advance) consumes one input sample and produces one
/// output sample, mutating the delay line. Cloning a filter copies its
/// current state.
///
/// # Examples
///
/// ```
/// use blockdsp::Filter;
///
/// // Two-tap moving average
/// let mut avg = Filter::new(vec![0.5_f64, 0.5], vec![1.0]);
/// assert_eq!(avg.advance(1.0), 0.5);
/// assert_eq!(avg.advance(1.0), 1.0);
/// assert_eq!(avg.advance(0.0), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Filter<F: Sample> {
    b: Vec<F>,
    a: Vec<F>,
    topology: Topology,
    delay: Option<Box<[F]>>,
}

impl<F: Sample> Filter<F> {
    /// Builds a filter from feed-forward `b` and feedback `a` coefficients.
    ///
    /// The shorter array is zero-padded to the length of the longer one. When
    /// `a[0]` is not 1, `b` (and `a`, for a recursive filter) is divided by it.
    /// A filter with at most one feedback coefficient is evaluated as FIR.
    ///
    /// # Arguments
    ///
    /// * `b` - Feed-forward (numerator) coefficients
    /// * `a` - Feedback (denominator) coefficients, `a[0]` first
    ///
    /// # Errors
    ///
    /// Fails if both arrays are empty, if `a[0]` is zero (or `a` is empty),
    /// or if any coefficient is not finite.
    pub fn try_new(b: Vec<F>, a: Vec<F>) -> Result<Self> {
        let (m, n) = (b.len(), a.len());
        let mn = m.max(n);
        if mn == 0 {
            return Err(Error::EmptyCoefficients);
        }
        if let Some(position) = b.iter().chain(a.iter()).position(|c| !c.is_finite()) {
            return Err(Error::NonFiniteCoefficient { position });
        }

        let mut b = b;
        let mut a = a;
        b.extend(zeros::<F>(mn - m));
        a.extend(zeros::<F>(mn - n));

        let norm = a[0];
        if norm == F::zero() {
            return Err(Error::ZeroLeadingCoefficient);
        }
        let normalize = (norm - F::one()).abs() > F::epsilon();
        if normalize {
            F::scale_slice(&mut b, norm.recip());
        }

        let topology = if n > 1 {
            if normalize {
                F::scale_slice(&mut a, norm.recip());
            }
            Topology::Recursive
        } else if mn > 1 {
            Topology::Transversal
        } else {
            Topology::Gain
        };

        tracing::debug!(
            taps = mn,
            ?topology,
            normalized = normalize,
            "built filter"
        );

        Ok(Self {
            b,
            a,
            topology,
            delay: None,
        })
    }

    /// Builds a filter, panicking on invalid coefficients.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions [`try_new`](Filter::try_new) fails.
    pub fn new(b: Vec<F>, a: Vec<F>) -> Self {
        match Self::try_new(b, a) {
            Ok(filter) => filter,
            Err(e) => panic!("invalid filter: {e}"),
        }
    }

    /// Feed-forward coefficients after padding and normalization.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Feedback coefficients after padding (and normalization, if recursive).
    pub fn a(&self) -> &[F] {
        &self.a
    }

    /// How the filter is evaluated.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Length of the delay line.
    pub fn delay_len(&self) -> usize {
        self.b.len() - 1
    }

    /// Current delay line contents, if any sample has been processed.
    pub fn state(&self) -> Option<&[F]> {
        self.delay.as_deref()
    }

    /// Clears the delay line; the next sample starts from silence.
    pub fn reset(&mut self) {
        if let Some(w) = self.delay.as_deref_mut() {
            w.fill(F::zero());
        }
    }

    /// Filters one sample.
    pub fn advance(&mut self, x: F) -> F {
        let (b, a) = (&self.b, &self.a);
        let lw = b.len() - 1;
        let recursive = match self.topology {
            Topology::Gain => return x * b[0],
            Topology::Recursive => true,
            Topology::Transversal => false,
        };

        // Allocated once, on the first sample; never resized afterwards.
        let w = self
            .delay
            .get_or_insert_with(|| zeros::<F>(lw).into_boxed_slice());

        let y = w[0] + b[0] * x;
        if recursive {
            for j in 0..lw - 1 {
                w[j] = w[j + 1] + b[j + 1] * x - a[j + 1] * y;
            }
            w[lw - 1] = b[lw] * x - a[lw] * y;
        } else {
            for j in 0..lw - 1 {
                w[j] = w[j + 1] + b[j + 1] * x;
            }
            w[lw - 1] = b[lw] * x;
        }
        y
    }

    /// Filters a buffer in place.
    pub fn process(&mut self, buffer: &mut [F]) {
        for sample in buffer.iter_mut() {
            *sample = self.advance(*sample);
        }
    }
}
