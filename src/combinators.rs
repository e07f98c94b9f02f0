//! Block combinators.
//!
//! Four operators build larger blocks out of smaller ones:
//!
//! - [`serial`]: feed one block's outputs into the next block's inputs
//! - [`parallel`]: stack two blocks side by side
//! - [`merge`]: fan in, summing groups of upstream outputs onto each input
//! - [`split`]: fan out, replicating upstream outputs cyclically
//!
//! Each has a `try_` form that reports an arity mismatch as an [`Error`], and
//! a method form on [`Block`]. None of them hold state.

use crate::{Block, Error, Result, Sample, Signal};

/// A block passing `n` signals through unchanged.
///
/// # Examples
///
/// ```
/// use blockdsp::{Signal, identity};
///
/// let wire = identity::<f64>(2);
/// let out = wire.process(&[Signal::constant(1.0), Signal::constant(2.0)]);
/// assert_eq!(out[1].at(0), 2.0);
/// ```
pub fn identity<S: Sample>(n: usize) -> Block<S> {
    Block::new(n, n, |inputs| inputs.to_vec())
}

/// Runs `lhs`, then feeds its outputs into `rhs`.
///
/// # Errors
///
/// Fails unless `lhs.output_count() == rhs.input_count()`.
pub fn try_serial<S: Sample>(lhs: Block<S>, rhs: Block<S>) -> Result<Block<S>> {
    if lhs.output_count() != rhs.input_count() {
        return Err(Error::SerialArity {
            outputs: lhs.output_count(),
            inputs: rhs.input_count(),
        });
    }
    tracing::debug!(
        inputs = lhs.input_count(),
        outputs = rhs.output_count(),
        "serial composition"
    );
    Ok(Block::new(
        lhs.input_count(),
        rhs.output_count(),
        move |inputs| rhs.process(&lhs.process(inputs)),
    ))
}

/// Runs `lhs`, then feeds its outputs into `rhs`.
///
/// # Panics
///
/// Panics unless `lhs.output_count() == rhs.input_count()`.
pub fn serial<S: Sample>(lhs: Block<S>, rhs: Block<S>) -> Block<S> {
    unwrap_composition(try_serial(lhs, rhs))
}

/// Stacks `lhs` and `rhs` side by side.
///
/// The first `lhs.input_count()` inputs go to `lhs`, the rest to `rhs`; the
/// outputs are `lhs`'s followed by `rhs`'s.
///
/// # Examples
///
/// ```
/// use blockdsp::{Block, Signal, parallel};
///
/// let stereo_gain = parallel(Block::<f64>::gain(2.0_f64), Block::gain(3.0_f64));
/// let out = stereo_gain.process(&[Signal::constant(1.0), Signal::constant(1.0)]);
/// assert_eq!(out[0].at(0), 2.0);
/// assert_eq!(out[1].at(0), 3.0);
/// ```
pub fn parallel<S: Sample>(lhs: Block<S>, rhs: Block<S>) -> Block<S> {
    let inputs = lhs.input_count() + rhs.input_count();
    let outputs = lhs.output_count() + rhs.output_count();
    tracing::debug!(inputs, outputs, "parallel composition");

    let split_at = lhs.input_count();
    Block::new(inputs, outputs, move |inputs| {
        let (left, right) = inputs.split_at(split_at);
        let mut outputs = lhs.process(left);
        outputs.extend(rhs.process(right));
        outputs
    })
}

/// Folds the outputs of `lhs` onto the inputs of `rhs` by summing.
///
/// With `n = rhs.input_count()` and `k = lhs.output_count() / n`, input `i` of
/// `rhs` receives the sum of outputs `i, i + n, ..., i + (k - 1) n` of `lhs`.
///
/// # Errors
///
/// Fails if `rhs` has no inputs, or if `lhs.output_count()` is not a whole
/// multiple of `rhs.input_count()`.
pub fn try_merge<S: Sample>(lhs: Block<S>, rhs: Block<S>) -> Result<Block<S>> {
    let n = rhs.input_count();
    if n == 0 || lhs.output_count() % n != 0 {
        return Err(Error::MergeArity {
            outputs: lhs.output_count(),
            inputs: n,
        });
    }
    let k = lhs.output_count() / n;
    tracing::debug!(lanes = n, fold = k, "merge composition");

    Ok(Block::new(
        lhs.input_count(),
        rhs.output_count(),
        move |inputs| {
            let left = lhs.process(inputs);
            let summed: Vec<Signal<S>> = (0..n)
                .map(|i| Signal::mix_all((0..k).map(|j| left[i + n * j].clone())))
                .collect();
            rhs.process(&summed)
        },
    ))
}

/// Folds the outputs of `lhs` onto the inputs of `rhs` by summing.
///
/// # Panics
///
/// Panics under the same conditions [`try_merge`] fails.
pub fn merge<S: Sample>(lhs: Block<S>, rhs: Block<S>) -> Block<S> {
    unwrap_composition(try_merge(lhs, rhs))
}

/// Replicates the outputs of `lhs` cyclically across the inputs of `rhs`.
///
/// Input `i` of `rhs` receives output `i % lhs.output_count()` of `lhs`. The
/// input count of `rhs` need not be a multiple of the output count of `lhs`.
///
/// Replicated lanes share the same signal. A stateful upstream signal fanned
/// out this way is read once per lane per index, which breaks its
/// once-per-index contract.
///
/// # Errors
///
/// Fails if `lhs` has no outputs but `rhs` has inputs.
pub fn try_split<S: Sample>(lhs: Block<S>, rhs: Block<S>) -> Result<Block<S>> {
    let k = lhs.output_count();
    if k == 0 && rhs.input_count() > 0 {
        return Err(Error::SplitArity {
            inputs: rhs.input_count(),
        });
    }
    tracing::debug!(
        sources = k,
        lanes = rhs.input_count(),
        "split composition"
    );

    Ok(Block::new(
        lhs.input_count(),
        rhs.output_count(),
        move |inputs| {
            let left = lhs.process(inputs);
            let replicated: Vec<Signal<S>> = (0..rhs.input_count())
                .map(|i| left[i % k].clone())
                .collect();
            rhs.process(&replicated)
        },
    ))
}

/// Replicates the outputs of `lhs` cyclically across the inputs of `rhs`.
///
/// # Panics
///
/// Panics under the same conditions [`try_split`] fails.
pub fn split<S: Sample>(lhs: Block<S>, rhs: Block<S>) -> Block<S> {
    unwrap_composition(try_split(lhs, rhs))
}

fn unwrap_composition<S>(result: Result<Block<S>>) -> Block<S> {
    match result {
        Ok(block) => block,
        Err(e) => panic!("{e}"),
    }
}

/// Method forms of the combinators, for left-to-right chaining.
///
/// # Examples
///
/// ```
/// use blockdsp::{Block, identity};
///
/// let chain = Block::<f32>::sine(44100, 440.0_f32)
///     .split(identity(2))
///     .serial(Block::gain(0.5_f32).parallel(Block::gain(0.25_f32)));
/// assert_eq!((chain.input_count(), chain.output_count()), (0, 2));
/// ```
impl<S: Sample> Block<S> {
    /// See [`serial`].
    pub fn serial(self, rhs: Block<S>) -> Block<S> {
        serial(self, rhs)
    }

    /// See [`parallel`].
    pub fn parallel(self, rhs: Block<S>) -> Block<S> {
        parallel(self, rhs)
    }

    /// See [`merge`].
    pub fn merge(self, rhs: Block<S>) -> Block<S> {
        merge(self, rhs)
    }

    /// See [`split`].
    pub fn split(self, rhs: Block<S>) -> Block<S> {
        split(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constants(values: &[f64]) -> Vec<Signal<f64>> {
        values.iter().map(|&v| Signal::constant(v)).collect()
    }

    fn first_samples(signals: &[Signal<f64>]) -> Vec<f64> {
        signals.iter().map(|s| s.at(0)).collect()
    }

    /// Zero-input block emitting the given constants.
    fn emit(values: &[f64]) -> Block<f64> {
        let values = values.to_vec();
        Block::new(0, values.len(), move |_| constants(&values))
    }

    #[test]
    fn test_identity() {
        for n in 0..5 {
            let inputs = constants(&(0..n).map(|v| v as f64).collect::<Vec<_>>());
            let out = identity(n).process(&inputs);
            assert_eq!(first_samples(&out), first_samples(&inputs));
        }
    }

    #[test]
    fn test_serial_arity_and_routing() {
        let sum = Block::new(2, 1, |inputs: &[Signal<f64>]| {
            vec![inputs[0].mix(&inputs[1])]
        });
        let block = serial(identity(2), sum);
        assert_eq!((block.input_count(), block.output_count()), (2, 1));

        let out = block.process(&constants(&[1.0, 2.0]));
        assert_eq!(first_samples(&out), vec![3.0]);
    }

    #[test]
    fn test_serial_rejects_mismatch() {
        let err = try_serial(identity::<f64>(2), identity(3)).unwrap_err();
        assert_eq!(err, Error::SerialArity { outputs: 2, inputs: 3 });
    }

    #[test]
    #[should_panic(expected = "serial composition")]
    fn test_serial_panics_on_mismatch() {
        let _ = serial(identity::<f64>(1), identity(2));
    }

    #[test]
    fn test_parallel_partitions_inputs() {
        let a = Block::new(1, 1, |inputs: &[Signal<f64>]| vec![inputs[0].scale(10.0_f64)]);
        let b = Block::new(2, 1, |inputs: &[Signal<f64>]| vec![inputs[0].mix(&inputs[1])]);
        let block = parallel(a, b);
        assert_eq!((block.input_count(), block.output_count()), (3, 2));

        let out = block.process(&constants(&[1.0, 2.0, 3.0]));
        assert_eq!(first_samples(&out), vec![10.0, 5.0]);
    }

    #[test]
    fn test_parallel_with_zero_input_sides() {
        let block = parallel(emit(&[1.0]), emit(&[2.0, 3.0]));
        assert_eq!(block.input_count(), 0);
        assert_eq!(first_samples(&block.process(&[])), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_merge_sums_strided_groups() {
        let block = merge(emit(&[1.0, 10.0, 100.0, 1000.0]), identity(2));
        assert_eq!((block.input_count(), block.output_count()), (0, 2));

        let out = block.process(&[]);
        assert_eq!(first_samples(&out), vec![101.0, 1010.0]);
    }

    #[test]
    fn test_merge_with_matching_counts_is_serial() {
        let out = merge(emit(&[4.0, 5.0]), identity(2)).process(&[]);
        assert_eq!(first_samples(&out), vec![4.0, 5.0]);
    }

    #[test]
    fn test_merge_to_mono() {
        let out = merge(emit(&[1.0, 2.0, 3.0]), identity(1)).process(&[]);
        assert_eq!(first_samples(&out), vec![6.0]);
    }

    #[test]
    fn test_merge_rejects_remainder() {
        let err = try_merge(emit(&[1.0, 2.0, 3.0]), identity(2)).unwrap_err();
        assert_eq!(err, Error::MergeArity { outputs: 3, inputs: 2 });
    }

    #[test]
    fn test_merge_rejects_zero_input_target() {
        let err = try_merge(emit(&[1.0]), emit(&[2.0])).unwrap_err();
        assert_eq!(err, Error::MergeArity { outputs: 1, inputs: 0 });
    }

    #[test]
    #[should_panic(expected = "merge")]
    fn test_merge_panics_on_remainder() {
        let _ = merge(emit(&[1.0, 2.0, 3.0, 4.0, 5.0]), identity(2));
    }

    #[test]
    fn test_split_replicates_single_output() {
        let block = split(emit(&[7.0]), identity(3));
        assert_eq!((block.input_count(), block.output_count()), (0, 3));
        assert_eq!(first_samples(&block.process(&[])), vec![7.0, 7.0, 7.0]);
    }

    #[test]
    fn test_split_cycles_without_multiple() {
        let out = split(emit(&[1.0, 2.0]), identity(5)).process(&[]);
        assert_eq!(first_samples(&out), vec![1.0, 2.0, 1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_split_drops_surplus_outputs() {
        let out = split(emit(&[1.0, 2.0, 3.0]), identity(2)).process(&[]);
        assert_eq!(first_samples(&out), vec![1.0, 2.0]);
    }

    #[test]
    fn test_split_rejects_empty_source() {
        let err = try_split(identity::<f64>(0), identity(2)).unwrap_err();
        assert_eq!(err, Error::SplitArity { inputs: 2 });
        assert!(try_split(identity::<f64>(0), identity(0)).is_ok());
    }

    #[test]
    fn test_combinators_leave_operands_usable() {
        let gain = Block::<f64>::gain(2.0_f64);
        let twice = serial(gain.clone(), gain.clone());
        let out = twice.process(&constants(&[1.5]));
        assert_eq!(first_samples(&out), vec![6.0]);
        assert_eq!(gain.process(&constants(&[1.0]))[0].at(0), 2.0);
    }

    #[test]
    fn test_method_chaining() {
        let block = emit(&[1.0, 2.0])
            .parallel(emit(&[3.0, 4.0]))
            .merge(identity(2))
            .serial(Block::new(2, 1, |inputs: &[Signal<f64>]| {
                vec![inputs[0].mix(&inputs[1])]
            }));
        assert_eq!(first_samples(&block.process(&[])), vec![10.0]);
    }
}
