//! Error type for filter construction and block composition.
//!
//! Every failure in this crate is a configuration error detected when a
//! filter or block is built. The `try_` constructors return these errors; the
//! plain constructors panic with the same message.

/// Errors raised while building filters or composing blocks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Both coefficient arrays were empty.
    #[error("filter needs at least one coefficient")]
    EmptyCoefficients,

    /// The leading feedback coefficient `a[0]` was zero, so the filter cannot
    /// be normalized.
    #[error("first feedback coefficient must be nonzero")]
    ZeroLeadingCoefficient,

    /// A coefficient was NaN or infinite.
    #[error("filter coefficient at {position} is not finite")]
    NonFiniteCoefficient {
        /// Index into the concatenation of `b` then `a`.
        position: usize,
    },

    /// Serial composition of blocks whose arities do not line up.
    #[error("serial composition: upstream yields {outputs} outputs, downstream expects {inputs}")]
    SerialArity {
        /// Output count of the upstream block.
        outputs: usize,
        /// Input count of the downstream block.
        inputs: usize,
    },

    /// Merge where the upstream output count is not a whole multiple of the
    /// downstream input count.
    #[error("merge: {outputs} upstream outputs cannot be folded onto {inputs} downstream inputs")]
    MergeArity {
        /// Output count of the upstream block.
        outputs: usize,
        /// Input count of the downstream block.
        inputs: usize,
    },

    /// Split from a block with no outputs into a block that needs inputs.
    #[error("split: no upstream outputs to replicate onto {inputs} downstream inputs")]
    SplitArity {
        /// Input count of the downstream block.
        inputs: usize,
    },

    /// A block was driven with the wrong number of input signals.
    #[error("block expects {expected} input signals, got {found}")]
    InputCount {
        /// Declared input count.
        expected: usize,
        /// Number of signals supplied.
        found: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
