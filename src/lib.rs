//! blockdsp - A compositional signal-processing algebra for Rust
//!
//! Signals are lazily evaluated sample sources addressed by index. Blocks
//! transform a fixed number of input signals into a fixed number of output
//! signals, and four combinators (serial, parallel, merge, split) compose
//! blocks into multi-channel graphs. A general recursive filter engine
//! provides the only stateful signals, including a pink noise shaper.

// Lets `blocks!` expansions resolve inside this crate's own tests.
extern crate self as blockdsp;

mod block;
pub mod combinators;
mod core;
mod error;
pub mod filters;
pub mod noise;
pub mod oscillators;
mod render;

// Re-export commonly used types at the crate root
pub use block::Block;
pub use combinators::{
    identity, merge, parallel, serial, split, try_merge, try_serial, try_split,
};
pub use self::core::{Sample, Signal};
pub use error::{Error, Result};
pub use filters::{Filter, FilterType, Topology};
pub use render::Renderer;

#[cfg(feature = "macros")]
pub use blockdsp_macros::blocks;
