//! Core signal types.
//!
//! This module provides the fundamental abstractions used throughout the
//! library:
//! - `Sample` trait for the numeric type signals compute with
//! - `Signal` for lazily evaluated, index-addressed sample sources

pub(crate) mod sample;
mod signal;

pub use sample::Sample;
pub use signal::Signal;
