//! Periodic signal generators.
//!
//! Generators are zero-input leaves: associated functions on `Signal` that
//! compute each sample from its index.

mod sine;
