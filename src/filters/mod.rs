//! Linear filters.
//!
//! This module contains the general direct-form filter engine, the fixed pink
//! noise shaping filter and biquad coefficient designs that run on it.

mod biquad;
mod direct_form;
mod pink;

pub use biquad::FilterType;
pub use direct_form::{Filter, Topology};
pub use pink::{PINK_A, PINK_B};
