//! Noise generators for audio synthesis.
//!
//! White noise draws from a seedable random generator; pink noise shapes it
//! with [`Filter::pink`](crate::Filter::pink).

mod pink;
mod white;
