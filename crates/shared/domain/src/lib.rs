//! # Domain Models
//!
//! Pure classroom data types with minimal dependencies (`serde`, `fxhash`).
//! Keep it lean: no I/O or randomness here, just rosters, assignments and configuration.

pub mod assignment;
pub mod config;
pub mod roster;
