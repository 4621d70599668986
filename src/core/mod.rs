//! Engine-wide tuning constants.

pub mod constants;

pub use constants::*;
