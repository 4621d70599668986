//! Pity counters and thresholds.
//!
//! The counters only count; every threshold effect (soft ramp, hard and
//! mythic floors) is applied by the rate calculator.

pub mod types;

pub use types::*;
