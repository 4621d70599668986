//! Pull execution: draws, pity updates, batch guarantee, and records.

pub mod executor;
pub mod types;

pub use executor::*;
pub use types::*;
