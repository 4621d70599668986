//! Per-player state and its persistence.

pub mod persistence;
pub mod state;

pub use persistence::*;
pub use state::*;
