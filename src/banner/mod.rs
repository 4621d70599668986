//! Banner configurations and the registry that holds them.

pub mod data;
pub mod types;

pub use data::*;
pub use types::*;
