//! Owned items, powerup stacks, and equip slots.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
