//! Item catalog: rarity tiers, base odds, and obtainable items.

pub mod data;
pub mod types;

pub use data::*;
pub use types::*;
