//! Gacha - banner pull engine library
//!
//! Rarity rolls with soft/hard/mythic pity, rate-up banners, ten-pull
//! guarantees, an owned-item inventory and a bounded pull history.

pub mod banner;
pub mod catalog;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod history;
pub mod inventory;
pub mod pity;
pub mod player;
pub mod pull;
pub mod rates;
pub mod selection;
pub mod session;
pub mod simulator;
pub mod wallet;

pub use config::GachaConfig;
pub use engine::GachaEngine;
pub use error::{GachaError, Result, SaveError};
