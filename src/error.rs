//! Error types for the pull engine and its collaborators.

use crate::catalog::{ItemCategory, Rarity};
use thiserror::Error;

/// Errors raised by the engine and the calling layer around it.
///
/// All variants are local and caller-recoverable. Nothing here is retried
/// internally since no pull path performs I/O.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GachaError {
    /// Invalid catalog, banner, rarity table or pity setup
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unknown banner: {0}")]
    UnknownBanner(String),

    /// Pull requested outside the banner's [start, end) window
    #[error("Banner {banner_id} is not active at {now}")]
    InactiveBanner { banner_id: String, now: i64 },

    #[error("Invalid batch size {0}: pulls must be 1 or 10")]
    InvalidBatchSize(u32),

    #[error("Insufficient currency: need {required}, have {available}")]
    InsufficientCurrency { required: u64, available: u64 },

    #[error("Item {0} is not owned")]
    NotOwned(String),

    #[error("Item {item_id} is a {actual:?} and cannot go in the {expected:?} slot")]
    WrongCategory {
        item_id: String,
        expected: ItemCategory,
        actual: ItemCategory,
    },

    #[error("Unknown item: {0}")]
    UnknownItem(String),
}

impl GachaError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Error for a rarity tier that has no catalog items to draw from.
    pub fn empty_tier(rarity: Rarity) -> Self {
        Self::Configuration(format!("no catalog items of rarity {}", rarity.name()))
    }
}

/// Errors from loading or saving player state.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Save file checksum mismatch")]
    ChecksumMismatch,

    #[error("Unsupported save version: {0:#x}")]
    UnsupportedVersion(u64),

    #[error("Invalid player state: {0}")]
    InvalidState(String),
}

impl From<bincode::Error> for SaveError {
    fn from(e: bincode::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GachaError>;
