//! Simulation configuration.

use crate::core::constants::{SINGLE_PULL, TEN_PULL};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent simulated players
    pub num_players: u32,

    /// Draws per player (rounded up to whole batches)
    pub pulls_per_player: u32,

    /// Banner to pull on
    pub banner_id: String,

    /// Pull in batches of ten instead of singles
    pub ten_pulls: bool,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Unix time to pull at (None = the banner's start)
    pub now: Option<i64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per player)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_players: 1000,
            pulls_per_player: 200,
            banner_id: "standard".to_string(),
            ten_pulls: true,
            seed: None,
            now: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking a banner's odds
    pub fn quick(banner_id: &str) -> Self {
        Self {
            num_players: 100,
            pulls_per_player: 100,
            banner_id: banner_id.to_string(),
            ..Default::default()
        }
    }

    /// Long single-pull runs that exercise every pity branch
    pub fn pity_audit(banner_id: &str) -> Self {
        Self {
            num_players: 200,
            pulls_per_player: 1_000,
            banner_id: banner_id.to_string(),
            ten_pulls: false,
            ..Default::default()
        }
    }

    pub fn batch_size(&self) -> u32 {
        if self.ten_pulls {
            TEN_PULL
        } else {
            SINGLE_PULL
        }
    }

    pub fn batches_per_player(&self) -> u32 {
        self.pulls_per_player.div_ceil(self.batch_size())
    }
}
