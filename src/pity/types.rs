use crate::catalog::Rarity;
use crate::core::constants::{
    HARD_PITY_LIMIT, MYTHIC_PITY_LIMIT, SOFT_PITY_RATE_INCREASE, SOFT_PITY_START,
};
use crate::error::{GachaError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pity thresholds shared by every banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PityConfig {
    pub soft_pity_start: u32,
    pub soft_pity_rate_increase: f64,
    pub hard_pity_limit: u32,
    pub mythic_pity_limit: u32,
}

impl Default for PityConfig {
    fn default() -> Self {
        Self {
            soft_pity_start: SOFT_PITY_START,
            soft_pity_rate_increase: SOFT_PITY_RATE_INCREASE,
            hard_pity_limit: HARD_PITY_LIMIT,
            mythic_pity_limit: MYTHIC_PITY_LIMIT,
        }
    }
}

impl PityConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.soft_pity_rate_increase.is_finite() || self.soft_pity_rate_increase < 0.0 {
            return Err(GachaError::configuration(format!(
                "soft pity rate increase must be >= 0, got {}",
                self.soft_pity_rate_increase
            )));
        }
        if self.hard_pity_limit == 0 {
            return Err(GachaError::configuration("hard pity limit must be >= 1"));
        }
        if self.soft_pity_start >= self.hard_pity_limit {
            return Err(GachaError::configuration(format!(
                "soft pity start ({}) must be below hard pity limit ({})",
                self.soft_pity_start, self.hard_pity_limit
            )));
        }
        if self.mythic_pity_limit <= self.hard_pity_limit {
            return Err(GachaError::configuration(format!(
                "mythic pity limit ({}) must exceed hard pity limit ({})",
                self.mythic_pity_limit, self.hard_pity_limit
            )));
        }
        Ok(())
    }
}

/// Per-(player, banner) pity counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PityState {
    pub pulls_since_last_high_tier: u32,
    pub lifetime_pulls: u64,
}

impl PityState {
    /// Advance the counters after one draw of `rarity`.
    pub fn record_draw(&mut self, rarity: Rarity) {
        if rarity.is_high_tier() {
            self.pulls_since_last_high_tier = 0;
        } else {
            self.pulls_since_last_high_tier = self.pulls_since_last_high_tier.saturating_add(1);
        }
        self.lifetime_pulls += 1;
    }
}

/// Keyed pity storage. Holds no rules of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PityTracker {
    states: HashMap<String, PityState>,
}

impl PityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored state, or zeroed counters for a banner never pulled on.
    pub fn get(&self, banner_id: &str) -> PityState {
        self.states.get(banner_id).copied().unwrap_or_default()
    }

    pub fn set(&mut self, banner_id: &str, state: PityState) {
        self.states.insert(banner_id.to_string(), state);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Countdown shown next to a banner's odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PityStatus {
    pub pulls_since_last_high_tier: u32,
    pub pulls_until_soft_pity: u32,
    pub pulls_until_hard_pity: u32,
}

impl PityStatus {
    pub fn from_state(state: PityState, config: &PityConfig) -> Self {
        let pulls = state.pulls_since_last_high_tier;
        Self {
            pulls_since_last_high_tier: pulls,
            pulls_until_soft_pity: config.soft_pity_start.saturating_sub(pulls),
            pulls_until_hard_pity: config.hard_pity_limit.saturating_sub(pulls),
        }
    }
}
