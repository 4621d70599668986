//! Rarity odds for the next draw on a banner.
//!
//! `calculate_rates` is a pure function of the rarity table, pity tuning,
//! banner and current pity counters. It never mutates anything; the pull
//! executor decides what to do with the result.

use crate::banner::Banner;
use crate::catalog::{Rarity, RarityTable};
use crate::core::constants::{RATE_UP_COMMON_SHARE, RATE_UP_RARE_SHARE};
use crate::pity::{PityConfig, PityState};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which forced floor fired, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForcedPity {
    Hard,
    Mythic,
}

/// Probability per rarity tier. Always non-negative and sums to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RarityDistribution {
    probabilities: [f64; 5],
}

impl RarityDistribution {
    /// Distribution with all weight on one tier.
    pub fn certain(rarity: Rarity) -> Self {
        let mut probabilities = [0.0; 5];
        probabilities[rarity.index()] = 1.0;
        Self { probabilities }
    }

    pub fn get(&self, rarity: Rarity) -> f64 {
        self.probabilities[rarity.index()]
    }

    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rarity, f64)> + '_ {
        Rarity::ALL.iter().map(|r| (*r, self.get(*r)))
    }

    /// Map a uniform roll in [0, 1) onto a tier, walking tiers in ascending
    /// order. Zero-probability tiers are never returned.
    pub fn rarity_for_roll(&self, roll: f64) -> Rarity {
        let mut cumulative = 0.0;
        let mut last = Rarity::Common;
        for (rarity, p) in self.iter() {
            if p <= 0.0 {
                continue;
            }
            cumulative += p;
            last = rarity;
            if roll < cumulative {
                return rarity;
            }
        }
        // Float drift can leave cumulative a hair under 1.0
        last
    }

    pub fn roll<R: Rng>(&self, rng: &mut R) -> Rarity {
        self.rarity_for_roll(rng.gen::<f64>())
    }
}

/// Odds for one draw plus whether a forced pity floor produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateOutcome {
    pub distribution: RarityDistribution,
    pub forced: Option<ForcedPity>,
}

impl RateOutcome {
    pub fn pity_triggered(&self) -> bool {
        self.forced.is_some()
    }
}

pub fn calculate_rates(
    table: &RarityTable,
    pity: &PityConfig,
    banner: &Banner,
    state: PityState,
) -> RateOutcome {
    let mut p = table.as_array();
    let common = Rarity::Common.index();
    let rare = Rarity::Rare.index();
    let legendary = Rarity::Legendary.index();
    let mythic = Rarity::Mythic.index();

    if banner.has_rate_up() {
        let boosted_legendary = p[legendary] * banner.rate_up_multiplier;
        let boosted_mythic = p[mythic] * banner.rate_up_multiplier;
        let excess = (boosted_legendary - p[legendary]) + (boosted_mythic - p[mythic]);
        p[legendary] = boosted_legendary;
        p[mythic] = boosted_mythic;
        p[common] = (p[common] - excess * RATE_UP_COMMON_SHARE).max(0.0);
        p[rare] = (p[rare] - excess * RATE_UP_RARE_SHARE).max(0.0);
    }

    let pulls = state.pulls_since_last_high_tier;

    if pulls >= pity.soft_pity_start {
        let bonus = (pulls - pity.soft_pity_start) as f64 * pity.soft_pity_rate_increase;
        p[legendary] += bonus;
        p[common] = (p[common] - bonus).max(0.0);
    }

    // Mythic wins when both floors are reached
    let next_pull = pulls.saturating_add(1);
    let forced = if next_pull >= pity.mythic_pity_limit {
        Some(ForcedPity::Mythic)
    } else if next_pull >= pity.hard_pity_limit {
        Some(ForcedPity::Hard)
    } else {
        None
    };

    let distribution = match forced {
        Some(ForcedPity::Mythic) => RarityDistribution::certain(Rarity::Mythic),
        Some(ForcedPity::Hard) => RarityDistribution::certain(Rarity::Legendary),
        None => {
            let total: f64 = p.iter().sum();
            for prob in p.iter_mut() {
                *prob /= total;
            }
            RarityDistribution { probabilities: p }
        }
    };

    RateOutcome {
        distribution,
        forced,
    }
}
