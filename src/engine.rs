//! Caller-facing entry point.

use crate::banner::Banner;
use crate::config::GachaConfig;
use crate::error::Result;
use crate::player::PlayerState;
use crate::pity::PityStatus;
use crate::pull::{execute_pull, PullRecord};
use crate::rates::{calculate_rates, RarityDistribution};
use chrono::Utc;
use rand::Rng;

/// Validated configuration plus the three operations a caller needs.
#[derive(Debug, Clone)]
pub struct GachaEngine {
    config: GachaConfig,
}

impl GachaEngine {
    /// Fails with a configuration error unless every tier and every
    /// guaranteed rarity has at least one item.
    pub fn new(config: GachaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GachaConfig {
        &self.config
    }

    pub fn pull<R: Rng>(
        &self,
        player: &mut PlayerState,
        banner_id: &str,
        count: u32,
        rng: &mut R,
    ) -> Result<Vec<PullRecord>> {
        self.pull_at(player, banner_id, count, Utc::now().timestamp(), rng)
    }

    pub fn pull_at<R: Rng>(
        &self,
        player: &mut PlayerState,
        banner_id: &str,
        count: u32,
        now: i64,
        rng: &mut R,
    ) -> Result<Vec<PullRecord>> {
        execute_pull(&self.config, player, banner_id, count, now, rng)
    }

    /// Odds for the player's next draw, for an information display.
    pub fn get_rates(&self, player: &PlayerState, banner_id: &str) -> Result<RarityDistribution> {
        let banner = self.config.banners.get(banner_id)?;
        let outcome = calculate_rates(
            &self.config.rarity_table,
            &self.config.pity,
            banner,
            player.pity.get(banner_id),
        );
        Ok(outcome.distribution)
    }

    pub fn get_pity_status(&self, player: &PlayerState, banner_id: &str) -> Result<PityStatus> {
        self.config.banners.get(banner_id)?;
        Ok(PityStatus::from_state(
            player.pity.get(banner_id),
            &self.config.pity,
        ))
    }

    pub fn active_banners(&self, now: i64) -> Vec<&Banner> {
        self.config.banners.active_at(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rarity;
    use crate::error::GachaError;
    use crate::pity::PityState;

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = GachaConfig::builtin();
        config.pity.hard_pity_limit = 10;
        assert!(matches!(
            GachaEngine::new(config),
            Err(GachaError::Configuration(_))
        ));
    }

    #[test]
    fn test_get_rates_reflects_rate_up() {
        let engine = GachaEngine::new(GachaConfig::builtin()).unwrap();
        let player = PlayerState::new();
        let standard = engine.get_rates(&player, "standard").unwrap();
        let storm = engine.get_rates(&player, "storm_knight").unwrap();
        assert!(storm.get(Rarity::Legendary) > standard.get(Rarity::Legendary));
    }

    #[test]
    fn test_get_rates_unknown_banner() {
        let engine = GachaEngine::new(GachaConfig::builtin()).unwrap();
        assert_eq!(
            engine.get_rates(&PlayerState::new(), "nope"),
            Err(GachaError::UnknownBanner("nope".to_string()))
        );
    }

    #[test]
    fn test_pity_status_reads_player_state() {
        let engine = GachaEngine::new(GachaConfig::builtin()).unwrap();
        let mut player = PlayerState::new();
        player.pity.set(
            "standard",
            PityState {
                pulls_since_last_high_tier: 12,
                lifetime_pulls: 80,
            },
        );
        let status = engine.get_pity_status(&player, "standard").unwrap();
        assert_eq!(status.pulls_since_last_high_tier, 12);
        assert_eq!(status.pulls_until_soft_pity, 28);
        assert_eq!(status.pulls_until_hard_pity, 38);

        let fresh = engine.get_pity_status(&player, "storm_knight").unwrap();
        assert_eq!(fresh.pulls_since_last_high_tier, 0);
    }
}
