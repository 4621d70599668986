//! Main simulation runner.
//!
//! Every simulated player goes through the real `GachaEngine`, so the
//! observed rates reflect the same rate calculation, selection, pity and
//! batch guarantee logic that live pulls use.

use super::config::SimConfig;
use super::report::{PlayerStats, SimReport};
use crate::engine::GachaEngine;
use crate::error::Result;
use crate::player::PlayerState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Run the full simulation and return a report.
pub fn run_simulation(engine: &GachaEngine, config: &SimConfig) -> Result<SimReport> {
    let banner = engine.config().banners.get(&config.banner_id)?;
    let now = config.now.unwrap_or(banner.start);
    let expected = engine.get_rates(&PlayerState::new(), &config.banner_id)?;

    let mut all_players = Vec::with_capacity(config.num_players as usize);

    for player_idx in 0..config.num_players {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(player_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_player(engine, config, now, &mut rng)?;

        if config.verbosity >= 2 {
            println!(
                "Player {}/{} - {} pulls, {} high tier, {} pity triggers, longest drought {}",
                player_idx + 1,
                config.num_players,
                stats.total_pulls,
                stats.high_tier_pulls(),
                stats.pity_triggers,
                stats.longest_drought
            );
        }
        all_players.push(stats);
    }

    let report = SimReport::from_players(&config.banner_id, expected, banner.guaranteed_rarity, all_players);
    info!(
        banner_id = %config.banner_id,
        players = report.num_players,
        pulls = report.total_pulls,
        "simulation finished"
    );
    Ok(report)
}

fn simulate_player(
    engine: &GachaEngine,
    config: &SimConfig,
    now: i64,
    rng: &mut ChaCha8Rng,
) -> Result<PlayerStats> {
    let banner = engine.config().banners.get(&config.banner_id)?;
    let mut player = PlayerState::new();
    let mut stats = PlayerStats::default();

    for _ in 0..config.batches_per_player() {
        let records = engine.pull_at(&mut player, &config.banner_id, config.batch_size(), now, rng)?;
        stats.record_batch(&records, banner.guaranteed_rarity);
    }
    stats.unique_items_owned = player.inventory.owned.len() as u32;

    Ok(stats)
}
