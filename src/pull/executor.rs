use super::types::{BatchSize, Draw, PullRecord};
use crate::banner::Banner;
use crate::catalog::Catalog;
use crate::config::GachaConfig;
use crate::error::Result;
use crate::inventory::merge_item;
use crate::player::PlayerState;
use crate::rates::calculate_rates;
use crate::selection::{select_item, select_uniform};
use rand::Rng;
use tracing::{debug, info, warn};

/// Run a batch of `count` pulls on `banner_id` for one player.
///
/// Currency must already be reserved by the caller. Every change (pity,
/// inventory, history) is staged on copies and written back to `player`
/// only if the whole batch succeeds.
pub fn execute_pull<R: Rng>(
    config: &GachaConfig,
    player: &mut PlayerState,
    banner_id: &str,
    count: u32,
    now: i64,
    rng: &mut R,
) -> Result<Vec<PullRecord>> {
    let batch = BatchSize::try_from(count).inspect_err(|e| warn!(banner_id, %e, "pull rejected"))?;
    let banner = config
        .banners
        .get_active(banner_id, now)
        .inspect_err(|e| warn!(banner_id, %e, "pull rejected"))?;

    let mut pity = player.pity.get(banner_id);
    let mut draws = Vec::with_capacity(batch.count() as usize);

    for _ in 0..batch.count() {
        let outcome = calculate_rates(&config.rarity_table, &config.pity, banner, pity);
        let rarity = outcome.distribution.roll(rng);
        let item = select_item(&config.catalog, banner, rarity, rng)?;
        debug!(
            banner_id,
            pity = pity.pulls_since_last_high_tier,
            rarity = rarity.name(),
            item = %item.id,
            forced = ?outcome.forced,
            "draw"
        );
        pity.record_draw(rarity);
        draws.push(Draw {
            item,
            pity_triggered: outcome.pity_triggered(),
        });
    }

    let substituted = batch == BatchSize::Ten
        && apply_batch_guarantee(&config.catalog, banner, &mut draws, rng)?;

    let mut inventory = player.inventory.clone();
    let mut history = player.history.clone();
    let records: Vec<PullRecord> = draws
        .iter()
        .map(|draw| {
            merge_item(&mut inventory, draw.item);
            let record = PullRecord::new(draw, banner_id, now);
            history.push(record.clone());
            record
        })
        .collect();

    player.pity.set(banner_id, pity);
    player.inventory = inventory;
    player.history = history;

    info!(
        banner_id,
        count = records.len(),
        best = records.iter().map(|r| r.rarity()).max().map(|r| r.name()),
        substituted,
        pity = pity.pulls_since_last_high_tier,
        "pull committed"
    );
    Ok(records)
}

/// Enforce the banner's ten-pull rarity floor.
///
/// If no draw reached the floor, the last draw's item is swapped for a
/// uniform pick of exactly the floor rarity. Pity is not touched. Returns
/// whether a swap happened.
pub fn apply_batch_guarantee<'a, R: Rng>(
    catalog: &'a Catalog,
    banner: &Banner,
    draws: &mut [Draw<'a>],
    rng: &mut R,
) -> Result<bool> {
    let Some(floor) = banner.guaranteed_rarity else {
        return Ok(false);
    };
    if draws.iter().any(|d| d.rarity() >= floor) {
        return Ok(false);
    }
    let Some(last) = draws.last_mut() else {
        return Ok(false);
    };
    last.item = select_uniform(catalog, floor, rng)?;
    debug!(banner_id = %banner.id, floor = floor.name(), item = %last.item.id, "batch guarantee applied");
    Ok(true)
}
