//! Batch pulls: ten-pull guarantee, inventory, history and rollback.

use gacha::catalog::{ItemCategory, Rarity, RarityTable};
use gacha::catalog::Catalog;
use gacha::inventory::{merge_item, MergeOutcome};
use gacha::pity::PityState;
use gacha::player::PlayerState;
use gacha::pull::execute_pull;
use gacha::{GachaConfig, GachaEngine, GachaError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const NOW: i64 = 1_792_000_000;

fn engine() -> GachaEngine {
    GachaEngine::new(GachaConfig::builtin()).unwrap()
}

// =========================================================================
// Ten-pull guarantee
// =========================================================================

#[test]
fn test_every_ten_pull_meets_epic_floor() {
    let engine = engine();
    let mut player = PlayerState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for batch in 0..1_000 {
        let records = engine
            .pull_at(&mut player, "storm_knight", 10, NOW, &mut rng)
            .unwrap();
        assert_eq!(records.len(), 10);
        assert!(
            records.iter().any(|r| r.rarity() >= Rarity::Epic),
            "batch {batch} missed the floor"
        );
    }
}

#[test]
fn test_all_common_table_substitutes_tenth_draw() {
    let mut config = GachaConfig::builtin();
    config.rarity_table = RarityTable {
        common: 1.0,
        rare: 0.0,
        epic: 0.0,
        legendary: 0.0,
        mythic: 0.0,
    };
    let engine = GachaEngine::new(config).unwrap();
    let mut player = PlayerState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    let records = engine
        .pull_at(&mut player, "standard", 10, NOW, &mut rng)
        .unwrap();
    for record in &records[..9] {
        assert_eq!(record.rarity(), Rarity::Common);
    }
    assert_eq!(records[9].rarity(), Rarity::Rare);
    // substitution does not count toward pity
    assert_eq!(player.pity.get("standard").pulls_since_last_high_tier, 10);
}

#[test]
fn test_single_pulls_have_no_floor() {
    let mut config = GachaConfig::builtin();
    config.rarity_table = RarityTable {
        common: 1.0,
        rare: 0.0,
        epic: 0.0,
        legendary: 0.0,
        mythic: 0.0,
    };
    let engine = GachaEngine::new(config).unwrap();
    let mut player = PlayerState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    for _ in 0..10 {
        let records = engine
            .pull_at(&mut player, "standard", 1, NOW, &mut rng)
            .unwrap();
        assert_eq!(records[0].rarity(), Rarity::Common);
    }
}

// =========================================================================
// Inventory
// =========================================================================

#[test]
fn test_unique_items_never_duplicate() {
    let engine = engine();
    let mut player = PlayerState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    for _ in 0..50 {
        engine
            .pull_at(&mut player, "standard", 10, NOW, &mut rng)
            .unwrap();
    }

    let catalog = &engine.config().catalog;
    let unique_total = catalog
        .items()
        .iter()
        .filter(|i| !i.category.is_stackable())
        .count();
    assert!(player.inventory.owned.len() <= unique_total);
    for id in &player.inventory.owned {
        let item = catalog.get(id).unwrap();
        assert_ne!(item.category, ItemCategory::Powerup);
    }
}

#[test]
fn test_merge_is_idempotent_for_unique_items() {
    let engine = engine();
    let item = engine.config().catalog.get("char_storm_knight").unwrap();
    let mut player = PlayerState::new();

    assert_eq!(merge_item(&mut player.inventory, item), MergeOutcome::Added);
    let snapshot = player.inventory.clone();
    assert_eq!(merge_item(&mut player.inventory, item), MergeOutcome::Duplicate);
    assert_eq!(player.inventory, snapshot);
}

#[test]
fn test_powerups_stack_by_pack_amount() {
    let engine = engine();
    let item = engine.config().catalog.get("pu_speed_boost").unwrap();
    let mut player = PlayerState::new();

    merge_item(&mut player.inventory, item);
    assert_eq!(
        merge_item(&mut player.inventory, item),
        MergeOutcome::Stacked { count: 6 }
    );
    assert_eq!(player.inventory.stack_count("pu_speed_boost"), 6);
}

// =========================================================================
// History
// =========================================================================

#[test]
fn test_history_keeps_latest_hundred() {
    let engine = engine();
    let mut player = PlayerState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut last = None;
    for i in 0..150 {
        let records = engine
            .pull_at(&mut player, "standard", 1, NOW + i, &mut rng)
            .unwrap();
        last = records.into_iter().next();
    }

    assert_eq!(player.history.len(), 100);
    assert_eq!(player.history.latest(), last.as_ref());
    let stamps: Vec<i64> = player.history.iter().map(|r| r.timestamp()).collect();
    assert_eq!(stamps.first(), Some(&(NOW + 149)));
    assert_eq!(stamps.last(), Some(&(NOW + 50)));
    assert!(stamps.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn test_history_records_batch_in_draw_order() {
    let engine = engine();
    let mut player = PlayerState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let records = engine
        .pull_at(&mut player, "standard", 10, NOW, &mut rng)
        .unwrap();

    let newest_first: Vec<_> = player.history.iter().cloned().collect();
    let mut expected = records.clone();
    expected.reverse();
    assert_eq!(newest_first, expected);
}

// =========================================================================
// Rollback
// =========================================================================

#[test]
fn test_failed_pulls_leave_player_untouched() {
    let engine = engine();
    let mut player = PlayerState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    engine
        .pull_at(&mut player, "standard", 10, NOW, &mut rng)
        .unwrap();
    let snapshot = player.clone();

    assert_eq!(
        engine.pull_at(&mut player, "standard", 5, NOW, &mut rng),
        Err(GachaError::InvalidBatchSize(5))
    );
    assert!(matches!(
        engine.pull_at(&mut player, "moon_oracle", 1, NOW, &mut rng),
        Err(GachaError::InactiveBanner { .. })
    ));
    assert_eq!(
        engine.pull_at(&mut player, "missing", 1, NOW, &mut rng),
        Err(GachaError::UnknownBanner("missing".to_string()))
    );
    assert_eq!(player, snapshot);
}

#[test]
fn test_batch_failing_midway_rolls_back() {
    // Unvalidated config with no high-tier items: the forced draw at hard pity fails
    let mut config = GachaConfig::builtin();
    let items: Vec<_> = config
        .catalog
        .items()
        .iter()
        .filter(|i| !i.rarity.is_high_tier())
        .cloned()
        .collect();
    config.catalog = Catalog::new(items);

    let mut player = PlayerState::new();
    player.pity.set(
        "standard",
        PityState {
            pulls_since_last_high_tier: 45,
            lifetime_pulls: 45,
        },
    );
    player.inventory.owned.insert("frame_wooden".to_string());
    let snapshot = player.clone();
    let mut rng = ChaCha8Rng::seed_from_u64(45);

    let result = execute_pull(&config, &mut player, "standard", 10, NOW, &mut rng);
    assert!(matches!(result, Err(GachaError::Configuration(_))));
    assert_eq!(player, snapshot);
}

#[test]
fn test_empty_tier_rejected_at_startup() {
    let mut config = GachaConfig::builtin();
    let items: Vec<_> = config
        .catalog
        .items()
        .iter()
        .filter(|i| i.rarity != Rarity::Mythic)
        .cloned()
        .collect();
    config.catalog = Catalog::new(items);
    assert!(matches!(
        GachaEngine::new(config),
        Err(GachaError::Configuration(_))
    ));
}
