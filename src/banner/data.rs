//! Built-in banner schedule.

use super::types::{Banner, BannerRegistry};
use crate::catalog::Rarity;
use std::collections::BTreeSet;

const STANDARD_START: i64 = 1_704_067_200; // 2024-01-01
const STANDARD_END: i64 = 4_102_444_800; // 2100-01-01
const STORM_START: i64 = 1_790_812_800; // 2026-10-01
const STORM_END: i64 = 1_793_491_200; // 2026-11-01
const ORACLE_START: i64 = 1_794_700_800; // 2026-11-15
const ORACLE_END: i64 = 1_797_292_800; // 2026-12-15

fn ids(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn builtin_banners() -> BannerRegistry {
    BannerRegistry::new(vec![
        Banner {
            id: "standard".to_string(),
            name: "Standard Summon".to_string(),
            start: STANDARD_START,
            end: STANDARD_END,
            featured: BTreeSet::new(),
            rate_up: BTreeSet::new(),
            rate_up_multiplier: 1.0,
            cost_per_pull: 160,
            cost_per_ten_pull: 1600,
            guaranteed_rarity: Some(Rarity::Rare),
        },
        Banner {
            id: "storm_knight".to_string(),
            name: "Eye of the Storm".to_string(),
            start: STORM_START,
            end: STORM_END,
            featured: ids(&["char_storm_knight"]),
            rate_up: ids(&["char_storm_knight", "fx_starfall", "char_ranger"]),
            rate_up_multiplier: 2.0,
            cost_per_pull: 160,
            cost_per_ten_pull: 1440,
            guaranteed_rarity: Some(Rarity::Epic),
        },
        Banner {
            id: "moon_oracle".to_string(),
            name: "Night of the Oracle".to_string(),
            start: ORACLE_START,
            end: ORACLE_END,
            featured: ids(&["char_moon_oracle"]),
            rate_up: ids(&["char_moon_oracle", "frame_gilded"]),
            rate_up_multiplier: 1.5,
            cost_per_pull: 160,
            cost_per_ten_pull: 1440,
            guaranteed_rarity: Some(Rarity::Epic),
        },
    ])
}
