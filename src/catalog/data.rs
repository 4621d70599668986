//! Built-in item catalog.

use super::types::{Catalog, CatalogItem, ItemCategory, Rarity, StatBonuses};

struct ItemDef {
    id: &'static str,
    name: &'static str,
    rarity: Rarity,
    category: ItemCategory,
    ability: Option<&'static str>,
    stats: Option<(u32, u32, u32, u32)>,
    pack_amount: u32,
}

const fn character(
    id: &'static str,
    name: &'static str,
    rarity: Rarity,
    ability: &'static str,
    stats: (u32, u32, u32, u32),
) -> ItemDef {
    ItemDef {
        id,
        name,
        rarity,
        category: ItemCategory::Character,
        ability: Some(ability),
        stats: Some(stats),
        pack_amount: 1,
    }
}

const fn cosmetic(
    id: &'static str,
    name: &'static str,
    rarity: Rarity,
    category: ItemCategory,
) -> ItemDef {
    ItemDef {
        id,
        name,
        rarity,
        category,
        ability: None,
        stats: None,
        pack_amount: 1,
    }
}

const fn powerup(id: &'static str, name: &'static str, rarity: Rarity, pack_amount: u32) -> ItemDef {
    ItemDef {
        id,
        name,
        rarity,
        category: ItemCategory::Powerup,
        ability: None,
        stats: None,
        pack_amount,
    }
}

const ITEM_DEFS: &[ItemDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // COMMON
    // ═══════════════════════════════════════════════════════════════
    powerup("pu_speed_boost", "Speed Boost", Rarity::Common, 3),
    powerup("pu_coin_magnet", "Coin Magnet", Rarity::Common, 3),
    powerup("pu_small_shield", "Small Shield", Rarity::Common, 2),
    cosmetic("cos_blue_scarf", "Blue Scarf", Rarity::Common, ItemCategory::Cosmetic),
    cosmetic("frame_wooden", "Wooden Frame", Rarity::Common, ItemCategory::Frame),
    // ═══════════════════════════════════════════════════════════════
    // RARE
    // ═══════════════════════════════════════════════════════════════
    character("char_scout", "Scout", Rarity::Rare, "Reveals the next obstacle", (2, 1, 4, 1)),
    character("char_squire", "Squire", Rarity::Rare, "Blocks one hit per run", (2, 4, 1, 1)),
    powerup("pu_double_jump", "Double Jump", Rarity::Rare, 2),
    cosmetic("fx_sparkle_trail", "Sparkle Trail", Rarity::Rare, ItemCategory::Effect),
    cosmetic("frame_silver", "Silver Frame", Rarity::Rare, ItemCategory::Frame),
    // ═══════════════════════════════════════════════════════════════
    // EPIC
    // ═══════════════════════════════════════════════════════════════
    character("char_ranger", "Ranger", Rarity::Epic, "Ranged shots pierce", (5, 2, 5, 3)),
    character("char_alchemist", "Alchemist", Rarity::Epic, "Powerups last 50% longer", (2, 3, 3, 7)),
    powerup("pu_revive_token", "Revive Token", Rarity::Epic, 1),
    cosmetic("cos_crystal_cape", "Crystal Cape", Rarity::Epic, ItemCategory::Cosmetic),
    cosmetic("fx_flame_aura", "Flame Aura", Rarity::Epic, ItemCategory::Effect),
    // ═══════════════════════════════════════════════════════════════
    // LEGENDARY
    // ═══════════════════════════════════════════════════════════════
    character("char_storm_knight", "Storm Knight", Rarity::Legendary, "Lightning clears the lane every 30s", (9, 8, 5, 4)),
    character("char_moon_oracle", "Moon Oracle", Rarity::Legendary, "Doubles rewards during night stages", (4, 5, 6, 11)),
    cosmetic("frame_gilded", "Gilded Frame", Rarity::Legendary, ItemCategory::Frame),
    cosmetic("fx_starfall", "Starfall", Rarity::Legendary, ItemCategory::Effect),
    // ═══════════════════════════════════════════════════════════════
    // MYTHIC
    // ═══════════════════════════════════════════════════════════════
    character("char_phoenix_queen", "Phoenix Queen", Rarity::Mythic, "Rises once per run with full shields", (12, 12, 10, 10)),
    cosmetic("frame_celestial", "Celestial Frame", Rarity::Mythic, ItemCategory::Frame),
];

/// The compiled-in catalog used when no configuration file is supplied.
pub fn builtin_catalog() -> Catalog {
    Catalog::new(
        ITEM_DEFS
            .iter()
            .map(|def| CatalogItem {
                id: def.id.to_string(),
                name: def.name.to_string(),
                rarity: def.rarity,
                category: def.category,
                ability: def.ability.map(str::to_string),
                stats: def.stats.map(|(attack, defense, speed, luck)| StatBonuses {
                    attack,
                    defense,
                    speed,
                    luck,
                }),
                pack_amount: def.pack_amount,
            })
            .collect(),
    )
}
