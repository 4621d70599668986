use crate::core::constants::{
    BASE_RATE_COMMON, BASE_RATE_EPIC, BASE_RATE_LEGENDARY, BASE_RATE_MYTHIC, BASE_RATE_RARE,
    DEFAULT_PACK_AMOUNT, PROBABILITY_TOLERANCE,
};
use crate::error::{GachaError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
    Mythic = 4,
}

impl Rarity {
    /// All tiers in ascending order.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
    ];

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Legendary and above reset the pity counter.
    pub fn is_high_tier(&self) -> bool {
        *self >= Rarity::Legendary
    }
}

/// Base odds per rarity tier, before rate-up and pity adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityTable {
    pub common: f64,
    pub rare: f64,
    pub epic: f64,
    pub legendary: f64,
    pub mythic: f64,
}

impl Default for RarityTable {
    fn default() -> Self {
        Self {
            common: BASE_RATE_COMMON,
            rare: BASE_RATE_RARE,
            epic: BASE_RATE_EPIC,
            legendary: BASE_RATE_LEGENDARY,
            mythic: BASE_RATE_MYTHIC,
        }
    }
}

impl RarityTable {
    pub fn base(&self, rarity: Rarity) -> f64 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
            Rarity::Mythic => self.mythic,
        }
    }

    /// Base odds indexed by `Rarity::index`.
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.common,
            self.rare,
            self.epic,
            self.legendary,
            self.mythic,
        ]
    }

    pub fn validate(&self) -> Result<()> {
        for rarity in Rarity::ALL {
            let p = self.base(rarity);
            if !p.is_finite() || p < 0.0 {
                return Err(GachaError::configuration(format!(
                    "base rate for {} must be a non-negative number, got {p}",
                    rarity.name()
                )));
            }
        }
        let total: f64 = self.as_array().iter().sum();
        if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(GachaError::configuration(format!(
                "base rates must sum to 1.0, got {total}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Character,
    Powerup,
    Cosmetic,
    Frame,
    Effect,
}

impl ItemCategory {
    /// Powerups stack; everything else is owned at most once.
    pub fn is_stackable(&self) -> bool {
        matches!(self, ItemCategory::Powerup)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatBonuses {
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub speed: u32,
    #[serde(default)]
    pub luck: u32,
}

impl StatBonuses {
    pub fn total(&self) -> u32 {
        self.attack + self.defense + self.speed + self.luck
    }
}

fn default_pack_amount() -> u32 {
    DEFAULT_PACK_AMOUNT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub category: ItemCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatBonuses>,
    /// Stack size granted per drop (powerups only)
    #[serde(default = "default_pack_amount")]
    pub pack_amount: u32,
}

/// Every obtainable item, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Items of exactly this rarity, in catalog order.
    pub fn items_of(&self, rarity: Rarity) -> Vec<&CatalogItem> {
        self.items.iter().filter(|item| item.rarity == rarity).collect()
    }

    /// Every tier must be drawable and ids must be unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                return Err(GachaError::configuration(format!(
                    "duplicate catalog item id {}",
                    item.id
                )));
            }
            if item.category.is_stackable() && item.pack_amount == 0 {
                return Err(GachaError::configuration(format!(
                    "powerup {} has a pack amount of 0",
                    item.id
                )));
            }
        }
        for rarity in Rarity::ALL {
            if self.items_of(rarity).is_empty() {
                return Err(GachaError::empty_tier(rarity));
            }
        }
        Ok(())
    }
}
