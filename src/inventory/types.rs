use crate::catalog::ItemCategory;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipSlot {
    Character,
    Frame,
    Effect,
}

impl EquipSlot {
    /// The only item category this slot accepts.
    pub fn category(&self) -> ItemCategory {
        match self {
            EquipSlot::Character => ItemCategory::Character,
            EquipSlot::Frame => ItemCategory::Frame,
            EquipSlot::Effect => ItemCategory::Effect,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipped {
    pub character: Option<String>,
    pub frame: Option<String>,
    pub effect: Option<String>,
}

impl Equipped {
    pub fn get(&self, slot: EquipSlot) -> Option<&str> {
        match slot {
            EquipSlot::Character => self.character.as_deref(),
            EquipSlot::Frame => self.frame.as_deref(),
            EquipSlot::Effect => self.effect.as_deref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<String> {
        match slot {
            EquipSlot::Character => &mut self.character,
            EquipSlot::Frame => &mut self.frame,
            EquipSlot::Effect => &mut self.effect,
        }
    }
}

/// A player's collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Characters, frames, effects and cosmetics (owned at most once)
    pub owned: BTreeSet<String>,
    /// Powerup id -> count
    pub stacks: BTreeMap<String, u32>,
    #[serde(default)]
    pub equipped: Equipped,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owns(&self, item_id: &str) -> bool {
        self.owned.contains(item_id)
    }

    /// First equipped id missing from the owned set, if any.
    pub fn unowned_equip(&self) -> Option<&str> {
        [EquipSlot::Character, EquipSlot::Frame, EquipSlot::Effect]
            .into_iter()
            .filter_map(|slot| self.equipped.get(slot))
            .find(|id| !self.owns(id))
    }

    pub fn stack_count(&self, item_id: &str) -> u32 {
        self.stacks.get(item_id).copied().unwrap_or(0)
    }
}

/// What merging a drawn item did to the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeOutcome {
    /// First copy of a unique item
    Added,
    /// Already owned; nothing changed
    Duplicate,
    /// Powerup stack grew to `count`
    Stacked { count: u32 },
}
