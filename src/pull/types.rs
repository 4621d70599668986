use crate::catalog::{CatalogItem, Rarity};
use crate::core::constants::{SINGLE_PULL, TEN_PULL};
use crate::error::GachaError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchSize {
    Single,
    Ten,
}

impl BatchSize {
    pub fn count(&self) -> u32 {
        match self {
            BatchSize::Single => SINGLE_PULL,
            BatchSize::Ten => TEN_PULL,
        }
    }
}

impl TryFrom<u32> for BatchSize {
    type Error = GachaError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        match count {
            SINGLE_PULL => Ok(BatchSize::Single),
            TEN_PULL => Ok(BatchSize::Ten),
            other => Err(GachaError::InvalidBatchSize(other)),
        }
    }
}

/// One draw in progress, before it is committed as a record.
#[derive(Debug, Clone, Copy)]
pub struct Draw<'a> {
    pub item: &'a CatalogItem,
    pub pity_triggered: bool,
}

impl Draw<'_> {
    pub fn rarity(&self) -> Rarity {
        self.item.rarity
    }
}

/// A committed draw. Fields are read-only once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRecord {
    id: Uuid,
    item_id: String,
    banner_id: String,
    rarity: Rarity,
    timestamp: i64,
    was_pity_triggered: bool,
}

impl PullRecord {
    pub fn new(draw: &Draw<'_>, banner_id: &str, timestamp: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_id: draw.item.id.clone(),
            banner_id: banner_id.to_string(),
            rarity: draw.rarity(),
            timestamp,
            was_pity_triggered: draw.pity_triggered,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn banner_id(&self) -> &str {
        &self.banner_id
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn was_pity_triggered(&self) -> bool {
        self.was_pity_triggered
    }
}
