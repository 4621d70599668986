use crate::catalog::{Catalog, Rarity};
use crate::core::constants::{SINGLE_PULL, TEN_PULL};
use crate::error::{GachaError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

fn default_multiplier() -> f64 {
    1.0
}

/// A time-boxed pull offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: String,
    pub name: String,
    /// Window start, unix seconds (inclusive)
    pub start: i64,
    /// Window end, unix seconds (exclusive)
    pub end: i64,
    #[serde(default)]
    pub featured: BTreeSet<String>,
    #[serde(default)]
    pub rate_up: BTreeSet<String>,
    #[serde(default = "default_multiplier")]
    pub rate_up_multiplier: f64,
    pub cost_per_pull: u64,
    pub cost_per_ten_pull: u64,
    /// Rarity floor promised somewhere in every ten-pull
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_rarity: Option<Rarity>,
}

impl Banner {
    pub fn is_active(&self, now: i64) -> bool {
        self.start <= now && now < self.end
    }

    pub fn has_rate_up(&self) -> bool {
        self.rate_up_multiplier > 1.0
    }

    /// Currency cost of a batch of `count` pulls.
    pub fn cost_for(&self, count: u32) -> Result<u64> {
        match count {
            SINGLE_PULL => Ok(self.cost_per_pull),
            TEN_PULL => Ok(self.cost_per_ten_pull),
            other => Err(GachaError::InvalidBatchSize(other)),
        }
    }

    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        if self.start >= self.end {
            return Err(GachaError::configuration(format!(
                "banner {} has an empty time window [{}, {})",
                self.id, self.start, self.end
            )));
        }
        if !self.rate_up_multiplier.is_finite() || self.rate_up_multiplier < 1.0 {
            return Err(GachaError::configuration(format!(
                "banner {} rate-up multiplier must be >= 1, got {}",
                self.id, self.rate_up_multiplier
            )));
        }
        for id in self.featured.iter().chain(self.rate_up.iter()) {
            if !catalog.contains(id) {
                return Err(GachaError::configuration(format!(
                    "banner {} references unknown item {id}",
                    self.id
                )));
            }
        }
        if let Some(rarity) = self.guaranteed_rarity {
            if catalog.items_of(rarity).is_empty() {
                return Err(GachaError::configuration(format!(
                    "banner {} guarantees {} but no such items exist",
                    self.id,
                    rarity.name()
                )));
            }
        }
        Ok(())
    }
}

/// All configured banners, active or not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BannerRegistry {
    banners: Vec<Banner>,
}

impl BannerRegistry {
    pub fn new(banners: Vec<Banner>) -> Self {
        Self { banners }
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn get(&self, id: &str) -> Result<&Banner> {
        self.banners
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| GachaError::UnknownBanner(id.to_string()))
    }

    /// Looks up a banner and checks its window.
    pub fn get_active(&self, id: &str, now: i64) -> Result<&Banner> {
        let banner = self.get(id)?;
        if !banner.is_active(now) {
            return Err(GachaError::InactiveBanner {
                banner_id: id.to_string(),
                now,
            });
        }
        Ok(banner)
    }

    pub fn active_at(&self, now: i64) -> Vec<&Banner> {
        self.banners.iter().filter(|b| b.is_active(now)).collect()
    }

    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        let mut seen = HashSet::new();
        for banner in &self.banners {
            if !seen.insert(banner.id.as_str()) {
                return Err(GachaError::configuration(format!(
                    "duplicate banner id {}",
                    banner.id
                )));
            }
            banner.validate(catalog)?;
        }
        Ok(())
    }
}
