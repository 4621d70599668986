//! Static engine configuration: rarity odds, pity tuning, catalog, banners.
//!
//! Loaded once at startup and validated before any pull can run, so an
//! empty rarity tier can never surface in the middle of a batch.

use crate::banner::{builtin_banners, BannerRegistry};
use crate::catalog::{builtin_catalog, Catalog, RarityTable};
use crate::error::{GachaError, Result};
use crate::pity::PityConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GachaConfig {
    #[serde(default)]
    pub rarity_table: RarityTable,
    #[serde(default)]
    pub pity: PityConfig,
    pub catalog: Catalog,
    pub banners: BannerRegistry,
}

impl GachaConfig {
    /// Compiled-in catalog and banner schedule with default odds.
    pub fn builtin() -> Self {
        Self {
            rarity_table: RarityTable::default(),
            pity: PityConfig::default(),
            catalog: builtin_catalog(),
            banners: builtin_banners(),
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GachaError::configuration(format!("invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            GachaError::configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            items = config.catalog.items().len(),
            banners = config.banners.banners().len(),
            "loaded gacha config"
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GachaError::configuration(format!("failed to serialize config: {e}")))
    }

    pub fn validate(&self) -> Result<()> {
        self.rarity_table.validate()?;
        self.pity.validate()?;
        self.catalog.validate()?;
        self.banners.validate(&self.catalog)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rarity;

    #[test]
    fn test_builtin_config_is_valid() {
        assert!(GachaConfig::builtin().validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GachaConfig::builtin();
        let json = config.to_json().unwrap();
        assert_eq!(GachaConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_minimal_json_uses_default_odds() {
        let json = r#"{
            "catalog": [
                {"id": "c", "name": "C", "rarity": "common", "category": "powerup", "pack_amount": 5},
                {"id": "r", "name": "R", "rarity": "rare", "category": "frame"},
                {"id": "e", "name": "E", "rarity": "epic", "category": "effect"},
                {"id": "l", "name": "L", "rarity": "legendary", "category": "character",
                 "ability": "Glows", "stats": {"attack": 3}},
                {"id": "m", "name": "M", "rarity": "mythic", "category": "cosmetic"}
            ],
            "banners": [
                {"id": "b", "name": "B", "start": 0, "end": 100,
                 "rate_up": ["l"], "rate_up_multiplier": 2.0,
                 "cost_per_pull": 100, "cost_per_ten_pull": 900,
                 "guaranteed_rarity": "epic"}
            ]
        }"#;
        let config = GachaConfig::from_json_str(json).unwrap();
        assert_eq!(config.rarity_table, RarityTable::default());
        assert_eq!(config.pity, PityConfig::default());
        let banner = config.banners.get("b").unwrap();
        assert_eq!(banner.guaranteed_rarity, Some(Rarity::Epic));
        assert!(banner.featured.is_empty());
        assert_eq!(config.catalog.get("c").unwrap().pack_amount, 5);
    }

    #[test]
    fn test_missing_tier_rejected_at_load() {
        let mut config = GachaConfig::builtin();
        let items: Vec<_> = config
            .catalog
            .items()
            .iter()
            .filter(|i| i.rarity != Rarity::Epic)
            .cloned()
            .collect();
        config.catalog = Catalog::new(items);
        let json = serde_json::to_string(&config).unwrap();
        assert!(matches!(
            GachaConfig::from_json_str(&json),
            Err(GachaError::Configuration(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_configuration_error() {
        assert!(matches!(
            GachaConfig::from_json_str("{not json"),
            Err(GachaError::Configuration(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gacha.json");
        fs::write(&path, GachaConfig::builtin().to_json().unwrap()).unwrap();
        assert_eq!(GachaConfig::load(&path).unwrap(), GachaConfig::builtin());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GachaConfig::load(dir.path().join("nope.json")).is_err());
    }
}
