//! Picking a concrete item once a draw's rarity is known.

use crate::banner::Banner;
use crate::catalog::{Catalog, CatalogItem, Rarity};
use crate::core::constants::RATE_UP_NARROW_CHANCE;
use crate::error::{GachaError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one item of `rarity` for a draw on `banner`.
///
/// When the banner has rate-up items in this tier, a coin flip decides
/// whether the draw is narrowed to them. Otherwise (or on a lost flip) the
/// pick is uniform over every item of the tier, rate-up items included.
pub fn select_item<'a, R: Rng>(
    catalog: &'a Catalog,
    banner: &Banner,
    rarity: Rarity,
    rng: &mut R,
) -> Result<&'a CatalogItem> {
    let pool = catalog.items_of(rarity);
    if pool.is_empty() {
        return Err(GachaError::empty_tier(rarity));
    }

    let rate_up: Vec<&CatalogItem> = pool
        .iter()
        .copied()
        .filter(|item| banner.rate_up.contains(&item.id))
        .collect();

    let candidates = if !rate_up.is_empty() && rng.gen::<f64>() < RATE_UP_NARROW_CHANCE {
        rate_up
    } else {
        pool
    };

    candidates
        .choose(rng)
        .copied()
        .ok_or_else(|| GachaError::empty_tier(rarity))
}

/// Uniform pick over every item of exactly `rarity`, ignoring rate-up.
pub fn select_uniform<'a, R: Rng>(
    catalog: &'a Catalog,
    rarity: Rarity,
    rng: &mut R,
) -> Result<&'a CatalogItem> {
    catalog
        .items_of(rarity)
        .choose(rng)
        .copied()
        .ok_or_else(|| GachaError::empty_tier(rarity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemCategory;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::{BTreeSet, HashMap};

    fn item(id: &str, rarity: Rarity) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: id.to_string(),
            rarity,
            category: ItemCategory::Character,
            ability: None,
            stats: None,
            pack_amount: 1,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            item("c1", Rarity::Common),
            item("r1", Rarity::Rare),
            item("e1", Rarity::Epic),
            item("l1", Rarity::Legendary),
            item("l2", Rarity::Legendary),
            item("l3", Rarity::Legendary),
            item("l4", Rarity::Legendary),
            item("m1", Rarity::Mythic),
        ])
    }

    fn banner(rate_up: &[&str]) -> Banner {
        Banner {
            id: "b".to_string(),
            name: "B".to_string(),
            start: 0,
            end: 10,
            featured: BTreeSet::new(),
            rate_up: rate_up.iter().map(|s| s.to_string()).collect(),
            rate_up_multiplier: 2.0,
            cost_per_pull: 1,
            cost_per_ten_pull: 10,
            guaranteed_rarity: None,
        }
    }

    fn tally(banner: &Banner, rarity: Rarity, trials: u32) -> HashMap<String, u32> {
        let catalog = catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut counts = HashMap::new();
        for _ in 0..trials {
            let picked = select_item(&catalog, banner, rarity, &mut rng).unwrap();
            *counts.entry(picked.id.clone()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_selected_item_matches_rarity() {
        let catalog = catalog();
        let banner = banner(&[]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for rarity in Rarity::ALL {
            for _ in 0..20 {
                let picked = select_item(&catalog, &banner, rarity, &mut rng).unwrap();
                assert_eq!(picked.rarity, rarity);
            }
        }
    }

    #[test]
    fn test_no_rate_up_is_uniform() {
        let counts = tally(&banner(&[]), Rarity::Legendary, 8_000);
        for id in ["l1", "l2", "l3", "l4"] {
            let n = counts.get(id).copied().unwrap_or(0);
            assert!(n > 1_700 && n < 2_300, "{id} should be ~25%, got {n}");
        }
    }

    #[test]
    fn test_rate_up_item_gets_boosted_share() {
        // 50% narrowed to l1, plus 1/4 of the other half: ~62.5%
        let counts = tally(&banner(&["l1"]), Rarity::Legendary, 8_000);
        let featured = counts.get("l1").copied().unwrap_or(0);
        assert!(
            featured > 4_600 && featured < 5_400,
            "rate-up item should be ~62.5%, got {featured}"
        );
    }

    #[test]
    fn test_non_rate_up_items_stay_reachable() {
        let counts = tally(&banner(&["l1"]), Rarity::Legendary, 4_000);
        for id in ["l2", "l3", "l4"] {
            assert!(counts.get(id).copied().unwrap_or(0) > 0, "{id} unreachable");
        }
    }

    #[test]
    fn test_rate_up_in_other_tier_does_not_leak() {
        let counts = tally(&banner(&["m1"]), Rarity::Legendary, 500);
        assert!(!counts.contains_key("m1"));
    }

    #[test]
    fn test_empty_tier_is_configuration_error() {
        let catalog = Catalog::new(vec![item("c1", Rarity::Common)]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = select_item(&catalog, &banner(&[]), Rarity::Mythic, &mut rng).unwrap_err();
        assert_eq!(err, GachaError::empty_tier(Rarity::Mythic));
        assert!(select_uniform(&catalog, Rarity::Epic, &mut rng).is_err());
    }

    #[test]
    fn test_select_uniform_exact_rarity() {
        let catalog = catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut counts: HashMap<String, u32> = HashMap::new();
        for _ in 0..4_000 {
            let picked = select_uniform(&catalog, Rarity::Legendary, &mut rng).unwrap();
            assert_eq!(picked.rarity, Rarity::Legendary);
            *counts.entry(picked.id.clone()).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 4);
        for (id, n) in &counts {
            assert!((850..=1_150).contains(n), "{id} picked {n} times");
        }
    }
}
