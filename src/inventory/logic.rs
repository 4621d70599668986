use super::types::{EquipSlot, Inventory, MergeOutcome};
use crate::catalog::{Catalog, CatalogItem};
use crate::error::{GachaError, Result};

/// Add a drawn item to the inventory. Duplicates of unique items are ignored
/// without compensation; powerups stack by their pack amount.
pub fn merge_item(inventory: &mut Inventory, item: &CatalogItem) -> MergeOutcome {
    if item.category.is_stackable() {
        let count = inventory.stacks.entry(item.id.clone()).or_insert(0);
        *count = count.saturating_add(item.pack_amount);
        return MergeOutcome::Stacked { count: *count };
    }

    if inventory.owned.insert(item.id.clone()) {
        MergeOutcome::Added
    } else {
        MergeOutcome::Duplicate
    }
}

/// Point an equip slot at an owned item of the slot's category.
pub fn equip(
    inventory: &mut Inventory,
    catalog: &Catalog,
    slot: EquipSlot,
    item_id: &str,
) -> Result<()> {
    let item = catalog
        .get(item_id)
        .ok_or_else(|| GachaError::UnknownItem(item_id.to_string()))?;
    if item.category != slot.category() {
        return Err(GachaError::WrongCategory {
            item_id: item_id.to_string(),
            expected: slot.category(),
            actual: item.category,
        });
    }
    if !inventory.owns(item_id) {
        return Err(GachaError::NotOwned(item_id.to_string()));
    }
    *inventory.equipped.slot_mut(slot) = Some(item_id.to_string());
    Ok(())
}

pub fn unequip(inventory: &mut Inventory, slot: EquipSlot) -> Option<String> {
    inventory.equipped.slot_mut(slot).take()
}
