use crate::history::PullHistory;
use crate::inventory::Inventory;
use crate::pity::PityTracker;
use serde::{Deserialize, Serialize};

/// Everything the engine mutates for one player.
///
/// Pulls take `&mut PlayerState`, so one player can only have one pull in
/// flight at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub pity: PityTracker,
    pub inventory: Inventory,
    pub history: PullHistory,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }
}
