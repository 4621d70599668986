//! The calling layer: pay for a batch, then run it.

use crate::engine::GachaEngine;
use crate::error::Result;
use crate::player::PlayerState;
use crate::pull::PullRecord;
use crate::wallet::Wallet;
use chrono::Utc;
use rand::Rng;
use tracing::warn;

/// Binds one player's state and wallet to an engine for a run of purchases.
///
/// Currency reservation and the engine call are one unit of work: a failed
/// reservation never reaches the engine, and a failed batch is refunded.
pub struct PullSession<'a, W: Wallet> {
    engine: &'a GachaEngine,
    player: &'a mut PlayerState,
    wallet: &'a mut W,
}

impl<'a, W: Wallet> PullSession<'a, W> {
    pub fn new(engine: &'a GachaEngine, player: &'a mut PlayerState, wallet: &'a mut W) -> Self {
        Self {
            engine,
            player,
            wallet,
        }
    }

    pub fn player(&self) -> &PlayerState {
        &*self.player
    }

    pub fn balance(&self) -> u64 {
        self.wallet.balance()
    }

    pub fn pull<R: Rng>(
        &mut self,
        banner_id: &str,
        count: u32,
        rng: &mut R,
    ) -> Result<Vec<PullRecord>> {
        self.pull_at(banner_id, count, Utc::now().timestamp(), rng)
    }

    pub fn pull_at<R: Rng>(
        &mut self,
        banner_id: &str,
        count: u32,
        now: i64,
        rng: &mut R,
    ) -> Result<Vec<PullRecord>> {
        let banner = self.engine.config().banners.get_active(banner_id, now)?;
        let cost = banner.cost_for(count)?;
        self.wallet
            .try_spend(cost)
            .inspect_err(|e| warn!(banner_id, %e, "pull not started"))?;

        match self.engine.pull_at(&mut *self.player, banner_id, count, now, rng) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(banner_id, cost, %e, "pull failed, refunding");
                self.wallet.credit(cost);
                Err(e)
            }
        }
    }
}
