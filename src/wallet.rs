//! Currency ledger seen from the pull layer.

use crate::error::{GachaError, Result};
use serde::{Deserialize, Serialize};

/// A player's spendable balance. The engine never touches this directly;
/// only `PullSession` reserves and refunds through it.
pub trait Wallet {
    fn balance(&self) -> u64;

    /// Deduct `amount`, or fail without changing the balance.
    fn try_spend(&mut self, amount: u64) -> Result<()>;

    fn credit(&mut self, amount: u64);
}

/// In-memory gem balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GemWallet {
    gems: u64,
}

impl GemWallet {
    pub fn new(gems: u64) -> Self {
        Self { gems }
    }
}

impl Wallet for GemWallet {
    fn balance(&self) -> u64 {
        self.gems
    }

    fn try_spend(&mut self, amount: u64) -> Result<()> {
        if self.gems < amount {
            return Err(GachaError::InsufficientCurrency {
                required: amount,
                available: self.gems,
            });
        }
        self.gems -= amount;
        Ok(())
    }

    fn credit(&mut self, amount: u64) {
        self.gems = self.gems.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spend_within_balance() {
        let mut wallet = GemWallet::new(500);
        wallet.try_spend(160).unwrap();
        assert_eq!(wallet.balance(), 340);
    }

    #[test]
    fn test_overspend_leaves_balance() {
        let mut wallet = GemWallet::new(100);
        assert_eq!(
            wallet.try_spend(160),
            Err(GachaError::InsufficientCurrency {
                required: 160,
                available: 100
            })
        );
        assert_eq!(wallet.balance(), 100);
    }

    #[test]
    fn test_credit_saturates() {
        let mut wallet = GemWallet::new(u64::MAX - 1);
        wallet.credit(10);
        assert_eq!(wallet.balance(), u64::MAX);
    }
}
