//! Monte Carlo pull simulator.
//!
//! Runs thousands of simulated players against a banner to audit:
//! - Observed rarity rates against the advertised odds
//! - How often soft and hard pity end a drought
//! - Whether every ten-pull meets its rarity floor
//!
//! The simulator drives `GachaEngine` directly, so results match live pulls.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{PlayerStats, SimReport};
pub use runner::run_simulation;
