// Base rarity odds (must sum to 1.0)
pub const BASE_RATE_COMMON: f64 = 0.60;
pub const BASE_RATE_RARE: f64 = 0.25;
pub const BASE_RATE_EPIC: f64 = 0.10;
pub const BASE_RATE_LEGENDARY: f64 = 0.04;
pub const BASE_RATE_MYTHIC: f64 = 0.01;

// Pity tuning
pub const SOFT_PITY_START: u32 = 40;
pub const SOFT_PITY_RATE_INCREASE: f64 = 0.05;
pub const HARD_PITY_LIMIT: u32 = 50;
pub const MYTHIC_PITY_LIMIT: u32 = 100;

// Rate-up: share of the boosted legendary/mythic mass taken from each low tier
pub const RATE_UP_COMMON_SHARE: f64 = 0.70;
pub const RATE_UP_RARE_SHARE: f64 = 0.30;

// Chance that a draw is narrowed to the banner's rate-up items of its tier
pub const RATE_UP_NARROW_CHANCE: f64 = 0.5;

// Batches
pub const SINGLE_PULL: u32 = 1;
pub const TEN_PULL: u32 = 10;

// History
pub const PULL_HISTORY_CAPACITY: usize = 100;

// Probability sums are compared against 1.0 within this tolerance
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

// Default stack size granted per powerup drop
pub const DEFAULT_PACK_AMOUNT: u32 = 1;

// Save file
pub const SAVE_VERSION_MAGIC: u64 = 0x4741_4348_4130_3031; // "GACHA001"
