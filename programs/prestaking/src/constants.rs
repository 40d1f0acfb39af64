//! Program constants for the Prestaking program.
//!
//! This module defines the PDA seeds, the day-based time periods that drive
//! the withdrawal cooldowns, and the distribution batch ceiling.

/// Seed for deriving the staking config PDA
pub const STAKING_CONFIG_SEED: &[u8] = b"staking_config";

/// Seed for deriving staker record PDAs
pub const STAKER_RECORD_SEED: &[u8] = b"staker_record";

/// Seed for deriving the stake vault PDA (locked principal)
pub const STAKE_VAULT_SEED: &[u8] = b"stake_vault";

/// Seed for deriving the treasury vault PDA (reward funds)
pub const TREASURY_VAULT_SEED: &[u8] = b"treasury_vault";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// A record becomes active after one full day staked
pub const ACTIVATION_PERIOD: i64 = SECONDS_PER_DAY;

/// Wait between starting and finalizing a reward withdrawal (7 days)
pub const REWARD_COOLDOWN_PERIOD: i64 = 7 * SECONDS_PER_DAY;

/// Minimum time principal stays locked before its withdrawal can start (30 days)
pub const STAKE_LOCK_PERIOD: i64 = 30 * SECONDS_PER_DAY;

/// Wait between starting and finalizing a stake withdrawal (8 days)
pub const STAKE_COOLDOWN_PERIOD: i64 = 8 * SECONDS_PER_DAY;

/// Maximum number of staker records a single distribution pass accepts
pub const MAX_DISTRIBUTION_BATCH: usize = 20;
