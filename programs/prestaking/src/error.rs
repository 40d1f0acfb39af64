//! Error types for the Prestaking program.
//!
//! Each error has a unique code and descriptive message.
//!
//! ## Error Code Ranges
//! - 6000-6004: Input validation errors
//! - 6005-6013: Staker state errors
//! - 6014-6017: Approval and transfer errors
//! - 6018: Math errors
//! - 6019: Authorization errors

use anchor_lang::prelude::*;

/// Custom error codes for the Prestaking program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum PrestakingError {
    // ========== Input Validation Errors (6000-6004) ==========

    /// [6000] Minimum stake would exceed maximum stake.
    #[msg("Minimum stake must not exceed maximum stake")]
    InvalidStakeBounds,

    /// [6001] Cannot fund with zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// [6002] The new authority is the default pubkey.
    #[msg("New authority must not be the default pubkey")]
    InvalidAuthority,

    /// [6003] Too many staker records passed to a distribution pass.
    #[msg("Distribution batch exceeds the per-call record limit")]
    DistributionBatchTooLarge,

    /// [6004] Staking opens at the configured launch time.
    #[msg("Staking has not started yet")]
    StakingNotStarted,

    // ========== Staker State Errors (6005-6013) ==========

    /// [6005] The caller already has an outstanding stake.
    #[msg("Caller already has an active stake")]
    AlreadyStaked,

    /// [6006] Less than one full day has passed since staking.
    #[msg("Stake is not active yet")]
    NotActive,

    /// [6007] A reward withdrawal cooldown is already running.
    #[msg("Reward withdrawal cooldown is already running")]
    RewardCooldownActive,

    /// [6008] No reward withdrawal cooldown was started.
    #[msg("Reward withdrawal cooldown has not been started")]
    RewardCooldownNotStarted,

    /// [6009] The reward withdrawal cooldown has not elapsed.
    #[msg("Reward withdrawal cooldown has not elapsed")]
    RewardCooldownNotElapsed,

    /// [6010] The stake lock period has not ended.
    #[msg("Stake is still locked")]
    StakeLocked,

    /// [6011] A stake withdrawal cooldown is already running.
    #[msg("Stake withdrawal cooldown is already running")]
    StakeCooldownActive,

    /// [6012] No stake withdrawal cooldown was started.
    #[msg("Stake withdrawal cooldown has not been started")]
    StakeCooldownNotStarted,

    /// [6013] The stake withdrawal cooldown has not elapsed.
    #[msg("Stake withdrawal cooldown has not elapsed")]
    StakeCooldownNotElapsed,

    // ========== Approval and Transfer Errors (6014-6017) ==========

    /// [6014] Allowance granted to the config PDA is below the minimum stake.
    #[msg("Token approval is below the minimum stake")]
    InsufficientApproval,

    /// [6015] The treasury does not hold enough tokens for the reward payout.
    #[msg("Insufficient treasury funds for reward payout")]
    InsufficientTreasuryFunds,

    /// [6016] Token account mint does not match the staking mint.
    #[msg("Token mint mismatch - wrong token for this config")]
    MintMismatch,

    /// [6017] Instruction data matching no instruction of this program.
    #[msg("Unknown instruction")]
    UnknownInstruction,

    // ========== Math Errors (6018) ==========

    /// [6018] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Authorization Errors (6019) ==========

    /// [6019] Unauthorized - caller is not the config authority.
    #[msg("Unauthorized: caller is not the staking authority")]
    Unauthorized,
}
