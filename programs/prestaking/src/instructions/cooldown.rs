//! Cooldown start handlers.
//!
//! Starting either withdrawal flow only changes the caller's staker record;
//! no tokens move until the matching finalize instruction.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::PrestakingError;
use crate::events::{RewardWithdrawalStarted, StakeWithdrawalStarted};
use crate::state::{StakerRecord, StakingConfig};

/// Accounts required to start a reward or stake withdrawal cooldown.
#[derive(Accounts)]
pub struct StartCooldown<'info> {
    pub user: Signer<'info>,

    #[account(
        seeds = [STAKING_CONFIG_SEED, staking_config.staking_mint.as_ref()],
        bump = staking_config.bump
    )]
    pub staking_config: Account<'info, StakingConfig>,

    #[account(
        mut,
        seeds = [STAKER_RECORD_SEED, staking_config.key().as_ref(), user.key().as_ref()],
        bump = staker_record.bump,
        constraint = staker_record.owner == user.key() @ PrestakingError::Unauthorized,
        constraint = staker_record.config == staking_config.key()
    )]
    pub staker_record: Account<'info, StakerRecord>,
}

/// Start the reward withdrawal cooldown.
///
/// Brings the record's rewards up to date, then snapshots everything not yet
/// released into `pending_reward`.
///
/// # Errors
/// - `NotActive` if less than a day has passed since staking
/// - `RewardCooldownActive` / `StakeCooldownActive` if a flow is already running
pub fn start_withdraw_reward_handler(ctx: Context<StartCooldown>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let daily_reward = ctx.accounts.staking_config.daily_reward;
    let staker_record = &mut ctx.accounts.staker_record;

    staker_record.accrue(now, daily_reward);
    let pending = staker_record.start_reward_cooldown(now)?;

    msg!("Reward withdrawal cooldown started");
    msg!("Pending reward: {}", pending);

    emit!(RewardWithdrawalStarted {
        staker: staker_record.owner,
        pending_reward: pending,
        started_at: now,
    });

    Ok(())
}

/// Start the stake withdrawal cooldown.
///
/// Once started, the reward flow can no longer be entered for this record.
///
/// # Errors
/// - `StakeLocked` before the 30 day lock period ends
/// - `RewardCooldownActive` while a reward withdrawal is pending
/// - `StakeCooldownActive` if already started
pub fn start_withdraw_stake_handler(ctx: Context<StartCooldown>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let daily_reward = ctx.accounts.staking_config.daily_reward;
    let staker_record = &mut ctx.accounts.staker_record;

    staker_record.accrue(now, daily_reward);
    staker_record.start_stake_cooldown(now)?;

    msg!("Stake withdrawal cooldown started for {} tokens", staker_record.amount);

    emit!(StakeWithdrawalStarted {
        staker: staker_record.owner,
        started_at: now,
    });

    Ok(())
}
