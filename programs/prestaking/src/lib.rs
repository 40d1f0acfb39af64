//! # Prestaking Program
//!
//! A single-token staking ledger. A staker approves the staking config PDA
//! as delegate of their token account and calls `stake`; the approved amount,
//! capped at the configured maximum, is locked for at least 30 days.
//!
//! ## Features
//! - Flat daily reward credited by an owner-triggered, paginated distribution pass
//! - Reward withdrawal through a 7-day cooldown, repeatable while staked
//! - Stake withdrawal through an 8-day cooldown after the 30-day lock
//! - Owner-tunable minimum stake, maximum stake and daily reward
//!
//! One stake per account: a record is created by `stake` and closed by
//! `withdraw_stake`.

use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

use instructions::*;

#[program]
pub mod prestaking {
    use super::*;

    /// Creates the staking config and its vaults.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `min_stake` - Smallest amount a staker may lock
    /// * `max_stake` - Largest amount a staker may lock
    /// * `daily_reward` - Reward credited per whole day to each staker
    /// * `launch_time` - Optional time staking opens (defaults to now)
    ///
    /// # Errors
    /// Returns an error if `min_stake > max_stake`.
    pub fn initialize(
        ctx: Context<Initialize>,
        min_stake: u64,
        max_stake: u64,
        daily_reward: u64,
        launch_time: Option<i64>,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, min_stake, max_stake, daily_reward, launch_time)
    }

    /// Owner function to set the minimum stake.
    ///
    /// # Errors
    /// Returns an error if the caller is not the owner or the value exceeds
    /// the maximum stake.
    pub fn update_minimum_stake(ctx: Context<AdminControl>, value: u64) -> Result<()> {
        instructions::admin::update_minimum_stake_handler(ctx, value)
    }

    /// Owner function to set the maximum stake.
    ///
    /// # Errors
    /// Returns an error if the caller is not the owner or the value is below
    /// the minimum stake.
    pub fn update_maximum_stake(ctx: Context<AdminControl>, value: u64) -> Result<()> {
        instructions::admin::update_maximum_stake_handler(ctx, value)
    }

    /// Owner function to set the daily reward.
    pub fn update_daily_reward(ctx: Context<AdminControl>, value: u64) -> Result<()> {
        instructions::admin::update_daily_reward_handler(ctx, value)
    }

    /// Owner function to hand the config to a new owner.
    pub fn transfer_authority(ctx: Context<AdminControl>, new_authority: Pubkey) -> Result<()> {
        instructions::admin::transfer_authority_handler(ctx, new_authority)
    }

    /// Funds the reward treasury.
    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        instructions::fund_treasury::handler(ctx, amount)
    }

    /// Stakes the allowance the caller granted to the config PDA.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The caller already has a stake
    /// - The allowance is below the minimum stake
    /// - The token transfer fails
    pub fn stake(ctx: Context<Stake>) -> Result<()> {
        instructions::stake::handler(ctx)
    }

    /// Starts the 7-day reward withdrawal cooldown.
    pub fn start_withdraw_reward(ctx: Context<StartCooldown>) -> Result<()> {
        instructions::cooldown::start_withdraw_reward_handler(ctx)
    }

    /// Pays out the reward snapshotted when the cooldown started.
    pub fn withdraw_reward(ctx: Context<WithdrawReward>) -> Result<()> {
        instructions::withdraw_reward::handler(ctx)
    }

    /// Starts the 8-day stake withdrawal cooldown.
    pub fn start_withdraw_stake(ctx: Context<StartCooldown>) -> Result<()> {
        instructions::cooldown::start_withdraw_stake_handler(ctx)
    }

    /// Returns the locked principal and closes the staker record.
    pub fn withdraw_stake(ctx: Context<WithdrawStake>) -> Result<()> {
        instructions::withdraw_stake::handler(ctx)
    }

    /// Owner function crediting elapsed-day rewards to the staker records
    /// passed as remaining accounts.
    pub fn update_distribution(ctx: Context<UpdateDistribution>) -> Result<()> {
        instructions::update_distribution::handler(ctx)
    }

    /// Returns the record of `staker` as return data.
    pub fn staker_info(ctx: Context<GetStakerInfo>, staker: Pubkey) -> Result<StakerView> {
        instructions::staker_info::handler(ctx, staker)
    }

    /// Rejects instruction data that matches no instruction of this program.
    ///
    /// Lamports sent to the program address through the System program never
    /// reach this handler. The program simply has no instruction that accepts
    /// them.
    pub fn fallback<'info>(
        _program_id: &Pubkey,
        _accounts: &'info [AccountInfo<'info>],
        _data: &[u8],
    ) -> Result<()> {
        err!(error::PrestakingError::UnknownInstruction)
    }
}
