//! Withdraw stake instruction handler.
//!
//! Returns the locked principal once the stake cooldown has elapsed and
//! closes the staker record, refunding its rent to the staker.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::PrestakingError;
use crate::events::StakeWithdrawn;
use crate::state::{StakerRecord, StakingConfig};

/// Accounts required for finalizing a stake withdrawal.
#[derive(Accounts)]
pub struct WithdrawStake<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKING_CONFIG_SEED, staking_config.staking_mint.as_ref()],
        bump = staking_config.bump,
        has_one = stake_vault,
        has_one = staking_mint
    )]
    pub staking_config: Account<'info, StakingConfig>,

    /// Closed on success.
    #[account(
        mut,
        close = user,
        seeds = [STAKER_RECORD_SEED, staking_config.key().as_ref(), user.key().as_ref()],
        bump = staker_record.bump,
        constraint = staker_record.owner == user.key() @ PrestakingError::Unauthorized,
        constraint = staker_record.config == staking_config.key()
    )]
    pub staker_record: Account<'info, StakerRecord>,

    pub staking_mint: Account<'info, Mint>,

    /// User's token account for receiving the principal.
    #[account(
        mut,
        constraint = user_token_account.mint == staking_mint.key() @ PrestakingError::MintMismatch,
        constraint = user_token_account.owner == user.key()
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Vault holding locked principal.
    #[account(mut)]
    pub stake_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Finalize a stake withdrawal.
///
/// Rewards that were never moved into a reward withdrawal are forfeited with
/// the record.
///
/// # Errors
/// - `StakeCooldownNotStarted` if no stake cooldown is running
/// - `StakeCooldownNotElapsed` within 8 days of starting it
pub fn handler(ctx: Context<WithdrawStake>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let daily_reward = ctx.accounts.staking_config.daily_reward;
    let staker_record = &mut ctx.accounts.staker_record;
    let staker = staker_record.owner;

    staker_record.accrue(now, daily_reward);
    let forfeited = staker_record
        .accumulated_reward
        .saturating_sub(staker_record.released_reward);

    let amount = staker_record.finish_stake_cooldown(now)?;

    let staking_config = &mut ctx.accounts.staking_config;
    staking_config.release_stake(amount)?;

    let seeds = &[
        STAKING_CONFIG_SEED,
        staking_config.staking_mint.as_ref(),
        &[staking_config.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.stake_vault.to_account_info(),
        to: ctx.accounts.user_token_account.to_account_info(),
        authority: staking_config.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, amount)?;

    msg!("Withdrew {} staked tokens", amount);
    if forfeited > 0 {
        msg!("Unwithdrawn reward forfeited: {}", forfeited);
    }
    msg!("Remaining stakers: {}", staking_config.staker_count);

    emit!(StakeWithdrawn {
        staker,
        amount,
    });

    Ok(())
}
