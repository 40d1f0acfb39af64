//! Withdraw reward instruction handler.
//!
//! Pays out the reward snapshotted by `start_withdraw_reward` once the
//! reward cooldown has elapsed.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::PrestakingError;
use crate::events::RewardWithdrawn;
use crate::state::{StakerRecord, StakingConfig};

/// Accounts required for finalizing a reward withdrawal.
#[derive(Accounts)]
pub struct WithdrawReward<'info> {
    pub user: Signer<'info>,

    #[account(
        seeds = [STAKING_CONFIG_SEED, staking_config.staking_mint.as_ref()],
        bump = staking_config.bump,
        has_one = treasury_vault,
        has_one = staking_mint
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

    pub staking_mint: Account<'info, Mint>,

    /// User's token account for receiving the reward.
    #[account(
        mut,
        constraint = user_token_account.mint == staking_mint.key() @ PrestakingError::MintMismatch,
        constraint = user_token_account.owner == user.key()
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Vault holding reward funds.
    #[account(mut)]
    pub treasury_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Finalize a reward withdrawal.
///
/// # Errors
/// - `RewardCooldownNotStarted` if no reward cooldown is running
/// - `RewardCooldownNotElapsed` within 7 days of starting it
/// - `InsufficientTreasuryFunds` if the treasury cannot cover the payout
pub fn handler(ctx: Context<WithdrawReward>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let staking_config = &ctx.accounts.staking_config;
    let staker_record = &mut ctx.accounts.staker_record;

    staker_record.accrue(now, staking_config.daily_reward);
    let payout = staker_record.finish_reward_cooldown(now)?;

    if payout > 0 {
        require!(
            ctx.accounts.treasury_vault.amount >= payout,
            PrestakingError::InsufficientTreasuryFunds
        );

        let seeds = &[
            STAKING_CONFIG_SEED,
            staking_config.staking_mint.as_ref(),
            &[staking_config.bump],
        ];
        let signer_seeds = &[&seeds[..]];

        let cpi_accounts = Transfer {
            from: ctx.accounts.treasury_vault.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            authority: staking_config.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, payout)?;
    }

    msg!("Withdrew {} reward tokens", payout);
    msg!("Lifetime reward credited: {}", staker_record.accumulated_reward);

    emit!(RewardWithdrawn {
        staker: staker_record.owner,
        amount: payout,
    });

    Ok(())
}
