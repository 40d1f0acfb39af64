//! Stake instruction handler.
//!
//! Locks the caller's approved tokens in the stake vault and opens their
//! staker record.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::PrestakingError;
use crate::events::Staked;
use crate::state::{StakerRecord, StakingConfig};

/// Accounts required for staking.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The user staking tokens.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The staking config. Also the delegate the user approved.
    #[account(
        mut,
        seeds = [STAKING_CONFIG_SEED, staking_config.staking_mint.as_ref()],
        bump = staking_config.bump,
        has_one = stake_vault,
        has_one = staking_mint
    )]
    pub staking_config: Account<'info, StakingConfig>,

    /// User's staker record (recreated after a completed stake withdrawal).
    #[account(
        init_if_needed,
        payer = user,
        space = StakerRecord::LEN,
        seeds = [STAKER_RECORD_SEED, staking_config.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub staker_record: Account<'info, StakerRecord>,

    pub staking_mint: Account<'info, Mint>,

    /// User's token account carrying the approval.
    #[account(
        mut,
        constraint = user_token_account.mint == staking_mint.key() @ PrestakingError::MintMismatch,
        constraint = user_token_account.owner == user.key()
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Vault holding locked principal.
    #[account(mut)]
    pub stake_vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

/// Stake the caller's approved tokens.
///
/// The locked amount is the allowance granted to the config PDA, capped at
/// the maximum stake. The tokens are pulled with the config PDA acting as
/// delegate, so the user never signs a transfer for a specific amount.
///
/// # Errors
/// - `AlreadyStaked` if the caller has an outstanding stake
/// - `InsufficientApproval` if the allowance is below the minimum stake
/// - `StakingNotStarted` before the configured launch time
pub fn handler(ctx: Context<Stake>) -> Result<()> {
    let clock = Clock::get()?;
    let staking_config = &ctx.accounts.staking_config;

    staking_config.ensure_open(clock.unix_timestamp)?;
    require!(
        !ctx.accounts.staker_record.is_open(),
        PrestakingError::AlreadyStaked
    );

    let allowance = approved_allowance(&ctx.accounts.user_token_account, &staking_config.key());
    let amount = staking_config.stake_amount_for(allowance)?;

    let config_key = staking_config.key();
    let staking_mint_key = staking_config.staking_mint;
    let config_bump = staking_config.bump;

    // Commit state before the outgoing CPI
    let user_key = ctx.accounts.user.key();
    ctx.accounts.staker_record.open(
        user_key,
        config_key,
        amount,
        clock.unix_timestamp,
        ctx.bumps.staker_record,
    );
    let staking_config = &mut ctx.accounts.staking_config;
    staking_config.record_stake(amount)?;

    let seeds = &[STAKING_CONFIG_SEED, staking_mint_key.as_ref(), &[config_bump]];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.stake_vault.to_account_info(),
        authority: ctx.accounts.staking_config.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, amount)?;

    msg!("Staked {} tokens (allowance {})", amount, allowance);
    msg!("Total staked: {}", ctx.accounts.staking_config.total_staked);

    emit!(Staked {
        staker: user_key,
        amount,
        start_time: clock.unix_timestamp,
    });

    Ok(())
}

/// Tokens `account` lets `delegate` move. An approval granted to anyone else
/// counts as zero.
fn approved_allowance(account: &TokenAccount, delegate: &Pubkey) -> u64 {
    if account.delegate == COption::Some(*delegate) {
        account.delegated_amount
    } else {
        0
    }
}
