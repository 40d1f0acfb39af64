/// Fund treasury instruction handler.
///
/// Handles depositing reward tokens into the treasury vault.
///
/// ## Security Guarantees
/// - Treasury validation ensures correct PDA
/// - Mint validation prevents wrong token deposits
/// - Anyone can fund (no owner restriction)

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::PrestakingError;
use crate::state::StakingConfig;

/// Accounts required for funding the treasury.
#[derive(Accounts)]
pub struct FundTreasury<'info> {
    #[account(mut)]
    pub funder: Signer<'info>,

    #[account(
        seeds = [STAKING_CONFIG_SEED, staking_config.staking_mint.as_ref()],
        bump = staking_config.bump,
        has_one = treasury_vault,
        has_one = staking_mint @ PrestakingError::MintMismatch
    )]
    pub staking_config: Account<'info, StakingConfig>,

    pub staking_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = funder_token_account.mint == staking_mint.key() @ PrestakingError::MintMismatch,
        constraint = funder_token_account.owner == funder.key()
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub treasury_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Deposit `amount` reward tokens into the treasury.
pub fn handler(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, PrestakingError::ZeroAmount);

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.treasury_vault.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    ctx.accounts.treasury_vault.reload()?;

    msg!("Treasury funded with {} tokens", amount);
    msg!("New treasury balance: {}", ctx.accounts.treasury_vault.amount);
    msg!("Funder: {}", ctx.accounts.funder.key());

    Ok(())
}
