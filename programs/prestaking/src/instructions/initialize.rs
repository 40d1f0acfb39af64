/// Initialize instruction handler.
///
/// Creates the staking config for a mint together with its stake and
/// treasury vaults.
///
/// ## Security Guarantees
/// - Both vaults are PDAs with the config PDA as token authority
/// - Mint address is locked to config state permanently
/// - Stake bounds validated before storage

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::PrestakingError;
use crate::events::ParametersUpdated;
use crate::state::StakingConfig;

/// Accounts required for config initialization.
///
/// ## Security Notes
/// - `stake_vault` and `treasury_vault` are PDAs with `staking_config` as authority
/// - The config PDA doubles as the delegate stakers approve before staking
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The owner that will control the staking parameters.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The staking config account to be created.
    /// SECURITY: PDA derived from STAKING_CONFIG_SEED + mint ensures one config per token.
    #[account(
        init,
        payer = authority,
        space = StakingConfig::LEN,
        seeds = [STAKING_CONFIG_SEED, staking_mint.key().as_ref()],
        bump
    )]
    pub staking_config: Account<'info, StakingConfig>,

    /// The mint of the staked token.
    pub staking_mint: Account<'info, Mint>,

    /// The vault that will hold locked principal.
    #[account(
        init,
        payer = authority,
        seeds = [STAKE_VAULT_SEED, staking_config.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = staking_config
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    /// The vault that will hold reward funds.
    #[account(
        init,
        payer = authority,
        seeds = [TREASURY_VAULT_SEED, staking_config.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = staking_config
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

/// Initialize a new staking config.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
/// * `min_stake` - Smallest amount a staker may lock
/// * `max_stake` - Largest amount a staker may lock
/// * `daily_reward` - Flat reward credited per whole day to each staker
/// * `launch_time` - Time staking opens, defaults to now
pub fn handler(
    ctx: Context<Initialize>,
    min_stake: u64,
    max_stake: u64,
    daily_reward: u64,
    launch_time: Option<i64>,
) -> Result<()> {
    require!(min_stake <= max_stake, PrestakingError::InvalidStakeBounds);

    let staking_config = &mut ctx.accounts.staking_config;
    let clock = Clock::get()?;

    staking_config.authority = ctx.accounts.authority.key();
    staking_config.staking_mint = ctx.accounts.staking_mint.key();
    staking_config.stake_vault = ctx.accounts.stake_vault.key();
    staking_config.treasury_vault = ctx.accounts.treasury_vault.key();
    staking_config.min_stake = min_stake;
    staking_config.max_stake = max_stake;
    staking_config.daily_reward = daily_reward;
    staking_config.total_staked = 0;
    staking_config.staker_count = 0;
    staking_config.launch_time = launch_time.unwrap_or(clock.unix_timestamp);

    staking_config.bump = ctx.bumps.staking_config;
    staking_config.vault_bump = ctx.bumps.stake_vault;
    staking_config.treasury_bump = ctx.bumps.treasury_vault;

    msg!("Prestaking config initialized");
    msg!("Owner: {}", ctx.accounts.authority.key());
    msg!("Mint: {}", ctx.accounts.staking_mint.key());
    msg!("Stake bounds: [{}, {}]", min_stake, max_stake);
    msg!("Daily reward: {}", daily_reward);
    msg!("Launch time: {}", staking_config.launch_time);

    emit!(ParametersUpdated {
        min_stake,
        max_stake,
        daily_reward,
    });

    Ok(())
}
