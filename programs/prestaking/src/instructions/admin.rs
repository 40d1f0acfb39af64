/// Admin instruction handlers.
///
/// Handles owner-only updates of the staking parameters.
///
/// ## Security Guarantees
/// - All admin functions require signer == config.authority
/// - PDA validation ensures correct config
/// - `min_stake <= max_stake` holds after every update

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::PrestakingError;
use crate::events::ParametersUpdated;
use crate::state::StakingConfig;

/// Accounts required for admin operations.
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The config owner.
    /// SECURITY: Must be signer AND match config.authority.
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKING_CONFIG_SEED, staking_config.staking_mint.as_ref()],
        bump = staking_config.bump,
        has_one = authority @ PrestakingError::Unauthorized
    )]
    pub staking_config: Account<'info, StakingConfig>,
}

fn parameters_updated(staking_config: &StakingConfig) {
    emit!(ParametersUpdated {
        min_stake: staking_config.min_stake,
        max_stake: staking_config.max_stake,
        daily_reward: staking_config.daily_reward,
    });
}

/// Set the minimum stake.
///
/// Fails if `value` is above the current maximum. Existing stakes are
/// unaffected.
pub fn update_minimum_stake_handler(ctx: Context<AdminControl>, value: u64) -> Result<()> {
    let staking_config = &mut ctx.accounts.staking_config;
    let old_value = staking_config.min_stake;

    staking_config.set_minimum_stake(value)?;

    msg!("Minimum stake updated: {} -> {}", old_value, value);
    parameters_updated(staking_config);

    Ok(())
}

/// Set the maximum stake.
///
/// Fails if `value` is below the current minimum.
pub fn update_maximum_stake_handler(ctx: Context<AdminControl>, value: u64) -> Result<()> {
    let staking_config = &mut ctx.accounts.staking_config;
    let old_value = staking_config.max_stake;

    staking_config.set_maximum_stake(value)?;

    msg!("Maximum stake updated: {} -> {}", old_value, value);
    parameters_updated(staking_config);

    Ok(())
}

/// Set the flat per-day reward credited to every active staker.
pub fn update_daily_reward_handler(ctx: Context<AdminControl>, value: u64) -> Result<()> {
    let staking_config = &mut ctx.accounts.staking_config;
    let old_value = staking_config.daily_reward;

    staking_config.set_daily_reward(value);

    msg!("Daily reward updated: {} -> {}", old_value, value);
    parameters_updated(staking_config);

    Ok(())
}

/// Transfer ownership of the config to a new address.
pub fn transfer_authority_handler(
    ctx: Context<AdminControl>,
    new_authority: Pubkey,
) -> Result<()> {
    require!(
        new_authority != Pubkey::default(),
        PrestakingError::InvalidAuthority
    );

    let staking_config = &mut ctx.accounts.staking_config;
    let old_authority = staking_config.authority;
    staking_config.authority = new_authority;

    msg!("Authority transferred: {} -> {}", old_authority, new_authority);

    Ok(())
}
