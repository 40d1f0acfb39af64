use anchor_lang::prelude::*;

use crate::error::PrestakingError;

/// Owner-controlled staking parameters and the vault references they govern.
///
/// Bounds are read at stake time only; changing them never touches existing
/// staker records.
#[account]
#[derive(Debug, Default)]
pub struct StakingConfig {
    pub authority: Pubkey,
    pub staking_mint: Pubkey,
    pub stake_vault: Pubkey,
    pub treasury_vault: Pubkey,

    pub min_stake: u64,
    pub max_stake: u64,
    pub daily_reward: u64,
    pub total_staked: u64,
    pub staker_count: u64,

    /// Time from which `stake` is accepted.
    pub launch_time: i64,

    pub vault_bump: u8,
    pub treasury_bump: u8,
    pub bump: u8,
}

impl StakingConfig {
    pub const LEN: usize = 8
        + (32 * 4)
        + (8 * 5)
        + 8
        + 3;

    pub fn ensure_open(&self, now: i64) -> Result<()> {
        require!(now >= self.launch_time, PrestakingError::StakingNotStarted);
        Ok(())
    }

    pub fn set_minimum_stake(&mut self, value: u64) -> Result<()> {
        require!(value <= self.max_stake, PrestakingError::InvalidStakeBounds);
        self.min_stake = value;
        Ok(())
    }

    pub fn set_maximum_stake(&mut self, value: u64) -> Result<()> {
        require!(value >= self.min_stake, PrestakingError::InvalidStakeBounds);
        self.max_stake = value;
        Ok(())
    }

    pub fn set_daily_reward(&mut self, value: u64) {
        self.daily_reward = value;
    }

    /// Amount locked for a staker who approved `allowance` to the config PDA.
    ///
    /// Capped at `max_stake`; anything below `min_stake` is rejected.
    pub fn stake_amount_for(&self, allowance: u64) -> Result<u64> {
        require!(allowance > 0, PrestakingError::InsufficientApproval);
        let amount = allowance.min(self.max_stake);
        require!(amount >= self.min_stake, PrestakingError::InsufficientApproval);
        Ok(amount)
    }

    pub fn record_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(PrestakingError::MathOverflow)?;
        self.staker_count = self.staker_count.saturating_add(1);
        Ok(())
    }

    pub fn release_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(PrestakingError::MathOverflow)?;
        self.staker_count = self.staker_count.saturating_sub(1);
        Ok(())
    }
}
