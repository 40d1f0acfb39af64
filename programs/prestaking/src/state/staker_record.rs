use anchor_lang::prelude::borsh;
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::PrestakingError;

/// Withdrawal flow a staker record is currently in.
///
/// The reward and stake flows never overlap. `StakeCooldown` is only left
/// by closing the record.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CooldownState {
    #[default]
    Idle,
    RewardCooldown { started_at: i64 },
    StakeCooldown { started_at: i64 },
}

impl CooldownState {
    pub const LEN: usize = 1 + 8;
}

/// One staker's locked principal and reward accounting.
///
/// The account exists exactly while the staker has an outstanding stake.
#[account]
#[derive(Debug, Default)]
pub struct StakerRecord {
    pub owner: Pubkey,
    pub config: Pubkey,

    pub start_time: i64,
    pub amount: u64,
    pub active: bool,

    /// Total reward ever credited to this record.
    pub accumulated_reward: u64,
    /// Portion of `accumulated_reward` already moved into a withdrawal.
    pub released_reward: u64,
    pub pending_reward: u64,

    /// Day boundary up to which rewards have been credited.
    pub last_distribution: i64,
    pub cooldown: CooldownState,

    pub bump: u8,
}

impl StakerRecord {
    pub const LEN: usize = 8
        + (32 * 2)
        + 8 + 8 + 1
        + (8 * 3)
        + 8
        + CooldownState::LEN
        + 1;

    pub fn open(&mut self, owner: Pubkey, config: Pubkey, amount: u64, now: i64, bump: u8) {
        *self = Self {
            owner,
            config,
            start_time: now,
            amount,
            last_distribution: now,
            bump,
            ..Self::default()
        };
    }

    pub fn is_open(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn reward_cooldown_start(&self) -> i64 {
        match self.cooldown {
            CooldownState::RewardCooldown { started_at } => started_at,
            _ => 0,
        }
    }

    pub fn stake_cooldown_start(&self) -> i64 {
        match self.cooldown {
            CooldownState::StakeCooldown { started_at } => started_at,
            _ => 0,
        }
    }

    /// Credit `daily_reward` for every whole day since the last distribution.
    ///
    /// The fractional remainder of a day stays uncredited and carries over to
    /// the next call, so repeated calls within one day credit nothing. The
    /// reward total saturates at `u64::MAX` so accrual never blocks a
    /// withdrawal.
    pub fn accrue(&mut self, now: i64, daily_reward: u64) -> u64 {
        let days = now.saturating_sub(self.last_distribution) / SECONDS_PER_DAY;
        if days <= 0 {
            return 0;
        }

        let credited = (days as u64).saturating_mul(daily_reward);
        self.accumulated_reward = self.accumulated_reward.saturating_add(credited);
        // days * SECONDS_PER_DAY <= now - last_distribution
        self.last_distribution += days * SECONDS_PER_DAY;
        self.active = self.active || now.saturating_sub(self.start_time) >= ACTIVATION_PERIOD;

        credited
    }

    /// Snapshot the unreleased reward into `pending_reward` and start the
    /// reward cooldown. Returns the snapshotted amount.
    pub fn start_reward_cooldown(&mut self, now: i64) -> Result<u64> {
        match self.cooldown {
            CooldownState::Idle => {}
            CooldownState::RewardCooldown { .. } => {
                return err!(PrestakingError::RewardCooldownActive)
            }
            CooldownState::StakeCooldown { .. } => {
                return err!(PrestakingError::StakeCooldownActive)
            }
        }
        require!(self.active, PrestakingError::NotActive);

        let pending = self
            .accumulated_reward
            .checked_sub(self.released_reward)
            .ok_or(PrestakingError::MathOverflow)?;
        self.pending_reward = pending;
        self.released_reward = self.accumulated_reward;
        self.cooldown = CooldownState::RewardCooldown { started_at: now };

        Ok(pending)
    }

    /// End an elapsed reward cooldown. Returns the amount to pay out.
    pub fn finish_reward_cooldown(&mut self, now: i64) -> Result<u64> {
        let CooldownState::RewardCooldown { started_at } = self.cooldown else {
            return err!(PrestakingError::RewardCooldownNotStarted);
        };
        require!(
            now.saturating_sub(started_at) >= REWARD_COOLDOWN_PERIOD,
            PrestakingError::RewardCooldownNotElapsed
        );

        let payout = self.pending_reward;
        self.pending_reward = 0;
        self.cooldown = CooldownState::Idle;

        Ok(payout)
    }

    pub fn start_stake_cooldown(&mut self, now: i64) -> Result<()> {
        match self.cooldown {
            CooldownState::Idle => {}
            CooldownState::RewardCooldown { .. } => {
                return err!(PrestakingError::RewardCooldownActive)
            }
            CooldownState::StakeCooldown { .. } => {
                return err!(PrestakingError::StakeCooldownActive)
            }
        }
        require!(
            now.saturating_sub(self.start_time) >= STAKE_LOCK_PERIOD,
            PrestakingError::StakeLocked
        );

        self.cooldown = CooldownState::StakeCooldown { started_at: now };
        Ok(())
    }

    /// End an elapsed stake cooldown, wiping the record. Returns the principal
    /// to hand back.
    pub fn finish_stake_cooldown(&mut self, now: i64) -> Result<u64> {
        let CooldownState::StakeCooldown { started_at } = self.cooldown else {
            return err!(PrestakingError::StakeCooldownNotStarted);
        };
        require!(
            now.saturating_sub(started_at) >= STAKE_COOLDOWN_PERIOD,
            PrestakingError::StakeCooldownNotElapsed
        );

        let amount = self.amount;
        *self = Self::default();

        Ok(amount)
    }
}
