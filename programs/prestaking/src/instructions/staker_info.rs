//! Read accessor for a staker's record.

use anchor_lang::prelude::borsh;
use anchor_lang::prelude::*;

use crate::pda::find_staker_record_pda;
use crate::state::{StakerRecord, StakingConfig};

/// Snapshot of a staker record returned to callers.
///
/// `exists` is false for an account that never staked or whose stake was
/// withdrawn; every other field is then zero.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct StakerView {
    pub exists: bool,
    pub start_time: i64,
    pub amount: u64,
    pub active: bool,
    pub accumulated_reward: u64,
    pub pending_reward: u64,
    pub reward_cooldown_start: i64,
    pub stake_cooldown_start: i64,
}

impl From<&StakerRecord> for StakerView {
    fn from(record: &StakerRecord) -> Self {
        Self {
            exists: record.is_open(),
            start_time: record.start_time,
            amount: record.amount,
            active: record.active,
            accumulated_reward: record.accumulated_reward,
            pending_reward: record.pending_reward,
            reward_cooldown_start: record.reward_cooldown_start(),
            stake_cooldown_start: record.stake_cooldown_start(),
        }
    }
}

#[derive(Accounts)]
pub struct GetStakerInfo<'info> {
    pub staking_config: Account<'info, StakingConfig>,

    /// CHECK: may not exist; address is checked against the derived PDA.
    pub staker_record: UncheckedAccount<'info>,
}

/// Return the record of `staker`, or an empty view if they have none.
pub fn handler(ctx: Context<GetStakerInfo>, staker: Pubkey) -> Result<StakerView> {
    let (expected, _) = find_staker_record_pda(&ctx.accounts.staking_config.key(), &staker);
    require_keys_eq!(
        ctx.accounts.staker_record.key(),
        expected,
        ErrorCode::ConstraintSeeds
    );

    view_from_account(&ctx.accounts.staker_record.to_account_info())
}

/// A closed or never-created record reads as the empty view.
fn view_from_account(info: &AccountInfo<'_>) -> Result<StakerView> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(StakerView::default());
    }

    let record = StakerRecord::try_deserialize(&mut &info.try_borrow_data()?[..])?;
    Ok(StakerView::from(&record))
}
