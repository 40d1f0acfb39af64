//! Update distribution instruction handler.
//!
//! Owner-triggered pass that credits elapsed-day rewards to a batch of staker
//! records. The records are passed as remaining accounts, so the owner pages
//! through all stakers in batches of at most `MAX_DISTRIBUTION_BATCH`.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::PrestakingError;
use crate::events::DistributionUpdated;
use crate::state::{StakerRecord, StakingConfig};

/// Accounts required for a distribution pass.
///
/// Remaining accounts: writable `StakerRecord` accounts of this config.
#[derive(Accounts)]
pub struct UpdateDistribution<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [STAKING_CONFIG_SEED, staking_config.staking_mint.as_ref()],
        bump = staking_config.bump,
        has_one = authority @ PrestakingError::Unauthorized
    )]
    pub staking_config: Account<'info, StakingConfig>,
}

/// Credit every record in the batch with its whole elapsed days.
///
/// Records that are closed, foreign, read-only or of another config are logged
/// and skipped; the rest of the batch still commits.
pub fn handler(ctx: Context<UpdateDistribution>) -> Result<()> {
    let records = ctx.remaining_accounts;
    check_batch_size(records.len())?;

    let now = Clock::get()?.unix_timestamp;
    let config_key = ctx.accounts.staking_config.key();
    let daily_reward = ctx.accounts.staking_config.daily_reward;

    let mut processed: u32 = 0;
    let mut skipped: u32 = 0;
    let mut credited: u64 = 0;

    for info in records.iter() {
        match distribute_to(info, &config_key, now, daily_reward) {
            Ok(amount) => {
                processed += 1;
                credited = credited.saturating_add(amount);
            }
            Err(err) => {
                skipped += 1;
                msg!("Skipping record {}: {}", info.key, err);
            }
        }
    }

    msg!("Distribution pass: {} processed, {} skipped", processed, skipped);
    msg!("Reward credited: {}", credited);

    emit!(DistributionUpdated {
        processed,
        skipped,
        credited,
    });

    Ok(())
}

fn check_batch_size(len: usize) -> Result<()> {
    require!(
        len <= MAX_DISTRIBUTION_BATCH,
        PrestakingError::DistributionBatchTooLarge
    );
    Ok(())
}

fn distribute_to(
    info: &AccountInfo<'_>,
    config: &Pubkey,
    now: i64,
    daily_reward: u64,
) -> Result<u64> {
    require_keys_eq!(*info.owner, crate::ID, ErrorCode::AccountOwnedByWrongProgram);
    require!(info.is_writable, ErrorCode::ConstraintMut);

    let mut data = info.try_borrow_mut_data()?;
    let mut record = StakerRecord::try_deserialize(&mut &data[..])?;
    require_keys_eq!(record.config, *config, ErrorCode::ConstraintHasOne);

    let amount = record.accrue(now, daily_reward);
    let mut writer: &mut [u8] = &mut data[..];
    record.try_serialize(&mut writer)?;

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_600_000_000;
    const DAILY: u64 = 50;

    fn record_data(config: Pubkey) -> Vec<u8> {
        let mut record = StakerRecord::default();
        record.open(Pubkey::new_unique(), config, 250_000, T0, 255);

        let mut data = Vec::with_capacity(StakerRecord::LEN);
        record.try_serialize(&mut data).unwrap();
        data.resize(StakerRecord::LEN, 0);
        data
    }

    fn read_record(data: &[u8]) -> StakerRecord {
        StakerRecord::try_deserialize(&mut &data[..]).unwrap()
    }

    #[test]
    fn test_batch_size_ceiling() {
        check_batch_size(0).unwrap();
        check_batch_size(MAX_DISTRIBUTION_BATCH).unwrap();
        assert_eq!(
            check_batch_size(MAX_DISTRIBUTION_BATCH + 1).unwrap_err(),
            PrestakingError::DistributionBatchTooLarge.into()
        );
    }

    #[test]
    fn test_distribute_credits_and_writes_back() {
        let key = Pubkey::new_unique();
        let config = Pubkey::new_unique();
        let owner = crate::ID;
        let mut lamports = 0;
        let mut data = record_data(config);

        let credited = {
            let info = AccountInfo::new(
                &key, false, true, &mut lamports, &mut data, &owner, false, 0,
            );
            distribute_to(&info, &config, T0 + 3 * SECONDS_PER_DAY + 10, DAILY).unwrap()
        };

        assert_eq!(credited, 3 * DAILY);
        let record = read_record(&data);
        assert_eq!(record.accumulated_reward, 3 * DAILY);
        assert_eq!(record.last_distribution, T0 + 3 * SECONDS_PER_DAY);
        assert!(record.active);
    }

    #[test]
    fn test_distribute_twice_in_one_day_credits_once() {
        let key = Pubkey::new_unique();
        let config = Pubkey::new_unique();
        let owner = crate::ID;
        let mut lamports = 0;
        let mut data = record_data(config);

        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);
        let now = T0 + 2 * SECONDS_PER_DAY;
        assert_eq!(distribute_to(&info, &config, now, DAILY).unwrap(), 2 * DAILY);
        assert_eq!(distribute_to(&info, &config, now + 60, DAILY).unwrap(), 0);
    }

    #[test]
    fn test_distribute_skips_foreign_owner() {
        let key = Pubkey::new_unique();
        let config = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data = record_data(config);
        let before = data.clone();

        let err = {
            let info = AccountInfo::new(
                &key, false, true, &mut lamports, &mut data, &owner, false, 0,
            );
            distribute_to(&info, &config, T0 + 5 * SECONDS_PER_DAY, DAILY).unwrap_err()
        };

        assert_eq!(err, ErrorCode::AccountOwnedByWrongProgram.into());
        assert_eq!(data, before);
    }

    #[test]
    fn test_distribute_skips_read_only_record() {
        let key = Pubkey::new_unique();
        let config = Pubkey::new_unique();
        let owner = crate::ID;
        let mut lamports = 0;
        let mut data = record_data(config);

        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);
        assert_eq!(
            distribute_to(&info, &config, T0 + 5 * SECONDS_PER_DAY, DAILY).unwrap_err(),
            ErrorCode::ConstraintMut.into()
        );
    }

    #[test]
    fn test_distribute_skips_record_of_another_config() {
        let key = Pubkey::new_unique();
        let config = Pubkey::new_unique();
        let owner = crate::ID;
        let mut lamports = 0;
        let mut data = record_data(Pubkey::new_unique());
        let before = data.clone();

        let err = {
            let info = AccountInfo::new(
                &key, false, true, &mut lamports, &mut data, &owner, false, 0,
            );
            distribute_to(&info, &config, T0 + 5 * SECONDS_PER_DAY, DAILY).unwrap_err()
        };

        assert_eq!(err, ErrorCode::ConstraintHasOne.into());
        assert_eq!(data, before);
    }

    #[test]
    fn test_distribute_skips_other_account_types() {
        let key = Pubkey::new_unique();
        let config = Pubkey::new_unique();
        let owner = crate::ID;
        let mut lamports = 0;

        let mut data = Vec::with_capacity(StakingConfig::LEN);
        StakingConfig::default().try_serialize(&mut data).unwrap();
        data.resize(StakingConfig::LEN, 0);

        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);
        assert_eq!(
            distribute_to(&info, &config, T0 + 5 * SECONDS_PER_DAY, DAILY).unwrap_err(),
            ErrorCode::AccountDiscriminatorMismatch.into()
        );

        let mut closed = vec![0u8; StakerRecord::LEN];
        let mut lamports = 0;
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut closed, &owner, false, 0);
        assert!(distribute_to(&info, &config, T0 + 5 * SECONDS_PER_DAY, DAILY).is_err());
    }
}
