//! PDA derivations for the Prestaking program's accounts.

use anchor_lang::prelude::Pubkey;

use crate::constants::*;

pub fn find_staking_config_pda(staking_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKING_CONFIG_SEED, staking_mint.as_ref()], &crate::ID)
}

pub fn find_staker_record_pda(config: &Pubkey, staker: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[STAKER_RECORD_SEED, config.as_ref(), staker.as_ref()],
        &crate::ID,
    )
}

pub fn find_stake_vault_pda(config: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKE_VAULT_SEED, config.as_ref()], &crate::ID)
}

pub fn find_treasury_vault_pda(config: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY_VAULT_SEED, config.as_ref()], &crate::ID)
}
