use anchor_lang::prelude::*;

#[event]
pub struct Staked {
    pub staker: Pubkey,
    pub amount: u64,
    pub start_time: i64,
}

#[event]
pub struct RewardWithdrawalStarted {
    pub staker: Pubkey,
    pub pending_reward: u64,
    pub started_at: i64,
}

#[event]
pub struct RewardWithdrawn {
    pub staker: Pubkey,
    pub amount: u64,
}

#[event]
pub struct StakeWithdrawalStarted {
    pub staker: Pubkey,
    pub started_at: i64,
}

#[event]
pub struct StakeWithdrawn {
    pub staker: Pubkey,
    pub amount: u64,
}

#[event]
pub struct DistributionUpdated {
    pub processed: u32,
    pub skipped: u32,
    pub credited: u64,
}

#[event]
pub struct ParametersUpdated {
    pub min_stake: u64,
    pub max_stake: u64,
    pub daily_reward: u64,
}
