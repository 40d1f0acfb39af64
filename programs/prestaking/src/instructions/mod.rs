//! Instruction handlers for the Prestaking program.
//!
//! This module contains all instruction implementations.

pub mod admin;
pub mod cooldown;
pub mod fund_treasury;
pub mod initialize;
pub mod stake;
pub mod staker_info;
pub mod update_distribution;
pub mod withdraw_reward;
pub mod withdraw_stake;

pub use admin::*;
pub use cooldown::*;
pub use fund_treasury::*;
pub use initialize::*;
pub use stake::*;
pub use staker_info::*;
pub use update_distribution::*;
pub use withdraw_reward::*;
pub use withdraw_stake::*;
