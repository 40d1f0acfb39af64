//! State structures for the Prestaking program.
//!
//! This module defines all account structures used to store program state.

pub mod staker_record;
pub mod staking_config;

pub use staker_record::*;
pub use staking_config::*;
