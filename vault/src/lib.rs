//! Bridge Vault Contract - Custodial Token Vault for a Cross-Chain Bridge
//!
//! The vault holds a single whitelisted CW20 token on behalf of the bridge.
//! Users deposit into it to be paid out on the external chain, and a trusted
//! relayer releases from it when funds arrive from the other side.
//!
//! # Roles
//! - Owner authority: initializes, configures, pauses, manages liquidity and
//!   the allow-list
//! - Relayer: releases custodied funds to users
//! - Anyone: deposits (subject to breakers, limits, allow-list and fee)
//!
//! # Accounting
//! `vault_amount` mirrors the custodial balance. Every change to it is saved in
//! the same response that dispatches the matching CW20 transfer, so the mirror
//! and the real balance commit or revert together.

pub mod access;
pub mod contract;
pub mod error;
mod execute;
pub mod fee_manager;
pub mod hash;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::hash::{allow_list_key, keccak256};
pub use crate::state::{Breaker, PauseState, WhitelistState};
