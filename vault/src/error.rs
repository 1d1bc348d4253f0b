//! Error types for the bridge vault contract
//!
//! Every variant aborts the whole operation; the transaction that carried it
//! commits nothing.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

use crate::state::Breaker;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("Vault is already initialized")]
    AlreadyInitialized,

    #[error("Vault is not initialized")]
    NotInitialized,

    // ========================================================================
    // Authorization & Account Errors
    // ========================================================================

    #[error("Address mismatch: expected the {role}")]
    AddressMismatch { role: String },

    #[error("Asset mismatch: expected {expected}, got {got}")]
    AssetMismatch { expected: String, got: String },

    #[error("Owner mismatch: expected {expected}, got {got}")]
    OwnerMismatch { expected: String, got: String },

    // ========================================================================
    // Amount Errors
    // ========================================================================

    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance {
        available: Uint128,
        required: Uint128,
    },

    #[error("Deposit amount {amount} not in accepted range [{min}, {max}]")]
    OutOfRange {
        amount: Uint128,
        min: Uint128,
        max: Uint128,
    },

    // ========================================================================
    // Gating Errors
    // ========================================================================

    #[error("Vault is paused for {breaker} operations")]
    Paused { breaker: Breaker },

    #[error("Not whitelisted")]
    NotWhitelisted,

    #[error("Not all fee accounts were provided")]
    MissingFeeAccounts,

    // ========================================================================
    // Allow-List Errors
    // ========================================================================

    #[error("Allow-list entry already exists for {user}")]
    AllowListEntryExists { user: String },

    #[error("Allow-list entry not found for {user}")]
    AllowListEntryNotFound { user: String },
}
