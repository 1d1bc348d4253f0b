//! Common - Shared Types and Utilities for the Bridge Vault
//!
//! This package provides the token account type used in vault messages and the
//! thin CW20 helpers the vault uses to read balances and move funds.

pub mod token;

pub use token::{query_balance, transfer_from_msg, transfer_msg, TokenAccount};
