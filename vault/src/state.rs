//! State definitions for the bridge vault contract
//!
//! The vault keeps one ledger record per deployment plus any number of
//! allow-list entries. Balances themselves live on the CW20 token; the ledger
//! only mirrors the custodial balance in `vault_amount`.

use std::fmt;

use common::TokenAccount;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdError, Uint128};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

// ============================================================================
// Contract Info
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:bridge-vault";

/// Contract version
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Flags
// ============================================================================

/// State of one pause breaker
#[cw_serde]
#[derive(Copy)]
pub enum PauseState {
    Active,
    Paused,
}

impl PauseState {
    pub fn is_paused(&self) -> bool {
        matches!(self, PauseState::Paused)
    }
}

/// Whether deposits require an allow-list entry
#[cw_serde]
#[derive(Copy)]
pub enum WhitelistState {
    Active,
    Inactive,
}

impl WhitelistState {
    pub fn is_active(&self) -> bool {
        matches!(self, WhitelistState::Active)
    }
}

/// The two independent breakers
#[cw_serde]
#[derive(Copy)]
pub enum Breaker {
    /// Gates user deposits
    Public,
    /// Gates relayer releases
    Relayer,
}

impl fmt::Display for Breaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breaker::Public => write!(f, "public"),
            Breaker::Relayer => write!(f, "relayer"),
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// Fixed deployment parameters, written at instantiation
#[cw_serde]
pub struct Deployment {
    /// Owner authority; the only identity allowed to initialize the vault
    pub owner: Addr,
    /// CW20 token in which deposit fees are paid
    pub fee_token: Addr,
}

/// The vault ledger
#[cw_serde]
pub struct VaultState {
    /// Owner authority (copied from the deployment, never changed)
    pub owner_authority: Addr,
    /// Identity allowed to release liquidity
    pub relayer: Addr,
    /// Destination identity for deposit fees
    pub fee_collector: Addr,
    /// The single CW20 token this vault custodies
    pub whitelisted_token: Addr,
    /// Mirror of the custodial account's real balance
    pub vault_amount: Uint128,
    /// Inclusive lower bound of a single deposit
    pub minimum_deposit: Uint128,
    /// Inclusive upper bound of a single deposit
    pub maximum_deposit: Uint128,
    /// Flat fee per deposit, in the deployment's fee token (0 = no fee)
    pub fee_amount: Uint128,
    /// Gates `SendToLiquidity`
    pub public_state: PauseState,
    /// Gates `SendFromLiquidity`
    pub relayer_state: PauseState,
    /// When active, deposits require an allow-list entry
    pub whitelist_state: WhitelistState,
}

impl VaultState {
    /// The account physically holding custodied funds: this contract's balance
    /// of the whitelisted token. Re-derived on every call so it follows
    /// `whitelisted_token`.
    pub fn custodial_account(&self, vault: &Addr) -> TokenAccount {
        TokenAccount::new(vault.as_str(), self.whitelisted_token.as_str())
    }

    pub fn breaker(&self, breaker: Breaker) -> PauseState {
        match breaker {
            Breaker::Public => self.public_state,
            Breaker::Relayer => self.relayer_state,
        }
    }

    pub fn set_breaker(&mut self, breaker: Breaker, state: PauseState) {
        match breaker {
            Breaker::Public => self.public_state = state,
            Breaker::Relayer => self.relayer_state = state,
        }
    }

    pub fn deposit_in_range(&self, amount: Uint128) -> bool {
        self.minimum_deposit <= amount && amount <= self.maximum_deposit
    }

    /// Record funds entering the custodial account.
    pub fn credit(&mut self, amount: Uint128) -> Result<(), ContractError> {
        self.vault_amount = self
            .vault_amount
            .checked_add(amount)
            .map_err(StdError::from)?;
        Ok(())
    }

    /// Record funds leaving the custodial account. Never saturates.
    pub fn debit(&mut self, amount: Uint128) -> Result<(), ContractError> {
        let available = self.vault_amount;
        self.vault_amount =
            available
                .checked_sub(amount)
                .map_err(|_| ContractError::InsufficientBalance {
                    available,
                    required: amount,
                })?;
        Ok(())
    }
}

/// Allow-list entry; its existence is the whole check
#[cw_serde]
pub struct AllowListEntry {
    /// The user this entry authorizes
    pub user: Addr,
    /// The vault contract owning this entry
    pub vault: Addr,
}

// ============================================================================
// Storage
// ============================================================================

/// Deployment parameters
pub const DEPLOYMENT: Item<Deployment> = Item::new("deployment");

/// The vault ledger (absent until `Initialize`)
pub const VAULT: Item<VaultState> = Item::new("vault_state");

/// Allow-list entries keyed by the derived 32-byte entry key
pub const ALLOW_LIST: Map<&[u8], AllowListEntry> = Map::new("allow_list");
