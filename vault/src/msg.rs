//! Message types for the bridge vault contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use common::TokenAccount;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::{AllowListEntry, PauseState, WhitelistState};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
///
/// Fixes the deployment parameters. The vault ledger itself is created later
/// by `ExecuteMsg::Initialize`.
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner authority; the only identity allowed to initialize and configure
    pub owner: String,
    /// CW20 token in which deposit fees are paid
    pub fee_token: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Lifecycle
    // ========================================================================
    /// Create the vault ledger
    ///
    /// Authorization: Owner only. Fails if already initialized.
    Initialize {
        /// CW20 token to custody
        token: String,
        relayer: String,
        fee_collector: String,
        minimum_deposit: Uint128,
        maximum_deposit: Uint128,
        /// Initial flat deposit fee (0 = no fee)
        fee_amount: Uint128,
    },

    // ========================================================================
    // Liquidity
    // ========================================================================
    /// Move owner funds into the custodial account
    ///
    /// Authorization: Owner only. `source` must be the owner's own account of
    /// `token`, with an allowance granted to this contract.
    AddLiquidity {
        token: String,
        amount: Uint128,
        source: TokenAccount,
    },

    /// Move custodied funds back to the owner
    ///
    /// Authorization: Owner only.
    RemoveLiquidity {
        token: String,
        amount: Uint128,
        destination: TokenAccount,
    },

    /// Release custodied funds to a user
    ///
    /// Authorization: Relayer only. Gated by the relayer breaker.
    SendFromLiquidity {
        token: String,
        amount: Uint128,
        /// Identity the release is for
        receiver: String,
        /// Receiver's account of the whitelisted token
        receiver_account: TokenAccount,
    },

    /// Deposit funds for release on the external chain
    ///
    /// Authorization: Anyone. Gated by the public breaker, the deposit limits,
    /// the allow-list (when active) and the fee (when non-zero).
    SendToLiquidity {
        token: String,
        amount: Uint128,
        /// Caller's account of the whitelisted token
        source: TokenAccount,
        /// Recipient on the external chain (opaque)
        destination_address: String,
        /// Off-chain correlation reference (opaque)
        destination_reference: String,
        /// Fee accounts, required when the fee amount is non-zero
        fee: Option<FeeContextMsg>,
    },

    // ========================================================================
    // Configuration
    // ========================================================================
    /// Re-target the vault to a new token. Moves no balance.
    ///
    /// Authorization: Owner only
    UpdateWhitelistedMint { token: String },

    /// Authorization: Owner only
    UpdateRelayer { relayer: String },

    /// Authorization: Owner only
    UpdateFeeCollector { fee_collector: String },

    /// Authorization: Owner only
    SetFeeAmount { fee_amount: Uint128 },

    /// Authorization: Owner only
    SetDepositLimits {
        minimum_deposit: Uint128,
        maximum_deposit: Uint128,
    },

    // ========================================================================
    // Pause Controller
    // ========================================================================
    /// Pause user deposits (owner only)
    PublicPause {},

    /// Resume user deposits (owner only)
    PublicUnpause {},

    /// Pause relayer releases (owner only)
    RelayerPause {},

    /// Resume relayer releases (owner only)
    RelayerUnpause {},

    // ========================================================================
    // Allow-List
    // ========================================================================
    /// Authorization: Owner only
    AddToWhitelist { user: String },

    /// Authorization: Owner only
    RemoveFromWhitelist { user: String },

    /// Require allow-list entries for deposits (owner only)
    SetWhitelistActive {},

    /// Stop requiring allow-list entries; entries are kept (owner only)
    SetWhitelistInactive {},
}

/// Fee accounts as they arrive on the wire.
///
/// Every part is required; the handler converts this into a `FeeContext` as a
/// unit and rejects it whole if any part is missing.
#[cw_serde]
#[derive(Default)]
pub struct FeeContextMsg {
    pub fee_collector: Option<String>,
    pub fee_token: Option<String>,
    /// Depositor's account of the fee token
    pub payer_account: Option<TokenAccount>,
    /// Fee collector's account of the fee token
    pub collector_account: Option<TokenAccount>,
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Full vault ledger
    #[returns(VaultResponse)]
    Vault {},

    /// Deployment parameters
    #[returns(DeploymentResponse)]
    Deployment {},

    /// Custodial account with mirrored and real balance
    #[returns(CustodialAccountResponse)]
    CustodialAccount {},

    /// Allow-list entry for a user
    #[returns(WhitelistEntryResponse)]
    WhitelistEntry { user: String },

    /// Whether a user may deposit under the current allow-list setting
    #[returns(IsWhitelistedResponse)]
    IsWhitelisted { user: String },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct VaultResponse {
    pub owner_authority: Addr,
    pub relayer: Addr,
    pub fee_collector: Addr,
    pub whitelisted_token: Addr,
    pub custodial_account: TokenAccount,
    pub vault_amount: Uint128,
    pub minimum_deposit: Uint128,
    pub maximum_deposit: Uint128,
    pub fee_amount: Uint128,
    pub public_state: PauseState,
    pub relayer_state: PauseState,
    pub whitelist_state: WhitelistState,
}

#[cw_serde]
pub struct DeploymentResponse {
    pub owner: Addr,
    pub fee_token: Addr,
    pub initialized: bool,
}

#[cw_serde]
pub struct CustodialAccountResponse {
    pub account: TokenAccount,
    /// Mirrored balance
    pub vault_amount: Uint128,
    /// Real balance reported by the token
    pub balance: Uint128,
}

#[cw_serde]
pub struct WhitelistEntryResponse {
    /// Derived entry key (0x-prefixed hex)
    pub key: String,
    pub entry: Option<AllowListEntry>,
}

#[cw_serde]
pub struct IsWhitelistedResponse {
    pub user: Addr,
    /// An entry exists for the user
    pub whitelisted: bool,
    /// Entries are currently enforced on deposits
    pub enforced: bool,
}
