//! Lifecycle and pause handlers.
//!
//! This module handles:
//! - Vault initialization (once, owner only)
//! - Public and relayer breakers

use common::query_balance;
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::access::{ensure_owner, ensure_owner_vault};
use crate::error::ContractError;
use crate::state::{Breaker, PauseState, VaultState, WhitelistState, VAULT};

// ============================================================================
// Initialize
// ============================================================================

/// Create the vault ledger.
///
/// The custodial account is this contract's balance of `token`; querying it
/// up front rejects addresses that are not CW20 tokens.
#[allow(clippy::too_many_arguments)]
pub fn execute_initialize(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    relayer: String,
    fee_collector: String,
    minimum_deposit: Uint128,
    maximum_deposit: Uint128,
    fee_amount: Uint128,
) -> Result<Response, ContractError> {
    let deployment = ensure_owner(deps.storage, &info.sender)?;

    if VAULT.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    let vault = VaultState {
        owner_authority: deployment.owner,
        relayer: deps.api.addr_validate(&relayer)?,
        fee_collector: deps.api.addr_validate(&fee_collector)?,
        whitelisted_token: deps.api.addr_validate(&token)?,
        vault_amount: Uint128::zero(),
        minimum_deposit,
        maximum_deposit,
        fee_amount,
        public_state: PauseState::Active,
        relayer_state: PauseState::Active,
        whitelist_state: WhitelistState::Inactive,
    };

    let custodial = vault.custodial_account(&env.contract.address);
    query_balance(&deps.querier, &custodial)?;

    VAULT.save(deps.storage, &vault)?;

    Ok(Response::new()
        .add_attribute("method", "initialize")
        .add_attribute("from", info.sender)
        .add_attribute("whitelisted_token", vault.whitelisted_token)
        .add_attribute("relayer", vault.relayer)
        .add_attribute("fee_collector", vault.fee_collector)
        .add_attribute("vault", custodial.owner)
        .add_attribute("vault_amount", vault.vault_amount)
        .add_attribute("minimum_deposit", minimum_deposit)
        .add_attribute("maximum_deposit", maximum_deposit)
        .add_attribute("fee_amount", fee_amount))
}

// ============================================================================
// Pause Controller
// ============================================================================

/// Set one breaker. Owner only; the relayer can never toggle either breaker,
/// including the one gating its own releases.
pub fn execute_set_breaker(
    deps: DepsMut,
    info: MessageInfo,
    breaker: Breaker,
    state: PauseState,
) -> Result<Response, ContractError> {
    let mut vault = ensure_owner_vault(deps.storage, &info.sender)?;

    vault.set_breaker(breaker, state);
    VAULT.save(deps.storage, &vault)?;

    let method = match (breaker, state) {
        (Breaker::Public, PauseState::Paused) => "public_pause",
        (Breaker::Public, PauseState::Active) => "public_unpause",
        (Breaker::Relayer, PauseState::Paused) => "relayer_pause",
        (Breaker::Relayer, PauseState::Active) => "relayer_unpause",
    };

    Ok(Response::new()
        .add_attribute("method", method)
        .add_attribute("from", info.sender))
}
