//! Configuration handlers.
//!
//! Pure writes to the vault ledger; none of them move funds or validate
//! ranges beyond address well-formedness.

use common::query_balance;
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::access::ensure_owner_vault;
use crate::error::ContractError;
use crate::state::VAULT;

/// Re-target the vault to a new CW20 token.
///
/// No balance is migrated and `vault_amount` is left as is: the owner is
/// expected to drain the old custodial account first.
pub fn execute_update_whitelisted_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    let mut vault = ensure_owner_vault(deps.storage, &info.sender)?;

    let previous = vault.whitelisted_token.clone();
    vault.whitelisted_token = deps.api.addr_validate(&token)?;

    let custodial = vault.custodial_account(&env.contract.address);
    query_balance(&deps.querier, &custodial)?;

    VAULT.save(deps.storage, &vault)?;

    Ok(Response::new()
        .add_attribute("method", "update_whitelisted_mint")
        .add_attribute("from", info.sender)
        .add_attribute("previous_token", previous)
        .add_attribute("whitelisted_token", vault.whitelisted_token))
}

pub fn execute_update_relayer(
    deps: DepsMut,
    info: MessageInfo,
    relayer: String,
) -> Result<Response, ContractError> {
    let mut vault = ensure_owner_vault(deps.storage, &info.sender)?;

    vault.relayer = deps.api.addr_validate(&relayer)?;
    VAULT.save(deps.storage, &vault)?;

    Ok(Response::new()
        .add_attribute("method", "update_relayer")
        .add_attribute("from", info.sender)
        .add_attribute("relayer", vault.relayer))
}

pub fn execute_update_fee_collector(
    deps: DepsMut,
    info: MessageInfo,
    fee_collector: String,
) -> Result<Response, ContractError> {
    let mut vault = ensure_owner_vault(deps.storage, &info.sender)?;

    vault.fee_collector = deps.api.addr_validate(&fee_collector)?;
    VAULT.save(deps.storage, &vault)?;

    Ok(Response::new()
        .add_attribute("method", "update_fee_collector")
        .add_attribute("from", info.sender)
        .add_attribute("fee_collector", vault.fee_collector))
}

pub fn execute_set_fee_amount(
    deps: DepsMut,
    info: MessageInfo,
    fee_amount: Uint128,
) -> Result<Response, ContractError> {
    let mut vault = ensure_owner_vault(deps.storage, &info.sender)?;

    vault.fee_amount = fee_amount;
    VAULT.save(deps.storage, &vault)?;

    Ok(Response::new()
        .add_attribute("method", "set_fee_amount")
        .add_attribute("from", info.sender)
        .add_attribute("fee_amount", fee_amount))
}

/// Set deposit bounds. `minimum_deposit > maximum_deposit` is accepted and
/// simply makes every deposit out of range.
pub fn execute_set_deposit_limits(
    deps: DepsMut,
    info: MessageInfo,
    minimum_deposit: Uint128,
    maximum_deposit: Uint128,
) -> Result<Response, ContractError> {
    let mut vault = ensure_owner_vault(deps.storage, &info.sender)?;

    vault.minimum_deposit = minimum_deposit;
    vault.maximum_deposit = maximum_deposit;
    VAULT.save(deps.storage, &vault)?;

    Ok(Response::new()
        .add_attribute("method", "set_deposit_limits")
        .add_attribute("from", info.sender)
        .add_attribute("minimum_deposit", minimum_deposit)
        .add_attribute("maximum_deposit", maximum_deposit))
}
