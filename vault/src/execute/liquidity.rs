//! Liquidity handlers: the only code paths that move funds.
//!
//! Each handler validates everything first, updates `vault_amount`, and returns
//! the CW20 messages in the same response. If a token message fails, the
//! platform reverts the ledger write with it, so the mirror and the real
//! custodial balance always commit together.

use common::{query_balance, transfer_from_msg, transfer_msg, TokenAccount};
use cosmwasm_std::{CosmosMsg, DepsMut, Env, Event, MessageInfo, Response, Uint128};

use crate::access::{ensure_owner_vault, ensure_relayer, load_vault};
use crate::error::ContractError;
use crate::execute::whitelist::is_whitelisted;
use crate::fee_manager::{collect_fee, ensure_account, ensure_asset, ensure_external};
use crate::msg::FeeContextMsg;
use crate::state::{Breaker, DEPLOYMENT, VAULT};

// ============================================================================
// Owner Liquidity
// ============================================================================

/// Move owner funds into the custodial account.
pub fn execute_add_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
    source: TokenAccount,
) -> Result<Response, ContractError> {
    let mut vault = ensure_owner_vault(deps.storage, &info.sender)?;

    ensure_asset(&vault.whitelisted_token, &token)?;
    ensure_account(&source, &info.sender, &vault.whitelisted_token)?;

    let available = query_balance(&deps.querier, &source)?;
    if available < amount {
        return Err(ContractError::InsufficientBalance {
            available,
            required: amount,
        });
    }

    let custodial = vault.custodial_account(&env.contract.address);
    let transfer = transfer_from_msg(
        &vault.whitelisted_token,
        info.sender.as_str(),
        &custodial.owner,
        amount,
    )?;

    vault.credit(amount)?;
    VAULT.save(deps.storage, &vault)?;

    Ok(Response::new()
        .add_messages(transfer)
        .add_attribute("method", "add_liquidity")
        .add_attribute("from", info.sender)
        .add_attribute("to", custodial.owner)
        .add_attribute("amount", amount)
        .add_attribute("vault_amount", vault.vault_amount))
}

/// Move custodied funds back to the owner.
pub fn execute_remove_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
    destination: TokenAccount,
) -> Result<Response, ContractError> {
    let mut vault = ensure_owner_vault(deps.storage, &info.sender)?;

    ensure_asset(&vault.whitelisted_token, &token)?;
    ensure_account(&destination, &info.sender, &vault.whitelisted_token)?;
    ensure_external(&destination.owner, &env.contract.address)?;

    vault.debit(amount)?;

    let custodial = vault.custodial_account(&env.contract.address);
    let transfer = transfer_msg(&vault.whitelisted_token, &destination.owner, amount)?;

    VAULT.save(deps.storage, &vault)?;

    Ok(Response::new()
        .add_messages(transfer)
        .add_attribute("method", "remove_liquidity")
        .add_attribute("from", custodial.owner)
        .add_attribute("to", destination.owner)
        .add_attribute("amount", amount)
        .add_attribute("vault_amount", vault.vault_amount))
}

// ============================================================================
// Relayer Release
// ============================================================================

/// Release custodied funds to a user on the relayer's instruction.
///
/// Emits the `release` event external observers watch for.
pub fn execute_send_from_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
    receiver: String,
    receiver_account: TokenAccount,
) -> Result<Response, ContractError> {
    let mut vault = ensure_relayer(deps.storage, &info.sender)?;

    if vault.breaker(Breaker::Relayer).is_paused() {
        return Err(ContractError::Paused {
            breaker: Breaker::Relayer,
        });
    }

    ensure_asset(&vault.whitelisted_token, &token)?;
    vault.debit(amount)?;

    let receiver = deps.api.addr_validate(&receiver)?;
    ensure_external(receiver.as_str(), &env.contract.address)?;
    ensure_account(&receiver_account, &receiver, &vault.whitelisted_token)?;

    let custodial = vault.custodial_account(&env.contract.address);
    let transfer = transfer_msg(&vault.whitelisted_token, receiver.as_str(), amount)?;

    VAULT.save(deps.storage, &vault)?;

    let release = Event::new("release")
        .add_attribute("from", &custodial.owner)
        .add_attribute("to", receiver.as_str())
        .add_attribute("asset", vault.whitelisted_token.as_str())
        .add_attribute("amount", amount);

    Ok(Response::new()
        .add_messages(transfer)
        .add_event(release)
        .add_attribute("method", "send_from_liquidity")
        .add_attribute("receiver", receiver)
        .add_attribute("amount", amount)
        .add_attribute("vault_amount", vault.vault_amount))
}

// ============================================================================
// User Deposit
// ============================================================================

/// Deposit funds for release on the external chain.
///
/// Check order: initialized, public breaker, deposit range, allow-list,
/// source account, fee. The fee and principal transfers are returned together
/// so neither can land without the other.
#[allow(clippy::too_many_arguments)]
pub fn execute_send_to_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
    source: TokenAccount,
    destination_address: String,
    destination_reference: String,
    fee: Option<FeeContextMsg>,
) -> Result<Response, ContractError> {
    let mut vault = load_vault(deps.storage)?;

    if vault.breaker(Breaker::Public).is_paused() {
        return Err(ContractError::Paused {
            breaker: Breaker::Public,
        });
    }

    if !vault.deposit_in_range(amount) {
        return Err(ContractError::OutOfRange {
            amount,
            min: vault.minimum_deposit,
            max: vault.maximum_deposit,
        });
    }

    if vault.whitelist_state.is_active()
        && !is_whitelisted(deps.storage, &info.sender, &env.contract.address)
    {
        return Err(ContractError::NotWhitelisted);
    }

    ensure_asset(&vault.whitelisted_token, &token)?;
    ensure_account(&source, &info.sender, &vault.whitelisted_token)?;

    let available = query_balance(&deps.querier, &source)?;
    if available < amount {
        return Err(ContractError::InsufficientBalance {
            available,
            required: amount,
        });
    }

    let deployment = DEPLOYMENT.load(deps.storage)?;
    let fee_msg = collect_fee(&deps.querier, &deployment, &vault, &info.sender, fee)?;

    let custodial = vault.custodial_account(&env.contract.address);
    let principal = transfer_from_msg(
        &vault.whitelisted_token,
        info.sender.as_str(),
        &custodial.owner,
        amount,
    )?;

    vault.credit(amount)?;
    VAULT.save(deps.storage, &vault)?;

    let messages: Vec<CosmosMsg> = fee_msg.into_iter().chain(principal).collect();

    let deposit = Event::new("deposit")
        .add_attribute("from", info.sender.as_str())
        .add_attribute("to", &custodial.owner)
        .add_attribute("asset", vault.whitelisted_token.as_str())
        .add_attribute("amount", amount)
        .add_attribute("destination_address", &destination_address)
        .add_attribute("destination_reference", &destination_reference);

    Ok(Response::new()
        .add_messages(messages)
        .add_event(deposit)
        .add_attribute("method", "send_to_liquidity")
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("fee", vault.fee_amount)
        .add_attribute("vault_amount", vault.vault_amount))
}
