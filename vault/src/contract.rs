//! Bridge Vault Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_liquidity, execute_add_to_whitelist, execute_initialize,
    execute_remove_from_whitelist, execute_remove_liquidity, execute_send_from_liquidity,
    execute_send_to_liquidity, execute_set_breaker, execute_set_deposit_limits,
    execute_set_fee_amount, execute_set_whitelist_state, execute_update_fee_collector,
    execute_update_relayer, execute_update_whitelisted_mint,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_custodial_account, query_deployment, query_is_whitelisted, query_vault,
    query_whitelist_entry,
};
use crate::state::{
    Breaker, Deployment, PauseState, WhitelistState, CONTRACT_NAME, CONTRACT_VERSION, DEPLOYMENT,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let deployment = Deployment {
        owner: deps.api.addr_validate(&msg.owner)?,
        fee_token: deps.api.addr_validate(&msg.fee_token)?,
    };
    DEPLOYMENT.save(deps.storage, &deployment)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", deployment.owner)
        .add_attribute("fee_token", deployment.fee_token))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Lifecycle
        ExecuteMsg::Initialize {
            token,
            relayer,
            fee_collector,
            minimum_deposit,
            maximum_deposit,
            fee_amount,
        } => execute_initialize(
            deps,
            env,
            info,
            token,
            relayer,
            fee_collector,
            minimum_deposit,
            maximum_deposit,
            fee_amount,
        ),

        // Liquidity
        ExecuteMsg::AddLiquidity {
            token,
            amount,
            source,
        } => execute_add_liquidity(deps, env, info, token, amount, source),
        ExecuteMsg::RemoveLiquidity {
            token,
            amount,
            destination,
        } => execute_remove_liquidity(deps, env, info, token, amount, destination),
        ExecuteMsg::SendFromLiquidity {
            token,
            amount,
            receiver,
            receiver_account,
        } => execute_send_from_liquidity(deps, env, info, token, amount, receiver, receiver_account),
        ExecuteMsg::SendToLiquidity {
            token,
            amount,
            source,
            destination_address,
            destination_reference,
            fee,
        } => execute_send_to_liquidity(
            deps,
            env,
            info,
            token,
            amount,
            source,
            destination_address,
            destination_reference,
            fee,
        ),

        // Configuration
        ExecuteMsg::UpdateWhitelistedMint { token } => {
            execute_update_whitelisted_mint(deps, env, info, token)
        }
        ExecuteMsg::UpdateRelayer { relayer } => execute_update_relayer(deps, info, relayer),
        ExecuteMsg::UpdateFeeCollector { fee_collector } => {
            execute_update_fee_collector(deps, info, fee_collector)
        }
        ExecuteMsg::SetFeeAmount { fee_amount } => execute_set_fee_amount(deps, info, fee_amount),
        ExecuteMsg::SetDepositLimits {
            minimum_deposit,
            maximum_deposit,
        } => execute_set_deposit_limits(deps, info, minimum_deposit, maximum_deposit),

        // Pause controller
        ExecuteMsg::PublicPause {} => {
            execute_set_breaker(deps, info, Breaker::Public, PauseState::Paused)
        }
        ExecuteMsg::PublicUnpause {} => {
            execute_set_breaker(deps, info, Breaker::Public, PauseState::Active)
        }
        ExecuteMsg::RelayerPause {} => {
            execute_set_breaker(deps, info, Breaker::Relayer, PauseState::Paused)
        }
        ExecuteMsg::RelayerUnpause {} => {
            execute_set_breaker(deps, info, Breaker::Relayer, PauseState::Active)
        }

        // Allow-list
        ExecuteMsg::AddToWhitelist { user } => execute_add_to_whitelist(deps, env, info, user),
        ExecuteMsg::RemoveFromWhitelist { user } => {
            execute_remove_from_whitelist(deps, env, info, user)
        }
        ExecuteMsg::SetWhitelistActive {} => {
            execute_set_whitelist_state(deps, info, WhitelistState::Active)
        }
        ExecuteMsg::SetWhitelistInactive {} => {
            execute_set_whitelist_state(deps, info, WhitelistState::Inactive)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Vault {} => to_json_binary(&query_vault(deps, env)?),
        QueryMsg::Deployment {} => to_json_binary(&query_deployment(deps)?),
        QueryMsg::CustodialAccount {} => to_json_binary(&query_custodial_account(deps, env)?),
        QueryMsg::WhitelistEntry { user } => {
            to_json_binary(&query_whitelist_entry(deps, env, user)?)
        }
        QueryMsg::IsWhitelisted { user } => {
            to_json_binary(&query_is_whitelisted(deps, env, user)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
