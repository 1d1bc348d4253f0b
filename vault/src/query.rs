//! Query handlers for the bridge vault contract.
//!
//! All queries are read-only; the custodial balance is read live from the
//! token contract.

use common::query_balance;
use cosmwasm_std::{Deps, Env, StdError, StdResult};

use crate::execute::whitelist::is_whitelisted;
use crate::hash::{allow_list_key, key_to_hex};
use crate::msg::{
    CustodialAccountResponse, DeploymentResponse, IsWhitelistedResponse, VaultResponse,
    WhitelistEntryResponse,
};
use crate::state::{VaultState, ALLOW_LIST, DEPLOYMENT, VAULT};

fn load_vault(deps: Deps) -> StdResult<VaultState> {
    VAULT
        .may_load(deps.storage)?
        .ok_or_else(|| StdError::generic_err("Vault is not initialized"))
}

// ============================================================================
// Ledger Queries
// ============================================================================

/// Query the full vault ledger.
pub fn query_vault(deps: Deps, env: Env) -> StdResult<VaultResponse> {
    let vault = load_vault(deps)?;
    let custodial_account = vault.custodial_account(&env.contract.address);

    Ok(VaultResponse {
        owner_authority: vault.owner_authority,
        relayer: vault.relayer,
        fee_collector: vault.fee_collector,
        whitelisted_token: vault.whitelisted_token,
        custodial_account,
        vault_amount: vault.vault_amount,
        minimum_deposit: vault.minimum_deposit,
        maximum_deposit: vault.maximum_deposit,
        fee_amount: vault.fee_amount,
        public_state: vault.public_state,
        relayer_state: vault.relayer_state,
        whitelist_state: vault.whitelist_state,
    })
}

/// Query the deployment parameters and whether `Initialize` has run.
pub fn query_deployment(deps: Deps) -> StdResult<DeploymentResponse> {
    let deployment = DEPLOYMENT.load(deps.storage)?;
    Ok(DeploymentResponse {
        owner: deployment.owner,
        fee_token: deployment.fee_token,
        initialized: VAULT.may_load(deps.storage)?.is_some(),
    })
}

/// Query the custodial account alongside both its mirrored and real balance.
///
/// The two only differ if someone sent tokens to the contract outside the
/// liquidity operations.
pub fn query_custodial_account(deps: Deps, env: Env) -> StdResult<CustodialAccountResponse> {
    let vault = load_vault(deps)?;
    let account = vault.custodial_account(&env.contract.address);
    let balance = query_balance(&deps.querier, &account)?;

    Ok(CustodialAccountResponse {
        account,
        vault_amount: vault.vault_amount,
        balance,
    })
}

// ============================================================================
// Allow-List Queries
// ============================================================================

pub fn query_whitelist_entry(
    deps: Deps,
    env: Env,
    user: String,
) -> StdResult<WhitelistEntryResponse> {
    let user = deps.api.addr_validate(&user)?;
    let key = allow_list_key(&user, &env.contract.address);

    Ok(WhitelistEntryResponse {
        key: key_to_hex(&key),
        entry: ALLOW_LIST.may_load(deps.storage, &key)?,
    })
}

/// `enforced` reflects the ledger's whitelist state and is false before
/// `Initialize`.
pub fn query_is_whitelisted(
    deps: Deps,
    env: Env,
    user: String,
) -> StdResult<IsWhitelistedResponse> {
    let user = deps.api.addr_validate(&user)?;
    let whitelisted = is_whitelisted(deps.storage, &user, &env.contract.address);
    let enforced = VAULT
        .may_load(deps.storage)?
        .map(|vault| vault.whitelist_state.is_active())
        .unwrap_or(false);

    Ok(IsWhitelistedResponse {
        user,
        whitelisted,
        enforced,
    })
}
