//! Allow-list handlers.
//!
//! Entries live at a key derived from `(user, vault)`; the deposit path only
//! asks whether that key exists. Entries do not depend on the ledger, so they
//! can be managed before `Initialize`.

use cosmwasm_std::{Addr, DepsMut, Env, MessageInfo, Response, Storage};

use crate::access::{ensure_owner, ensure_owner_vault};
use crate::error::ContractError;
use crate::hash::{allow_list_key, key_to_hex};
use crate::state::{AllowListEntry, WhitelistState, ALLOW_LIST, VAULT};

/// Whether an allow-list entry exists for `user` on `vault`.
pub fn is_whitelisted(storage: &dyn Storage, user: &Addr, vault: &Addr) -> bool {
    ALLOW_LIST.has(storage, &allow_list_key(user, vault))
}

pub fn execute_add_to_whitelist(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    user: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let user = deps.api.addr_validate(&user)?;
    let key = allow_list_key(&user, &env.contract.address);

    if ALLOW_LIST.has(deps.storage, &key) {
        return Err(ContractError::AllowListEntryExists {
            user: user.to_string(),
        });
    }

    ALLOW_LIST.save(
        deps.storage,
        &key,
        &AllowListEntry {
            user: user.clone(),
            vault: env.contract.address,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "add_to_whitelist")
        .add_attribute("from", info.sender)
        .add_attribute("user", user)
        .add_attribute("entry", key_to_hex(&key)))
}

pub fn execute_remove_from_whitelist(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    user: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let user = deps.api.addr_validate(&user)?;
    let key = allow_list_key(&user, &env.contract.address);

    if !ALLOW_LIST.has(deps.storage, &key) {
        return Err(ContractError::AllowListEntryNotFound {
            user: user.to_string(),
        });
    }

    ALLOW_LIST.remove(deps.storage, &key);

    Ok(Response::new()
        .add_attribute("method", "remove_from_whitelist")
        .add_attribute("from", info.sender)
        .add_attribute("user", user)
        .add_attribute("entry", key_to_hex(&key)))
}

/// Toggle enforcement. Going inactive leaves every entry in place.
pub fn execute_set_whitelist_state(
    deps: DepsMut,
    info: MessageInfo,
    state: WhitelistState,
) -> Result<Response, ContractError> {
    let mut vault = ensure_owner_vault(deps.storage, &info.sender)?;

    vault.whitelist_state = state;
    VAULT.save(deps.storage, &vault)?;

    let method = match state {
        WhitelistState::Active => "set_whitelist_active",
        WhitelistState::Inactive => "set_whitelist_inactive",
    };

    Ok(Response::new()
        .add_attribute("method", method)
        .add_attribute("from", info.sender))
}
