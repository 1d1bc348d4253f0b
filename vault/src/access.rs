//! Role checks.
//!
//! Every privileged handler calls exactly one of these before doing anything
//! else, so authorization failures win over every other validation error.

use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::state::{Deployment, VaultState, DEPLOYMENT, VAULT};

/// Caller roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    Relayer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner authority",
            Role::Relayer => "relayer",
        }
    }
}

fn mismatch(role: Role) -> ContractError {
    ContractError::AddressMismatch {
        role: role.as_str().to_string(),
    }
}

/// Require the deployment owner. Checked against the deployment record, which
/// exists from instantiation on, so it does not depend on `Initialize`.
pub fn ensure_owner(storage: &dyn Storage, sender: &Addr) -> Result<Deployment, ContractError> {
    let deployment = DEPLOYMENT.load(storage)?;
    if *sender != deployment.owner {
        return Err(mismatch(Role::Owner));
    }
    Ok(deployment)
}

/// Require the owner and load the ledger.
pub fn ensure_owner_vault(
    storage: &dyn Storage,
    sender: &Addr,
) -> Result<VaultState, ContractError> {
    ensure_owner(storage, sender)?;
    load_vault(storage)
}

/// Require the configured relayer and load the ledger.
///
/// The relayer identity lives on the ledger, so an uninitialized vault
/// reports `NotInitialized` here.
pub fn ensure_relayer(storage: &dyn Storage, sender: &Addr) -> Result<VaultState, ContractError> {
    let vault = load_vault(storage)?;
    if *sender != vault.relayer {
        return Err(mismatch(Role::Relayer));
    }
    Ok(vault)
}

/// Load the ledger or fail with `NotInitialized`.
pub fn load_vault(storage: &dyn Storage) -> Result<VaultState, ContractError> {
    VAULT
        .may_load(storage)?
        .ok_or(ContractError::NotInitialized)
}
