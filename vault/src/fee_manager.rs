//! Fee Manager Module
//!
//! Flat per-deposit fee, paid in the deployment's fee token as a side payment
//! from the depositor to the fee collector.
//!
//! ## Fee Rules
//!
//! | Fee amount | Fee context | Result                          |
//! |------------|-------------|---------------------------------|
//! | 0          | any         | no fee, context ignored         |
//! | > 0        | absent      | `MissingFeeAccounts`            |
//! | > 0        | partial     | `MissingFeeAccounts`            |
//! | > 0        | complete    | validated, then one TransferFrom |
//!
//! The fee message is returned to the deposit handler, which dispatches it in
//! the same response as the principal transfer.

use common::{query_balance, transfer_from_msg, TokenAccount};
use cosmwasm_std::{Addr, CosmosMsg, QuerierWrapper, Uint128};

use crate::error::ContractError;
use crate::msg::FeeContextMsg;
use crate::state::{Deployment, VaultState};

/// A complete fee context. Only constructible with all four parts.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeContext {
    pub fee_collector: String,
    pub fee_token: String,
    pub payer_account: TokenAccount,
    pub collector_account: TokenAccount,
}

impl TryFrom<FeeContextMsg> for FeeContext {
    type Error = ContractError;

    fn try_from(msg: FeeContextMsg) -> Result<Self, Self::Error> {
        match msg {
            FeeContextMsg {
                fee_collector: Some(fee_collector),
                fee_token: Some(fee_token),
                payer_account: Some(payer_account),
                collector_account: Some(collector_account),
            } => Ok(FeeContext {
                fee_collector,
                fee_token,
                payer_account,
                collector_account,
            }),
            _ => Err(ContractError::MissingFeeAccounts),
        }
    }
}

impl FeeContext {
    /// Check every part against the ledger and deployment, then the payer's
    /// real balance.
    pub fn validate(
        &self,
        querier: &QuerierWrapper,
        deployment: &Deployment,
        vault: &VaultState,
        payer: &Addr,
    ) -> Result<(), ContractError> {
        if self.fee_collector != vault.fee_collector.as_str() {
            return Err(ContractError::AddressMismatch {
                role: "fee collector".to_string(),
            });
        }

        ensure_asset(&deployment.fee_token, &self.fee_token)?;

        ensure_account(&self.payer_account, payer, &deployment.fee_token)?;

        let available = query_balance(querier, &self.payer_account)?;
        if available < vault.fee_amount {
            return Err(ContractError::InsufficientBalance {
                available,
                required: vault.fee_amount,
            });
        }

        ensure_account(
            &self.collector_account,
            &vault.fee_collector,
            &deployment.fee_token,
        )
    }
}

/// Resolve the fee for one deposit.
///
/// Returns the fee transfer message, or `None` when no fee is configured.
pub fn collect_fee(
    querier: &QuerierWrapper,
    deployment: &Deployment,
    vault: &VaultState,
    payer: &Addr,
    fee: Option<FeeContextMsg>,
) -> Result<Option<CosmosMsg>, ContractError> {
    if !fee_required(vault) {
        return Ok(None);
    }

    let context = FeeContext::try_from(fee.ok_or(ContractError::MissingFeeAccounts)?)?;
    context.validate(querier, deployment, vault, payer)?;

    Ok(transfer_from_msg(
        &deployment.fee_token,
        payer.as_str(),
        vault.fee_collector.as_str(),
        vault.fee_amount,
    )?)
}

/// Whether deposits currently owe a fee
pub fn fee_required(vault: &VaultState) -> bool {
    vault.fee_amount > Uint128::zero()
}

// ============================================================================
// Shared Account Checks
// ============================================================================

/// Declared asset must equal the expected token
pub fn ensure_asset(expected: &Addr, got: &str) -> Result<(), ContractError> {
    if expected.as_str() != got {
        return Err(ContractError::AssetMismatch {
            expected: expected.to_string(),
            got: got.to_string(),
        });
    }
    Ok(())
}

/// Supplied account must be owned by `owner` and hold `token`
pub fn ensure_account(
    account: &TokenAccount,
    owner: &Addr,
    token: &Addr,
) -> Result<(), ContractError> {
    if !account.is_owned_by(owner) {
        return Err(ContractError::OwnerMismatch {
            expected: owner.to_string(),
            got: account.owner.clone(),
        });
    }
    if !account.holds(token) {
        return Err(ContractError::AssetMismatch {
            expected: token.to_string(),
            got: account.token.clone(),
        });
    }
    Ok(())
}

/// Outbound transfers must leave the vault. A transfer from the custodial
/// account to itself would lower `vault_amount` without moving funds.
pub fn ensure_external(owner: &str, vault: &Addr) -> Result<(), ContractError> {
    if owner == vault.as_str() {
        return Err(ContractError::AddressMismatch {
            role: "external account".to_string(),
        });
    }
    Ok(())
}
