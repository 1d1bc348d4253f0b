//! Token ledger helpers.
//!
//! The vault never holds balances itself; every movement is a CW20 message
//! dispatched in the same transaction as the vault's own state writes.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

/// One balance on the token ledger: `owner`'s holdings of the CW20 `token`.
#[cw_serde]
pub struct TokenAccount {
    /// Address holding the balance
    pub owner: String,
    /// CW20 contract address of the held asset
    pub token: String,
}

impl TokenAccount {
    pub fn new(owner: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            token: token.into(),
        }
    }

    pub fn is_owned_by(&self, owner: &Addr) -> bool {
        self.owner == owner.as_str()
    }

    pub fn holds(&self, token: &Addr) -> bool {
        self.token == token.as_str()
    }
}

/// Query the real balance of a token account.
pub fn query_balance(querier: &QuerierWrapper, account: &TokenAccount) -> StdResult<Uint128> {
    let response: BalanceResponse = querier.query_wasm_smart(
        &account.token,
        &Cw20QueryMsg::Balance {
            address: account.owner.clone(),
        },
    )?;
    Ok(response.balance)
}

/// Transfer out of the calling contract's own balance.
///
/// CW20 rejects zero-amount transfers, so a zero amount yields no message.
pub fn transfer_msg(
    token: &Addr,
    recipient: &str,
    amount: Uint128,
) -> StdResult<Option<CosmosMsg>> {
    if amount.is_zero() {
        return Ok(None);
    }
    Ok(Some(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    })))
}

/// Pull funds from `owner` using the allowance granted to the calling contract.
pub fn transfer_from_msg(
    token: &Addr,
    owner: &str,
    recipient: &str,
    amount: Uint128,
) -> StdResult<Option<CosmosMsg>> {
    if amount.is_zero() {
        return Ok(None);
    }
    Ok(Some(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    })))
}
