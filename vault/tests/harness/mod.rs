//! Shared cw-multi-test harness for the vault integration tests.
//!
//! Every test binary gets a fresh `App` with two real cw20-base tokens (the
//! bridged asset and the fee token) and an instantiated, not yet initialized,
//! vault.

#![allow(dead_code)]

use bridge_vault::msg::{ExecuteMsg, FeeContextMsg, InstantiateMsg, QueryMsg, VaultResponse};
use common::TokenAccount;
use cosmwasm_std::{Addr, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

/// One whole token of the bridged asset (9 decimals)
pub const E9: u128 = 1_000_000_000;

pub const OWNER_FUNDS: u128 = 2_000 * E9;
pub const USER_FUNDS: u128 = 1_000 * E9;
pub const USER_FEE_FUNDS: u128 = 100 * E9;

// ============================================================================
// Contracts
// ============================================================================

fn contract_vault() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridge_vault::contract::execute,
        bridge_vault::contract::instantiate,
        bridge_vault::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Test Environment
// ============================================================================

pub struct TestEnv {
    pub app: App,
    pub vault: Addr,
    /// Bridged asset
    pub token: Addr,
    /// Deposit fee asset
    pub fee_token: Addr,
    pub owner: Addr,
    pub relayer: Addr,
    pub collector: Addr,
    pub user: Addr,
}

fn instantiate_token(
    app: &mut App,
    code_id: u64,
    minter: &Addr,
    symbol: &str,
    initial_balances: Vec<Cw20Coin>,
) -> Addr {
    app.instantiate_contract(
        code_id,
        minter.clone(),
        &cw20_base::msg::InstantiateMsg {
            name: format!("{} Token", symbol),
            symbol: symbol.to_string(),
            decimals: 9,
            initial_balances,
            mint: None,
            marketing: None,
        },
        &[],
        symbol,
        None,
    )
    .unwrap()
}

/// Tokens and vault deployed; the vault ledger does not exist yet.
pub fn setup() -> TestEnv {
    let mut app = App::default();

    let owner = Addr::unchecked("terra1owner");
    let relayer = Addr::unchecked("terra1relayer");
    let collector = Addr::unchecked("terra1collector");
    let user = Addr::unchecked("terra1user");

    let cw20_code_id = app.store_code(contract_cw20());
    let token = instantiate_token(
        &mut app,
        cw20_code_id,
        &owner,
        "WAST",
        vec![
            Cw20Coin {
                address: owner.to_string(),
                amount: Uint128::new(OWNER_FUNDS),
            },
            Cw20Coin {
                address: user.to_string(),
                amount: Uint128::new(USER_FUNDS),
            },
        ],
    );
    let fee_token = instantiate_token(
        &mut app,
        cw20_code_id,
        &owner,
        "FEE",
        vec![Cw20Coin {
            address: user.to_string(),
            amount: Uint128::new(USER_FEE_FUNDS),
        }],
    );

    let vault_code_id = app.store_code(contract_vault());
    let vault = app
        .instantiate_contract(
            vault_code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                fee_token: fee_token.to_string(),
            },
            &[],
            "bridge-vault",
            Some(owner.to_string()),
        )
        .unwrap();

    TestEnv {
        app,
        vault,
        token,
        fee_token,
        owner,
        relayer,
        collector,
        user,
    }
}

/// Deployed and initialized with the given limits and fee.
pub fn setup_initialized(min: u128, max: u128, fee: u128) -> TestEnv {
    let mut env = setup();
    env.initialize(min, max, fee).unwrap();
    env
}

impl TestEnv {
    pub fn initialize(&mut self, min: u128, max: u128, fee: u128) -> anyhow::Result<AppResponse> {
        let msg = ExecuteMsg::Initialize {
            token: self.token.to_string(),
            relayer: self.relayer.to_string(),
            fee_collector: self.collector.to_string(),
            minimum_deposit: Uint128::new(min),
            maximum_deposit: Uint128::new(max),
            fee_amount: Uint128::new(fee),
        };
        let owner = self.owner.clone();
        self.exec(&owner, &msg)
    }

    pub fn exec(&mut self, sender: &Addr, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.vault.clone(), msg, &[])
    }

    /// Grant the vault an allowance on `token` from `holder`.
    pub fn approve(&mut self, token: &Addr, holder: &Addr, amount: u128) {
        self.app
            .execute_contract(
                holder.clone(),
                token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.vault.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    pub fn balance(&self, token: &Addr, holder: &Addr) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Balance {
                    address: holder.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    pub fn vault_state(&self) -> VaultResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.vault, &QueryMsg::Vault {})
            .unwrap()
    }

    pub fn account(&self, holder: &Addr) -> TokenAccount {
        TokenAccount::new(holder.as_str(), self.token.as_str())
    }

    pub fn fee_account(&self, holder: &Addr) -> TokenAccount {
        TokenAccount::new(holder.as_str(), self.fee_token.as_str())
    }

    /// A complete, valid fee context for `payer`.
    pub fn fee_context(&self, payer: &Addr) -> FeeContextMsg {
        FeeContextMsg {
            fee_collector: Some(self.collector.to_string()),
            fee_token: Some(self.fee_token.to_string()),
            payer_account: Some(self.fee_account(payer)),
            collector_account: Some(self.fee_account(&self.collector)),
        }
    }

    pub fn add_liquidity(&mut self, amount: u128) -> anyhow::Result<AppResponse> {
        let msg = ExecuteMsg::AddLiquidity {
            token: self.token.to_string(),
            amount: Uint128::new(amount),
            source: self.account(&self.owner),
        };
        let owner = self.owner.clone();
        self.exec(&owner, &msg)
    }

    pub fn remove_liquidity(&mut self, amount: u128) -> anyhow::Result<AppResponse> {
        let msg = ExecuteMsg::RemoveLiquidity {
            token: self.token.to_string(),
            amount: Uint128::new(amount),
            destination: self.account(&self.owner),
        };
        let owner = self.owner.clone();
        self.exec(&owner, &msg)
    }

    /// Relayer release to `receiver`.
    pub fn release(&mut self, receiver: &Addr, amount: u128) -> anyhow::Result<AppResponse> {
        let msg = ExecuteMsg::SendFromLiquidity {
            token: self.token.to_string(),
            amount: Uint128::new(amount),
            receiver: receiver.to_string(),
            receiver_account: self.account(receiver),
        };
        let relayer = self.relayer.clone();
        self.exec(&relayer, &msg)
    }

    /// Deposit from `depositor` with an optional fee context.
    pub fn deposit(
        &mut self,
        depositor: &Addr,
        amount: u128,
        fee: Option<FeeContextMsg>,
    ) -> anyhow::Result<AppResponse> {
        let msg = ExecuteMsg::SendToLiquidity {
            token: self.token.to_string(),
            amount: Uint128::new(amount),
            source: self.account(depositor),
            destination_address: "0x00000000000000000000000000000000000000ab".to_string(),
            destination_reference: "ref-0001".to_string(),
            fee,
        };
        self.exec(depositor, &msg)
    }
}

/// Root cause of a failed execution, as a string.
pub fn err_string(res: anyhow::Result<AppResponse>) -> String {
    res.unwrap_err().root_cause().to_string()
}
