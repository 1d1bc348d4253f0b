//! Allow-list registry and its effect on deposits.

mod harness;

use bridge_vault::hash::{allow_list_key, key_to_hex};
use bridge_vault::msg::{ExecuteMsg, IsWhitelistedResponse, QueryMsg, WhitelistEntryResponse};
use bridge_vault::state::WhitelistState;
use cosmwasm_std::{Addr, Uint128};

use harness::{err_string, setup, setup_initialized, TestEnv, E9};

fn owner_exec(env: &mut TestEnv, msg: ExecuteMsg) -> anyhow::Result<cw_multi_test::AppResponse> {
    let owner = env.owner.clone();
    env.exec(&owner, &msg)
}

fn add(env: &mut TestEnv, user: &Addr) -> anyhow::Result<cw_multi_test::AppResponse> {
    owner_exec(
        env,
        ExecuteMsg::AddToWhitelist {
            user: user.to_string(),
        },
    )
}

fn remove(env: &mut TestEnv, user: &Addr) -> anyhow::Result<cw_multi_test::AppResponse> {
    owner_exec(
        env,
        ExecuteMsg::RemoveFromWhitelist {
            user: user.to_string(),
        },
    )
}

fn is_whitelisted(env: &TestEnv, user: &Addr) -> IsWhitelistedResponse {
    env.app
        .wrap()
        .query_wasm_smart(
            &env.vault,
            &QueryMsg::IsWhitelisted {
                user: user.to_string(),
            },
        )
        .unwrap()
}

#[test]
fn test_active_allow_list_gates_deposits() {
    let mut env = setup_initialized(0, 100 * E9, 0);
    let user = env.user.clone();
    env.approve(&env.token.clone(), &user, 100 * E9);

    owner_exec(&mut env, ExecuteMsg::SetWhitelistActive {}).unwrap();
    assert_eq!(env.vault_state().whitelist_state, WhitelistState::Active);

    let err = err_string(env.deposit(&user, E9, None));
    assert!(err.contains("Not whitelisted"), "got: {}", err);

    add(&mut env, &user).unwrap();
    env.deposit(&user, E9, None).unwrap();

    remove(&mut env, &user).unwrap();
    let err = err_string(env.deposit(&user, E9, None));
    assert!(err.contains("Not whitelisted"), "got: {}", err);

    assert_eq!(env.vault_state().vault_amount, Uint128::new(E9));
}

#[test]
fn test_inactive_allow_list_keeps_entries_inert() {
    let mut env = setup_initialized(0, 100 * E9, 0);
    let user = env.user.clone();
    let owner = env.owner.clone();
    env.approve(&env.token.clone(), &owner, 10 * E9);

    add(&mut env, &user).unwrap();

    // Inactive: no entry needed, listed or not
    env.deposit(&owner, E9, None).unwrap();

    owner_exec(&mut env, ExecuteMsg::SetWhitelistActive {}).unwrap();
    let err = err_string(env.deposit(&owner, E9, None));
    assert!(err.contains("Not whitelisted"), "got: {}", err);

    owner_exec(&mut env, ExecuteMsg::SetWhitelistInactive {}).unwrap();
    env.deposit(&owner, E9, None).unwrap();

    // The user's entry survived both toggles
    let status = is_whitelisted(&env, &user);
    assert!(status.whitelisted);
    assert!(!status.enforced);
}

#[test]
fn test_allow_list_check_precedes_account_validation() {
    let mut env = setup_initialized(0, 100 * E9, 0);
    owner_exec(&mut env, ExecuteMsg::SetWhitelistActive {}).unwrap();
    let user = env.user.clone();

    // No allowance, wrong asset: the allow-list is reported first
    let err = err_string(env.exec(
        &user,
        &ExecuteMsg::SendToLiquidity {
            token: env.fee_token.to_string(),
            amount: Uint128::new(E9),
            source: env.fee_account(&user),
            destination_address: "dest".to_string(),
            destination_reference: "ref".to_string(),
            fee: None,
        },
    ));
    assert!(err.contains("Not whitelisted"), "got: {}", err);
}

#[test]
fn test_duplicate_and_missing_entries() {
    let mut env = setup_initialized(0, 0, 0);
    let user = env.user.clone();

    add(&mut env, &user).unwrap();
    let err = err_string(add(&mut env, &user));
    assert!(err.contains("already exists"), "got: {}", err);

    remove(&mut env, &user).unwrap();
    let err = err_string(remove(&mut env, &user));
    assert!(err.contains("not found"), "got: {}", err);
}

#[test]
fn test_entries_can_be_managed_before_initialize() {
    let mut env = setup();
    let user = env.user.clone();

    add(&mut env, &user).unwrap();
    let status = is_whitelisted(&env, &user);
    assert!(status.whitelisted);
    assert!(!status.enforced);

    // Toggling enforcement needs the ledger
    let err = err_string(owner_exec(&mut env, ExecuteMsg::SetWhitelistActive {}));
    assert!(err.contains("not initialized"), "got: {}", err);
}

#[test]
fn test_whitelist_entry_query_exposes_derived_key() {
    let mut env = setup_initialized(0, 0, 0);
    let user = env.user.clone();
    let expected_key = key_to_hex(&allow_list_key(&user, &env.vault));

    let res: WhitelistEntryResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.vault,
            &QueryMsg::WhitelistEntry {
                user: user.to_string(),
            },
        )
        .unwrap();
    assert_eq!(res.key, expected_key);
    assert!(res.entry.is_none());

    let add_res = add(&mut env, &user).unwrap();
    let logged_key = add_res
        .events
        .iter()
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == "entry")
        .map(|a| a.value.clone());
    assert_eq!(logged_key, Some(expected_key.clone()));

    let res: WhitelistEntryResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.vault,
            &QueryMsg::WhitelistEntry {
                user: user.to_string(),
            },
        )
        .unwrap();
    assert_eq!(res.key, expected_key);
    let entry = res.entry.unwrap();
    assert_eq!(entry.user, user);
    assert_eq!(entry.vault, env.vault);
}

#[test]
fn test_is_whitelisted_reports_enforcement() {
    let mut env = setup_initialized(0, 0, 0);
    let user = env.user.clone();
    let stranger = Addr::unchecked("terra1stranger");

    owner_exec(&mut env, ExecuteMsg::SetWhitelistActive {}).unwrap();
    add(&mut env, &user).unwrap();

    let status = is_whitelisted(&env, &user);
    assert_eq!(status.user, user);
    assert!(status.whitelisted);
    assert!(status.enforced);

    let status = is_whitelisted(&env, &stranger);
    assert!(!status.whitelisted);
    assert!(status.enforced);
}
