mod common;

use common::*;
use conxian_types::{DexError, PoolRef};
use soroban_sdk::{testutils::Address as _, Address, Env};

const AMOUNT: i128 = 1_000_000;

fn stand_in_pool(env: &Env) -> PoolRef {
    PoolRef::concentrated(Address::generate(env))
}

// ============================================================
// GRAPH ADMINISTRATION
// ============================================================

#[test]
fn test_add_edge_registers_both_tokens_and_directions() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup_router(&env);

    s.router.add_edge(&s.admin, &s.token_a, &s.token_b, &stand_in_pool(&env), &1_000_000, &30);

    assert_eq!(s.router.get_tokens().len(), 2);
    let edges = s.router.get_edges();
    assert_eq!(edges.len(), 2);
    assert_eq!(edges.get(0).unwrap().token_a, s.token_a);
    assert_eq!(edges.get(1).unwrap().token_a, s.token_b);
}

#[test]
fn test_add_token_is_idempotent() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup_router(&env);

    s.router.add_token(&s.admin, &s.token_a);
    s.router.add_token(&s.admin, &s.token_a);
    s.router.add_edge(&s.admin, &s.token_a, &s.token_b, &stand_in_pool(&env), &1_000_000, &30);

    assert_eq!(s.router.get_tokens().len(), 2);
}

#[test]
fn test_add_edge_validation() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup_router(&env);
    let stranger = Address::generate(&env);
    let pool = stand_in_pool(&env);

    assert_eq!(
        s.router.try_add_edge(&stranger, &s.token_a, &s.token_b, &pool, &1_000_000, &30),
        Err(Ok(DexError::NotAuthorized))
    );
    assert_eq!(
        s.router.try_add_edge(&s.admin, &s.token_a, &s.token_a, &pool, &1_000_000, &30),
        Err(Ok(DexError::IdenticalTokens))
    );
    assert_eq!(
        s.router.try_add_edge(&s.admin, &s.token_a, &s.token_b, &pool, &0, &30),
        Err(Ok(DexError::InvalidAmount))
    );
    assert_eq!(
        s.router.try_add_token(&stranger, &s.token_a),
        Err(Ok(DexError::NotAuthorized))
    );
    assert!(s.router.get_edges().is_empty());
}

// ============================================================
// PATH FINDING
// ============================================================

#[test]
fn test_lower_fee_edge_wins() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup_router(&env);
    let expensive = stand_in_pool(&env);
    let cheap = stand_in_pool(&env);

    s.router.add_edge(&s.admin, &s.token_a, &s.token_b, &expensive, &1_000_000_000, &100);
    s.router.add_edge(&s.admin, &s.token_a, &s.token_b, &cheap, &1_000_000_000, &30);

    let path = s.router.find_optimal_path(&s.token_a, &s.token_b, &AMOUNT);
    assert_eq!(path.len(), 1);
    assert_eq!(path.get(0).unwrap().pool, cheap);
}

#[test]
fn test_deeper_edge_wins_at_equal_fee() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup_router(&env);
    let thin = stand_in_pool(&env);
    let deep = stand_in_pool(&env);

    s.router.add_edge(&s.admin, &s.token_a, &s.token_b, &thin, &10_000_000, &30);
    s.router.add_edge(&s.admin, &s.token_a, &s.token_b, &deep, &10_000_000_000, &30);

    let path = s.router.find_optimal_path(&s.token_a, &s.token_b, &AMOUNT);
    assert_eq!(path.get(0).unwrap().pool, deep);
}

#[test]
fn test_two_hop_path_through_intermediate() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup_router(&env);
    let first = stand_in_pool(&env);
    let second = stand_in_pool(&env);

    s.router.add_edge(&s.admin, &s.token_a, &s.base, &first, &1_000_000_000, &30);
    s.router.add_edge(&s.admin, &s.base, &s.token_b, &second, &1_000_000_000, &30);

    let path = s.router.find_optimal_path(&s.token_a, &s.token_b, &AMOUNT);
    assert_eq!(path.len(), 2);
    let hop0 = path.get(0).unwrap();
    let hop1 = path.get(1).unwrap();
    assert_eq!(
        (hop0.pool, hop0.token_in, hop0.token_out),
        (first, s.token_a.clone(), s.base.clone()),
    );
    assert_eq!(
        (hop1.pool, hop1.token_in, hop1.token_out),
        (second, s.base.clone(), s.token_b.clone()),
    );
}

#[test]
fn test_disconnected_tokens_have_no_path() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup_router(&env);
    let other = Address::generate(&env);

    s.router.add_edge(&s.admin, &s.token_a, &s.base, &stand_in_pool(&env), &1_000_000, &30);
    s.router.add_edge(&s.admin, &s.token_b, &other, &stand_in_pool(&env), &1_000_000, &30);

    assert!(s.router.find_optimal_path(&s.token_a, &s.token_b, &AMOUNT).is_empty());
}

// ============================================================
// SWAP OPTIMAL PATH
// ============================================================

#[test]
fn test_swap_along_optimal_path() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup_router(&env);
    let first = deploy_cl_pool(&env, &s.admin, &s.token_a, &s.base, CL_FEE, CL_LIQUIDITY);
    let second = deploy_cp_pool(&env, &s.admin, &s.base, &s.token_b, CP_RESERVE);
    s.router.add_edge(&s.admin, &s.token_a, &s.base, &first, &CL_LIQUIDITY, &100);
    s.router.add_edge(&s.admin, &s.base, &s.token_b, &second, &(CP_RESERVE as u128), &30);
    let user = funded_user(&env, &[&s.token_a]);

    let mid = cl_quote(&env, &first, &s.token_a, AMOUNT);
    let expected = cp_client(&env, &second).quote(&s.base, &mid);

    let out = s.router.swap_optimal_path(&user, &s.token_a, &s.token_b, &AMOUNT, &expected);

    assert_eq!(out, expected);
    assert_eq!(balance(&env, &s.token_b, &user), expected);
    assert_eq!(balance(&env, &s.base, &s.router.address), 0);
}

#[test]
fn test_swap_without_path_fails_no_path() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup_router(&env);
    let user = funded_user(&env, &[&s.token_a]);

    assert_eq!(
        s.router.try_swap_optimal_path(&user, &s.token_a, &s.token_b, &AMOUNT, &0),
        Err(Ok(DexError::NoPath))
    );
    assert_eq!(balance(&env, &s.token_a, &user), FUNDING);
}
