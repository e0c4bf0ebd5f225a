mod common;

use conxian_math::MAX_TICK;
use conxian_types::DexError;
use soroban_sdk::{testutils::Address as _, Address, Env};

// ============================================================
// MINT TESTS
// ============================================================

#[test]
fn test_mint_symmetric_range_at_parity() {
    let env = Env::default();
    env.mock_all_auths();
    let setup = common::setup_pool(&env);
    let lp = common::funded_user(&env, &setup);

    let id = setup.client.mint(&lp, &-100, &100, &1_000_000);
    assert_eq!(id, 1);

    let pos = setup.client.get_position(&id);
    assert_eq!(pos.owner, lp);
    assert_eq!(pos.lower, -100);
    assert_eq!(pos.upper, 100);
    assert_eq!(pos.liquidity, 1_000_000);
    assert_eq!(pos.fees_owed_0, 0);
    assert_eq!(pos.fees_owed_1, 0);

    // Amounts rounded up in the pool's favor
    let pool = setup.client.address.clone();
    assert_eq!(common::balance(&env, &setup.token0, &pool), 4988);
    assert_eq!(common::balance(&env, &setup.token1, &pool), 4988);
    assert_eq!(common::balance(&env, &setup.token0, &lp), common::FUNDING - 4988);

    assert_eq!(setup.client.get_pool_state().liquidity, 1_000_000);
}

#[test]
fn test_position_ids_increase() {
    let env = Env::default();
    env.mock_all_auths();
    let setup = common::setup_pool(&env);
    let lp = common::funded_user(&env, &setup);

    assert_eq!(setup.client.mint(&lp, &-100, &100, &1_000), 1);
    assert_eq!(setup.client.mint(&lp, &-100, &100, &1_000), 2);
    assert_eq!(setup.client.mint(&lp, &-200, &200, &1_000), 3);
}

#[test]
fn test_mint_above_price_takes_only_token0() {
    let env = Env::default();
    env.mock_all_auths();
    let setup = common::setup_pool(&env);
    let lp = common::funded_user(&env, &setup);

    setup.client.mint(&lp, &100, &200, &1_000_000);

    let pool = setup.client.address.clone();
    assert!(common::balance(&env, &setup.token0, &pool) > 0);
    assert_eq!(common::balance(&env, &setup.token1, &pool), 0);
    // Not active at the current tick
    assert_eq!(setup.client.get_pool_state().liquidity, 0);
}

#[test]
fn test_mint_marks_boundary_ticks() {
    let env = Env::default();
    env.mock_all_auths();
    let setup = common::setup_pool(&env);
    let lp = common::funded_user(&env, &setup);

    setup.client.mint(&lp, &-100, &100, &1_000_000);

    let lower = setup.client.get_tick(&-100);
    let upper = setup.client.get_tick(&100);
    assert!(lower.initialized);
    assert_eq!(lower.liquidity_net, 1_000_000);
    assert_eq!(upper.liquidity_net, -1_000_000);
    assert_eq!(upper.liquidity_gross, 1_000_000);
}

#[test]
fn test_mint_validation() {
    let env = Env::default();
    env.mock_all_auths();
    let setup = common::setup_pool(&env);
    let lp = common::funded_user(&env, &setup);

    assert_eq!(
        setup.client.try_mint(&lp, &100, &100, &1_000),
        Err(Ok(DexError::InvalidTickRange))
    );
    assert_eq!(
        setup.client.try_mint(&lp, &100, &-100, &1_000),
        Err(Ok(DexError::InvalidTickRange))
    );
    assert_eq!(
        setup.client.try_mint(&lp, &-105, &100, &1_000),
        Err(Ok(DexError::TickNotAligned))
    );
    assert_eq!(
        setup.client.try_mint(&lp, &-100, &(MAX_TICK + 10), &1_000),
        Err(Ok(DexError::TickOutOfRange))
    );
    assert_eq!(
        setup.client.try_mint(&lp, &-100, &100, &0),
        Err(Ok(DexError::InvalidAmount))
    );
}

#[test]
fn test_mint_without_funds_fails_transfer() {
    let env = Env::default();
    env.mock_all_auths();
    let setup = common::setup_pool(&env);
    let broke = Address::generate(&env);

    assert_eq!(
        setup.client.try_mint(&broke, &-100, &100, &1_000_000),
        Err(Ok(DexError::TransferFailed))
    );
    assert_eq!(setup.client.get_pool_state().liquidity, 0);
}

#[test]
fn test_increase_liquidity() {
    let env = Env::default();
    env.mock_all_auths();
    let setup = common::setup_pool(&env);
    let lp = common::funded_user(&env, &setup);

    let id = setup.client.mint(&lp, &-100, &100, &1_000_000);
    let (amount0, amount1) = setup.client.increase_liquidity(&lp, &id, &1_000_000);

    assert_eq!((amount0, amount1), (4988, 4988));
    assert_eq!(setup.client.get_position(&id).liquidity, 2_000_000);
    assert_eq!(setup.client.get_pool_state().liquidity, 2_000_000);
}

// ============================================================
// BURN / COLLECT TESTS
// ============================================================

#[test]
fn test_burn_credits_owed_and_collect_pays() {
    let env = Env::default();
    env.mock_all_auths();
    let setup = common::setup_pool(&env);
    let lp = common::funded_user(&env, &setup);

    let id = setup.client.mint(&lp, &-100, &100, &1_000_000);
    let (amount0, amount1) = setup.client.burn(&lp, &id, &1_000_000);

    // Rounded down: one unit of dust stays in the pool
    assert_eq!((amount0, amount1), (4987, 4987));

    let pos = setup.client.get_position(&id);
    assert_eq!(pos.liquidity, 0);
    assert_eq!(pos.fees_owed_0, 4987);
    assert_eq!(pos.fees_owed_1, 4987);
    assert_eq!(setup.client.get_pool_state().liquidity, 0);

    // Boundary ticks are cleared once nothing references them
    assert!(!setup.client.get_tick(&-100).initialized);

    let collected = setup.client.collect(&lp, &id);
    assert_eq!(collected, (4987, 4987));
    assert_eq!(common::balance(&env, &setup.token0, &lp), common::FUNDING - 1);

    // The record survives with zeroed fields
    let pos = setup.client.get_position(&id);
    assert_eq!((pos.liquidity, pos.fees_owed_0, pos.fees_owed_1), (0, 0, 0));
}

#[test]
fn test_burn_more_than_position_fails_without_change() {
    let env = Env::default();
    env.mock_all_auths();
    let setup = common::setup_pool(&env);
    let lp = common::funded_user(&env, &setup);

    let id = setup.client.mint(&lp, &-100, &100, &1_000_000);
    assert_eq!(
        setup.client.try_burn(&lp, &id, &1_000_001),
        Err(Ok(DexError::InsufficientLiquidity))
    );
    assert_eq!(setup.client.get_position(&id).liquidity, 1_000_000);
    assert_eq!(setup.client.get_pool_state().liquidity, 1_000_000);
}

#[test]
fn test_burn_zero_rejected() {
    let env = Env::default();
    env.mock_all_auths();
    let setup = common::setup_pool(&env);
    let lp = common::funded_user(&env, &setup);

    let id = setup.client.mint(&lp, &-100, &100, &1_000_000);
    assert_eq!(setup.client.try_burn(&lp, &id, &0), Err(Ok(DexError::InvalidAmount)));
}

#[test]
fn test_only_owner_can_burn_or_collect() {
    let env = Env::default();
    env.mock_all_auths();
    let setup = common::setup_pool(&env);
    let lp = common::funded_user(&env, &setup);
    let stranger = Address::generate(&env);

    let id = setup.client.mint(&lp, &-100, &100, &1_000_000);
    assert_eq!(setup.client.try_burn(&stranger, &id, &1), Err(Ok(DexError::NotAuthorized)));
    assert_eq!(setup.client.try_collect(&stranger, &id), Err(Ok(DexError::NotAuthorized)));
    assert_eq!(
        setup.client.try_increase_liquidity(&stranger, &id, &1),
        Err(Ok(DexError::NotAuthorized))
    );
}

#[test]
fn test_unknown_position_not_found() {
    let env = Env::default();
    env.mock_all_auths();
    let setup = common::setup_pool(&env);
    let lp = common::funded_user(&env, &setup);

    assert_eq!(setup.client.try_get_position(&1), Err(Ok(DexError::PositionNotFound)));
    assert_eq!(setup.client.try_burn(&lp, &7, &1), Err(Ok(DexError::PositionNotFound)));
}

#[test]
fn test_overlapping_positions_burn_and_collect_stay_solvent() {
    let env = Env::default();
    env.mock_all_auths();
    let setup = common::setup_pool(&env);
    let pool = setup.client.address.clone();
    let trader = common::funded_user(&env, &setup);

    let ranges = [(-200, 200), (-50, 400), (-1000, -100)];
    let mut lps = soroban_sdk::Vec::<Address>::new(&env);
    let mut ids = soroban_sdk::Vec::<u64>::new(&env);
    for (lower, upper) in ranges {
        let lp = common::funded_user(&env, &setup);
        ids.push_back(setup.client.mint(&lp, &lower, &upper, &100_000_000));
        lps.push_back(lp);
    }

    for i in 0..6 {
        setup.client.swap(&trader, &trader, &(i % 2 == 0), &1_500_000, &0);
    }

    let mut earned = (0u128, 0u128);
    for slot in 0..ids.len() {
        let (lp, id) = (lps.get(slot).unwrap(), ids.get(slot).unwrap());
        let before = setup.client.get_position(&id);
        earned = (earned.0 + before.fees_owed_0, earned.1 + before.fees_owed_1);

        let (principal0, principal1) = setup.client.burn(&lp, &id, &100_000_000);
        let after = setup.client.get_position(&id);
        assert_eq!(after.fees_owed_0, before.fees_owed_0 + principal0);
        assert_eq!(after.fees_owed_1, before.fees_owed_1 + principal1);
    }
    assert!(earned.0 > 0 && earned.1 > 0);
    assert_eq!(setup.client.get_pool_state().liquidity, 0);

    for slot in 0..ids.len() {
        let (lp, id) = (lps.get(slot).unwrap(), ids.get(slot).unwrap());
        let owed = setup.client.get_position(&id);
        let collected = setup.client.try_collect(&lp, &id);
        assert_eq!(collected, Ok(Ok((owed.fees_owed_0, owed.fees_owed_1))));
    }

    // Only rounding dust is left behind
    assert!(common::balance(&env, &setup.token0, &pool) < 100);
    assert!(common::balance(&env, &setup.token1, &pool) < 100);
    for (lower, upper) in ranges {
        assert!(!setup.client.get_tick(&lower).initialized);
        assert!(!setup.client.get_tick(&upper).initialized);
    }
}
