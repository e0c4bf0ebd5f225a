#![no_std]

//! # Conxian Router
//!
//! Multi-hop execution over concentrated-liquidity and constant-product
//! pools, with two ways of choosing a path:
//!
//! 1. `find_best_route`: registry pools for each fee tier, direct or through
//!    the base asset, ranked by simulated output
//! 2. `find_optimal_path`: Dijkstra over an admin-maintained token graph
//!
//! Paths execute all-or-nothing: any failing hop aborts the invocation and
//! the host discards the writes of every earlier hop.

use conxian_math::mul_div_rounding_up;
use conxian_types::{DexError, PoolRef};
use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

mod events;
pub mod graph;
mod pools;
mod storage;
mod types;

use events::*;
use graph::shortest_path;
use pools::{execute_hop, quote_hop, quote_path, registry_pool};
use storage::*;
pub use types::*;

// ============================================================
// CONSTANTS
// ============================================================

/// Maximum hops in a path
pub const MAX_HOPS: u32 = 4;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct ConxianRouter;

#[contractimpl]
impl ConxianRouter {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(
        env: Env,
        admin: Address,
        registry: Address,
        base_asset: Address,
        fee_tiers: Vec<u32>,
    ) -> Result<(), DexError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(DexError::AlreadyInitialized);
        }
        if fee_tiers.is_empty() || fee_tiers.iter().any(|fee| fee == 0) {
            return Err(DexError::ZeroFeeTier);
        }

        let config = RouterConfig {
            admin: admin.clone(),
            registry,
            base_asset,
            fee_tiers,
        };
        write_config(&env, &config);
        set_initialized(&env);

        emit_initialized(&env, &admin, &config.registry, &config.base_asset);
        Ok(())
    }

    // ========================================================
    // SWAP FUNCTIONS (Write)
    // ========================================================

    /// Swap along an explicit pool path
    ///
    /// Every hop is quoted before anything moves. Intermediate outputs stay
    /// with the router; the final output goes to `sender`.
    pub fn swap_exact_in(
        env: Env,
        sender: Address,
        amount_in: i128,
        min_amount_out: i128,
        path: Vec<PoolRef>,
        token_in: Address,
        token_out: Address,
    ) -> Result<i128, DexError> {
        sender.require_auth();
        read_config(&env)?;

        execute_path(&env, &sender, amount_in, min_amount_out, &path, &token_in, &token_out)
    }

    /// Swap along the graph's cheapest path
    pub fn swap_optimal_path(
        env: Env,
        sender: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        min_amount_out: i128,
    ) -> Result<i128, DexError> {
        sender.require_auth();
        read_config(&env)?;

        if amount_in <= 0 {
            return Err(DexError::InvalidAmount);
        }

        let hops = Self::find_optimal_path(
            env.clone(),
            token_in.clone(),
            token_out.clone(),
            amount_in,
        );
        if hops.is_empty() {
            return Err(DexError::NoPath);
        }

        let mut path = Vec::new(&env);
        for hop in hops.iter() {
            path.push_back(hop.pool);
        }

        execute_path(&env, &sender, amount_in, min_amount_out, &path, &token_in, &token_out)
    }

    // ========================================================
    // ROUTE DISCOVERY (Read)
    // ========================================================

    /// Best registry route by simulated output
    ///
    /// Tries each fee tier directly, then every pair of fee tiers through the
    /// base asset. Pools whose quote fails are skipped. No route gives an
    /// empty path and zero output.
    pub fn find_best_route(
        env: Env,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
    ) -> Result<RouteQuote, DexError> {
        let config = read_config(&env)?;

        let mut best = RouteQuote {
            path: Vec::new(&env),
            amount_out: 0,
        };
        if amount_in <= 0 || token_in == token_out {
            return Ok(best);
        }

        for fee in config.fee_tiers.iter() {
            if let Some(record) = registry_pool(
                &env,
                &config.registry,
                &token_in,
                &token_out,
                fee,
            ) {
                let path = Vec::from_array(&env, [record.pool]);
                consider_route(&env, &mut best, path, &token_in, &token_out, amount_in);
            }
        }

        let base = &config.base_asset;
        if *base != token_in && *base != token_out {
            for fee_in in config.fee_tiers.iter() {
                let Some(first) = registry_pool(
                    &env,
                    &config.registry,
                    &token_in,
                    base,
                    fee_in,
                ) else {
                    continue;
                };
                for fee_out in config.fee_tiers.iter() {
                    let Some(second) = registry_pool(
                        &env,
                        &config.registry,
                        base,
                        &token_out,
                        fee_out,
                    ) else {
                        continue;
                    };
                    let path = Vec::from_array(&env, [first.pool.clone(), second.pool]);
                    consider_route(&env, &mut best, path, &token_in, &token_out, amount_in);
                }
            }
        }

        Ok(best)
    }

    /// Cheapest graph path, empty when the tokens are not connected
    pub fn find_optimal_path(
        env: Env,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
    ) -> Vec<PathHop> {
        let amount = if amount_in > 0 { amount_in as u128 } else { 0 };
        shortest_path(&env, &read_tokens(&env), &read_edges(&env), &token_in, &token_out, amount)
    }

    // ========================================================
    // GRAPH ADMINISTRATION
    // ========================================================

    pub fn add_token(env: Env, caller: Address, token: Address) -> Result<(), DexError> {
        require_admin(&env, &caller)?;

        let mut tokens = read_tokens(&env);
        if register_token(&mut tokens, &token) {
            write_tokens(&env, &tokens);
            emit_token_added(&env, &token);
        }
        Ok(())
    }

    /// Add a pool to the graph in both directions
    pub fn add_edge(
        env: Env,
        caller: Address,
        token_a: Address,
        token_b: Address,
        pool_ref: PoolRef,
        liquidity: u128,
        fee_bps: u32,
    ) -> Result<(), DexError> {
        require_admin(&env, &caller)?;

        if token_a == token_b {
            return Err(DexError::IdenticalTokens);
        }
        if liquidity == 0 {
            return Err(DexError::InvalidAmount);
        }

        let mut tokens = read_tokens(&env);
        for token in [&token_a, &token_b] {
            if register_token(&mut tokens, token) {
                emit_token_added(&env, token);
            }
        }
        write_tokens(&env, &tokens);

        let mut edges = read_edges(&env);
        for (from, to) in [(&token_a, &token_b), (&token_b, &token_a)] {
            edges.push_back(RouteEdge {
                token_a: from.clone(),
                token_b: to.clone(),
                pool: pool_ref.clone(),
                liquidity,
                fee_bps,
            });
        }
        write_edges(&env, &edges);

        emit_edge_added(&env, &token_a, &token_b, &pool_ref, liquidity, fee_bps);
        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn get_config(env: Env) -> Result<RouterConfig, DexError> {
        read_config(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    pub fn get_tokens(env: Env) -> Vec<Address> {
        read_tokens(&env)
    }

    pub fn get_edges(env: Env) -> Vec<RouteEdge> {
        read_edges(&env)
    }
}

// ============================================================
// INTERNAL HELPERS
// ============================================================

fn require_admin(env: &Env, caller: &Address) -> Result<RouterConfig, DexError> {
    caller.require_auth();
    let config = read_config(env)?;
    if *caller != config.admin {
        return Err(DexError::NotAuthorized);
    }
    Ok(config)
}

/// Append `token` when missing; true if it was added
fn register_token(tokens: &mut Vec<Address>, token: &Address) -> bool {
    if tokens.contains(token) {
        return false;
    }
    tokens.push_back(token.clone());
    true
}

fn consider_route(
    env: &Env,
    best: &mut RouteQuote,
    path: Vec<PoolRef>,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
) {
    let Ok(plan) = quote_path(env, &path, token_in, amount_in) else {
        return;
    };
    let Some(last) = plan.last() else {
        return;
    };
    if last.token_out == *token_out && last.amount_out > best.amount_out {
        best.amount_out = last.amount_out;
        best.path = path;
    }
}

/// Minimum for hop `k` so the path can still reach `min_amount_out`
///
/// `ceil(expected_k * min_amount_out / expected_final)`
fn implied_min(
    expected_k: i128,
    min_amount_out: i128,
    expected_final: i128,
) -> Result<i128, DexError> {
    if min_amount_out <= 0 {
        return Ok(0);
    }
    let min = mul_div_rounding_up(
        expected_k as u128,
        min_amount_out as u128,
        expected_final as u128,
    )?;
    i128::try_from(min).map_err(|_| DexError::MathOverflow)
}

fn execute_path(
    env: &Env,
    sender: &Address,
    amount_in: i128,
    min_amount_out: i128,
    path: &Vec<PoolRef>,
    token_in: &Address,
    token_out: &Address,
) -> Result<i128, DexError> {
    if path.is_empty() {
        return Err(DexError::InvalidPath);
    }
    if path.len() > MAX_HOPS {
        return Err(DexError::PathTooLong);
    }
    if amount_in <= 0 {
        return Err(DexError::InvalidAmount);
    }
    for (i, pool) in path.iter().enumerate() {
        if path.iter().skip(i + 1).any(|other| other.address == pool.address) {
            return Err(DexError::InvalidPath);
        }
    }

    // Plan
    let plan = quote_path(env, path, token_in, amount_in)?;
    let expected_final = match plan.last() {
        Some(last) if last.token_out == *token_out => last.amount_out,
        _ => return Err(DexError::InvalidPath),
    };
    if expected_final < min_amount_out {
        return Err(DexError::Slippage);
    }

    // Execute
    let router = env.current_contract_address();
    transfer(env, token_in, sender, &router, amount_in)?;

    let last_index = plan.len() - 1;
    let mut carried = amount_in;
    for (k, planned) in plan.iter().enumerate() {
        let hop = if planned.amount_in == carried {
            planned
        } else {
            quote_hop(env, &planned.pool, &planned.token_in, carried)?
        };
        let is_last = k as u32 == last_index;
        let recipient = if is_last { sender } else { &router };
        let hop_min = implied_min(hop.amount_out, min_amount_out, expected_final)?;

        let (consumed, amount_out) = execute_hop(env, &hop, recipient, hop_min)?;

        // Unspent input goes back to the sender
        if consumed < carried {
            transfer(env, &hop.token_in, &router, sender, carried - consumed)?;
        }
        carried = amount_out;
    }

    if carried < min_amount_out {
        return Err(DexError::Slippage);
    }

    emit_swap(env, sender, token_in, token_out, amount_in, carried, path.len());
    Ok(carried)
}

fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), DexError> {
    if amount == 0 {
        return Ok(());
    }
    match token::Client::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(DexError::TransferFailed),
    }
}
