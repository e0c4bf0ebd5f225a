//! Router type definitions

use conxian_types::PoolRef;
use soroban_sdk::{contracttype, Address, Vec};

// ============================================================
// ROUTER CONFIG
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct RouterConfig {
    pub admin: Address,
    /// Registry consulted by `find_best_route`
    pub registry: Address,
    /// Intermediate token for two-hop candidates
    pub base_asset: Address,
    /// Fee tiers tried for every candidate pool
    pub fee_tiers: Vec<u32>,
}

// ============================================================
// ROUTES
// ============================================================

/// Best route found through the registry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouteQuote {
    /// Pools in execution order, empty when no route exists
    pub path: Vec<PoolRef>,
    pub amount_out: i128,
}

/// Graph edge between two tokens
///
/// Added once per direction, so `token_a` is always the side the hop sells.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouteEdge {
    pub token_a: Address,
    pub token_b: Address,
    pub pool: PoolRef,
    /// Liquidity weight; larger is cheaper
    pub liquidity: u128,
    pub fee_bps: u32,
}

/// One hop of a graph path
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathHop {
    pub pool: PoolRef,
    pub token_in: Address,
    pub token_out: Address,
    pub fee_bps: u32,
}

// ============================================================
// EXECUTION PLAN
// ============================================================

/// A quoted hop, before execution
#[contracttype]
#[derive(Clone, Debug)]
pub struct HopPlan {
    pub pool: PoolRef,
    pub token_in: Address,
    pub token_out: Address,
    /// Direction for concentrated pools
    pub zero_for_one: bool,
    /// Input the hop receives
    pub amount_in: i128,
    /// Input the pool will actually take, fee included
    pub amount_consumed: i128,
    pub amount_out: i128,
}
