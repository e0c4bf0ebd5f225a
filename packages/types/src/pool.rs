// Pool references and cross-contract result types

use soroban_sdk::{contracttype, Address};

/// Closed set of pool implementations the router can drive
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PoolKind {
    ConcentratedLiquidity,
    ConstantProduct,
}

/// A pool address tagged with its kind
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolRef {
    pub address: Address,
    pub kind: PoolKind,
}

impl PoolRef {
    pub fn concentrated(address: Address) -> Self {
        Self { address, kind: PoolKind::ConcentratedLiquidity }
    }

    pub fn constant_product(address: Address) -> Self {
        Self { address, kind: PoolKind::ConstantProduct }
    }
}

/// Outcome of an executed concentrated-liquidity swap
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapResult {
    /// Input charged to the sender, fee included
    pub amount_in: i128,
    pub amount_out: i128,
    pub fee_paid: i128,
    pub sqrt_price_x96: u128,
    pub tick: i32,
}

/// Read-only simulation of a swap
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapQuote {
    pub amount_in: i128,
    pub amount_out: i128,
    pub fee_paid: i128,
    pub sqrt_price_after: u128,
    pub tick_after: i32,
    pub ticks_crossed: u32,
}

/// A pool as listed by the registry
///
/// Tokens are stored sorted, so `(token0, token1, fee_tier)` identifies the
/// entry regardless of the order they were registered in.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolRecord {
    pub id: u32,
    pub token0: Address,
    pub token1: Address,
    pub fee_tier: u32,
    pub pool: PoolRef,
    /// Ledger timestamp at registration
    pub registered_at: u64,
}
