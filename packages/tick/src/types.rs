// Tick Types

use soroban_sdk::contracttype;

/// Information stored for each initialized tick
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TickInfo {
    /// Total liquidity referencing this tick
    pub liquidity_gross: u128,
    /// Net liquidity change when crossing left-to-right
    pub liquidity_net: i128,
    /// Fee growth on the other side of this tick for token0 (Q64.64)
    pub fee_growth_outside_0: u128,
    /// Fee growth on the other side of this tick for token1 (Q64.64)
    pub fee_growth_outside_1: u128,
    pub initialized: bool,
}

/// A tick crossing recorded during a swap, applied only once the swap commits
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StagedCrossing {
    pub tick: i32,
    pub fee_growth_global_0: u128,
    pub fee_growth_global_1: u128,
}
