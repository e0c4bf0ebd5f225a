// Pool Types

use soroban_sdk::{contracttype, Address};

pub use conxian_position::{Position, PositionInfo};
pub use conxian_tick::TickInfo;

// ============================================================
// POOL CONFIGURATION
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Fee setter and pause authority
    pub admin: Address,
    /// Swap fee in hundredths of a basis point (3000 = 0.30%)
    pub fee: u32,
    pub tick_spacing: i32,
    pub paused: bool,
}

// ============================================================
// POOL STATE
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Current sqrt price, Q64.96
    pub sqrt_price_x96: u128,
    pub current_tick: i32,
    /// Liquidity active at the current tick
    pub liquidity: u128,
    /// Sorted: token0 < token1
    pub token0: Address,
    pub token1: Address,
    /// Fees per unit of liquidity, Q64.64, wrapping
    pub fee_growth_global_0: u128,
    pub fee_growth_global_1: u128,
}
