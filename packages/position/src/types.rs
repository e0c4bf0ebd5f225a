use soroban_sdk::{contracttype, Address};

/// A liquidity position over [tick_lower, tick_upper)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub owner: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: u128,
    /// Fee growth inside the range at the last checkpoint (Q64.64)
    pub fee_growth_inside_last_0: u128,
    pub fee_growth_inside_last_1: u128,
    pub tokens_owed_0: u128,
    pub tokens_owed_1: u128,
}

impl Position {
    pub fn new(owner: Address, tick_lower: i32, tick_upper: i32) -> Self {
        Self {
            owner,
            tick_lower,
            tick_upper,
            liquidity: 0,
            fee_growth_inside_last_0: 0,
            fee_growth_inside_last_1: 0,
            tokens_owed_0: 0,
            tokens_owed_1: 0,
        }
    }
}

/// Public view of a position, owed fees include those not yet checkpointed
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionInfo {
    pub owner: Address,
    pub lower: i32,
    pub upper: i32,
    pub liquidity: u128,
    pub fees_owed_0: u128,
    pub fees_owed_1: u128,
}
