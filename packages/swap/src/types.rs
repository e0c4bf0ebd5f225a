use conxian_tick::StagedCrossing;
use soroban_sdk::Vec;

/// Pool state the engine walks; the contract loads it and writes it back
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapState {
    pub sqrt_price_x96: u128,
    pub tick: i32,
    pub liquidity: u128,
    pub tick_spacing: i32,
    pub fee_growth_global_0: u128,
    pub fee_growth_global_1: u128,
}

/// Totals of a simulated swap
///
/// `crossings` lists the ticks crossed in order; nothing has been written
/// for them yet.
#[derive(Clone, Debug)]
pub struct SwapOutcome {
    /// Input consumed, fee included
    pub amount_in: u128,
    pub amount_out: u128,
    pub fee_paid: u128,
    pub crossings: Vec<StagedCrossing>,
}

impl SwapOutcome {
    pub fn ticks_crossed(&self) -> u32 {
        self.crossings.len()
    }
}
