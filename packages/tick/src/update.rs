// Tick Update and Crossing Logic

use conxian_math::{add_delta, MathError};
use soroban_sdk::Env;

use crate::types::TickInfo;

/// Update a tick when liquidity is added or removed
///
/// Returns true when the tick flipped between initialized and uninitialized,
/// meaning the caller must flip its bit in the tick bitmap. A tick emptied
/// here keeps its fee growth outside until the caller has settled the
/// position and calls `clear_tick`.
pub fn update_tick(
    env: &Env,
    read_tick: impl Fn(&Env, i32) -> TickInfo,
    write_tick: impl Fn(&Env, i32, &TickInfo),
    tick: i32,
    current_tick: i32,
    liquidity_delta: i128,
    fee_growth_global_0: u128,
    fee_growth_global_1: u128,
    upper: bool,
) -> Result<bool, MathError> {
    let mut info = read_tick(env, tick);

    let liquidity_gross_before = info.liquidity_gross;
    let liquidity_gross_after = add_delta(liquidity_gross_before, liquidity_delta)?;

    let flipped = (liquidity_gross_after == 0) != (liquidity_gross_before == 0);

    if liquidity_gross_before == 0 {
        // Growth below an initializing tick is assumed to have happened below it
        if tick <= current_tick {
            info.fee_growth_outside_0 = fee_growth_global_0;
            info.fee_growth_outside_1 = fee_growth_global_1;
        } else {
            info.fee_growth_outside_0 = 0;
            info.fee_growth_outside_1 = 0;
        }
        info.initialized = true;
    }

    info.liquidity_gross = liquidity_gross_after;
    info.liquidity_net = if upper {
        info.liquidity_net.checked_sub(liquidity_delta)
    } else {
        info.liquidity_net.checked_add(liquidity_delta)
    }
    .ok_or(MathError::LiquidityOverflow)?;

    write_tick(env, tick, &info);

    Ok(flipped)
}

/// Reset a tick that no longer backs any liquidity
pub fn clear_tick(env: &Env, write_tick: impl Fn(&Env, i32, &TickInfo), tick: i32) {
    write_tick(env, tick, &TickInfo::default());
}

/// Cross a tick boundary during a swap
///
/// Flips the fee growth outside and returns the tick's net liquidity.
pub fn cross_tick(
    env: &Env,
    read_tick: impl Fn(&Env, i32) -> TickInfo,
    write_tick: impl Fn(&Env, i32, &TickInfo),
    tick: i32,
    fee_growth_global_0: u128,
    fee_growth_global_1: u128,
) -> i128 {
    let mut info = read_tick(env, tick);

    info.fee_growth_outside_0 = fee_growth_global_0.wrapping_sub(info.fee_growth_outside_0);
    info.fee_growth_outside_1 = fee_growth_global_1.wrapping_sub(info.fee_growth_outside_1);

    write_tick(env, tick, &info);

    info.liquidity_net
}
