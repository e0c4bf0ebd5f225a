use conxian_math::{
    add_delta, compute_swap_step, mul_div, sqrt_price_to_tick, tick_to_sqrt_price, MathError,
    MAX_SQRT_RATIO, MAX_SWAP_ITERATIONS, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, Q64,
};
use conxian_tick::{cross_tick, next_initialized_tick_within_one_word, StagedCrossing, TickInfo};
use soroban_sdk::{Env, Vec};

use crate::types::{SwapOutcome, SwapState};

// ============================================================
// SWAP SIMULATION
// ============================================================

/// Walk the price across initialized ticks until `amount_specified` is
/// spent or liquidity runs out (exact input)
///
/// `state` is advanced in memory: price, tick, active liquidity and the
/// input token's global fee growth. Tick storage is only read; the crossings
/// to apply are returned in the outcome so the caller can commit them after
/// its own checks, or drop them for a quote.
pub fn simulate_swap<R, W>(
    env: &Env,
    state: &mut SwapState,
    read_tick: R,
    read_word: W,
    amount_specified: u128,
    zero_for_one: bool,
    fee_pips: u32,
) -> Result<SwapOutcome, MathError>
where
    R: Fn(&Env, i32) -> TickInfo,
    W: Fn(&Env, i32) -> u128,
{
    let sqrt_price_limit = if zero_for_one { MIN_SQRT_RATIO } else { MAX_SQRT_RATIO };

    let mut amount_remaining = amount_specified;
    let mut amount_out: u128 = 0;
    let mut fee_paid: u128 = 0;
    let mut crossings = Vec::new(env);
    let mut iterations = 0;

    while amount_remaining > 0 && state.sqrt_price_x96 != sqrt_price_limit {
        if iterations >= MAX_SWAP_ITERATIONS {
            break;
        }
        iterations += 1;

        let sqrt_price_start = state.sqrt_price_x96;

        let (tick_next, initialized) = next_initialized_tick_within_one_word(
            env,
            &read_word,
            state.tick,
            state.tick_spacing,
            zero_for_one,
        );
        let tick_next = tick_next.clamp(MIN_TICK, MAX_TICK);
        let sqrt_price_next_tick = tick_to_sqrt_price(tick_next)?;

        let step = compute_swap_step(
            state.sqrt_price_x96,
            sqrt_price_next_tick,
            state.liquidity,
            amount_remaining,
            fee_pips,
        )?;

        amount_remaining -= step.amount_in + step.fee_amount;
        amount_out = amount_out.checked_add(step.amount_out).ok_or(MathError::Overflow)?;
        fee_paid += step.fee_amount;

        if state.liquidity > 0 && step.fee_amount > 0 {
            let growth = mul_div(step.fee_amount, Q64, state.liquidity)?;
            if zero_for_one {
                state.fee_growth_global_0 = state.fee_growth_global_0.wrapping_add(growth);
            } else {
                state.fee_growth_global_1 = state.fee_growth_global_1.wrapping_add(growth);
            }
        }

        state.sqrt_price_x96 = step.sqrt_price_next;

        if step.sqrt_price_next == sqrt_price_next_tick {
            if initialized {
                let liquidity_net = read_tick(env, tick_next).liquidity_net;
                let delta = if zero_for_one { -liquidity_net } else { liquidity_net };
                state.liquidity = add_delta(state.liquidity, delta)?;

                crossings.push_back(StagedCrossing {
                    tick: tick_next,
                    fee_growth_global_0: state.fee_growth_global_0,
                    fee_growth_global_1: state.fee_growth_global_1,
                });
            }
            state.tick = if zero_for_one { tick_next - 1 } else { tick_next };
        } else if step.sqrt_price_next != sqrt_price_start {
            state.tick = sqrt_price_to_tick(step.sqrt_price_next)?;
        }
    }

    // Hitting MIN_SQRT_RATIO leaves the tick one below the boundary
    if state.tick < MIN_TICK {
        state.tick = MIN_TICK;
    }

    Ok(SwapOutcome {
        amount_in: amount_specified - amount_remaining,
        amount_out,
        fee_paid,
        crossings,
    })
}

/// Write the tick crossings of a committed swap
pub fn apply_crossings(
    env: &Env,
    read_tick: impl Fn(&Env, i32) -> TickInfo,
    write_tick: impl Fn(&Env, i32, &TickInfo),
    crossings: &Vec<StagedCrossing>,
) {
    for crossing in crossings.iter() {
        cross_tick(
            env,
            &read_tick,
            &write_tick,
            crossing.tick,
            crossing.fee_growth_global_0,
            crossing.fee_growth_global_1,
        );
    }
}
