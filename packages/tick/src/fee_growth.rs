// Fee Growth Inside a Range

use soroban_sdk::Env;

use crate::types::TickInfo;

/// Fee growth per unit of liquidity accumulated strictly inside
/// [tick_lower, tick_upper), for both tokens
///
/// All arithmetic wraps; only differences between two readings are meaningful.
pub fn get_fee_growth_inside(
    env: &Env,
    read_tick: impl Fn(&Env, i32) -> TickInfo,
    tick_lower: i32,
    tick_upper: i32,
    tick_current: i32,
    fee_growth_global_0: u128,
    fee_growth_global_1: u128,
) -> (u128, u128) {
    let lower = read_tick(env, tick_lower);
    let upper = read_tick(env, tick_upper);

    let below = if tick_current >= tick_lower {
        (lower.fee_growth_outside_0, lower.fee_growth_outside_1)
    } else {
        (
            fee_growth_global_0.wrapping_sub(lower.fee_growth_outside_0),
            fee_growth_global_1.wrapping_sub(lower.fee_growth_outside_1),
        )
    };

    let above = if tick_current < tick_upper {
        (upper.fee_growth_outside_0, upper.fee_growth_outside_1)
    } else {
        (
            fee_growth_global_0.wrapping_sub(upper.fee_growth_outside_0),
            fee_growth_global_1.wrapping_sub(upper.fee_growth_outside_1),
        )
    };

    (
        fee_growth_global_0.wrapping_sub(below.0).wrapping_sub(above.0),
        fee_growth_global_1.wrapping_sub(below.1).wrapping_sub(above.1),
    )
}
