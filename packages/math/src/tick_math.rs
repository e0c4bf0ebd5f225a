// SPDX-License-Identifier: MIT
// Tick <-> sqrt price conversion (Q64.96)

use crate::constants::{MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, Q96};
use crate::error::MathError;
use crate::full_math::{mul_shift_128, U256};

/// Q128 factors for 1 / sqrt(1.0001)^(2^i), i = 0..=18
const LADDER: [u128; 19] = [
    0xfffcb933bd6fad37aa2d162d1a594001,
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x09aa508b5b7a84e1c677de54f3e99bc9,
    0x005d6af8dedb81196699c329225ee604,
    0x00002216e584f5fa1ea926041bedfe98,
];

/// Convert tick to sqrt price in Q64.96 format
/// Formula: sqrt(1.0001^tick) * 2^96
pub fn tick_to_sqrt_price(tick: i32) -> Result<u128, MathError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfRange);
    }

    let abs_tick = tick.unsigned_abs();

    // None stands for exactly 1.0 in Q128, which does not fit a u128
    let mut ratio: Option<u128> = None;
    for (i, factor) in LADDER.iter().enumerate() {
        if abs_tick & (1u32 << i) != 0 {
            ratio = Some(match ratio {
                Some(r) => mul_shift_128(r, *factor),
                None => *factor,
            });
        }
    }

    let ratio = match ratio {
        Some(r) => r,
        None => return Ok(Q96),
    };

    if tick > 0 {
        // Invert: (2^256 - 1) / ratio, then Q128 -> Q96 rounding up
        let (inverted, _) = U256::MAX.div_rem(ratio);
        let shifted = U256 {
            hi: inverted.hi >> 32,
            lo: (inverted.hi << 96) | (inverted.lo >> 32),
        };
        let round = if inverted.lo & 0xFFFF_FFFF != 0 { 1 } else { 0 };
        shifted
            .to_u128()
            .and_then(|v| v.checked_add(round))
            .ok_or(MathError::Overflow)
    } else {
        let round = if ratio & 0xFFFF_FFFF != 0 { 1 } else { 0 };
        Ok((ratio >> 32) + round)
    }
}

/// Convert sqrt price to the greatest tick whose sqrt price is <= the input
///
/// Binary search over the tick range; every candidate is verified against
/// `tick_to_sqrt_price` so the result never overshoots.
pub fn sqrt_price_to_tick(sqrt_price_x96: u128) -> Result<i32, MathError> {
    if !(MIN_SQRT_RATIO..=MAX_SQRT_RATIO).contains(&sqrt_price_x96) {
        return Err(MathError::SqrtPriceOutOfRange);
    }

    let mut low = MIN_TICK;
    let mut high = MAX_TICK;

    while low < high {
        let mid = low + (high - low + 1) / 2;
        if tick_to_sqrt_price(mid)? <= sqrt_price_x96 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}

/// Check if a tick is within the valid range
#[inline]
pub fn is_valid_tick(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

/// Check if a tick sits on the spacing grid
#[inline]
pub fn is_aligned(tick: i32, tick_spacing: i32) -> bool {
    tick_spacing > 0 && tick.rem_euclid(tick_spacing) == 0
}

/// Tick spacing used for a fee tier (fee in hundredths of a bip)
pub fn tick_spacing_for_fee(fee: u32) -> i32 {
    match fee {
        100 => 1,
        500 => 5,
        3000 => 10,
        10_000 => 50,
        _ => 10,
    }
}
