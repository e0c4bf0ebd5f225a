// SPDX-License-Identifier: MIT
// Sqrt price calculations

use crate::constants::Q96;
use crate::error::MathError;
use crate::full_math::{mul_div, mul_div_rounding_up};

#[inline]
fn sorted(a: u128, b: u128) -> (u128, u128) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

/// Amount of token0 between two sqrt prices for a given liquidity
/// delta_x = L * (sqrt_upper - sqrt_lower) / (sqrt_lower * sqrt_upper)
pub fn get_amount0_delta(
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u128, MathError> {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);

    if sqrt_lower == 0 {
        return Err(MathError::InvalidPriceInput);
    }
    let delta = sqrt_upper - sqrt_lower;

    if round_up {
        let scaled = mul_div_rounding_up(liquidity, Q96, sqrt_lower)?;
        mul_div_rounding_up(scaled, delta, sqrt_upper)
    } else {
        let scaled = mul_div(liquidity, Q96, sqrt_lower)?;
        mul_div(scaled, delta, sqrt_upper)
    }
}

/// Amount of token1 between two sqrt prices for a given liquidity
/// delta_y = L * (sqrt_upper - sqrt_lower)
pub fn get_amount1_delta(
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u128, MathError> {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);
    let delta = sqrt_upper - sqrt_lower;

    if round_up {
        mul_div_rounding_up(liquidity, delta, Q96)
    } else {
        mul_div(liquidity, delta, Q96)
    }
}

/// Next sqrt price after adding `amount_in` of the input token
///
/// token0 in: sqrt_next = L / (L / sqrt_price + amount), rounded up
/// token1 in: sqrt_next = sqrt_price + amount / L, rounded down
pub fn get_next_sqrt_price_from_input(
    sqrt_price_x96: u128,
    liquidity: u128,
    amount_in: u128,
    zero_for_one: bool,
) -> Result<u128, MathError> {
    if sqrt_price_x96 == 0 || liquidity == 0 {
        return Err(MathError::InvalidPriceInput);
    }
    if amount_in == 0 {
        return Ok(sqrt_price_x96);
    }

    if zero_for_one {
        let base = mul_div(liquidity, Q96, sqrt_price_x96)?;
        let denominator = base.checked_add(amount_in).ok_or(MathError::Overflow)?;
        mul_div_rounding_up(liquidity, Q96, denominator)
    } else {
        let quotient = mul_div(amount_in, Q96, liquidity)?;
        sqrt_price_x96
            .checked_add(quotient)
            .ok_or(MathError::Overflow)
    }
}
