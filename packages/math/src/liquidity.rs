// SPDX-License-Identifier: MIT
// Liquidity calculations

use crate::error::MathError;
use crate::sqrt_price::{get_amount0_delta, get_amount1_delta};

/// Apply a signed liquidity delta
pub fn add_delta(liquidity: u128, delta: i128) -> Result<u128, MathError> {
    if delta < 0 {
        liquidity
            .checked_sub(delta.unsigned_abs())
            .ok_or(MathError::LiquidityUnderflow)
    } else {
        liquidity
            .checked_add(delta as u128)
            .ok_or(MathError::LiquidityOverflow)
    }
}

/// Token amounts represented by `liquidity` over [sqrt_lower, sqrt_upper]
/// at the current price
///
/// Mints round up (the pool never receives too little), burns round down
/// (the pool never pays out too much).
pub fn get_amounts_for_liquidity(
    sqrt_price_current: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<(u128, u128), MathError> {
    if sqrt_price_lower >= sqrt_price_upper {
        return Err(MathError::InvalidPriceInput);
    }

    if sqrt_price_current <= sqrt_price_lower {
        // Entirely token0
        let amount0 = get_amount0_delta(sqrt_price_lower, sqrt_price_upper, liquidity, round_up)?;
        Ok((amount0, 0))
    } else if sqrt_price_current < sqrt_price_upper {
        let amount0 = get_amount0_delta(sqrt_price_current, sqrt_price_upper, liquidity, round_up)?;
        let amount1 = get_amount1_delta(sqrt_price_lower, sqrt_price_current, liquidity, round_up)?;
        Ok((amount0, amount1))
    } else {
        // Entirely token1
        let amount1 = get_amount1_delta(sqrt_price_lower, sqrt_price_upper, liquidity, round_up)?;
        Ok((0, amount1))
    }
}

/// Convert a non-negative u128 amount to i128 for token transfers
#[inline]
pub fn to_token_amount(amount: u128) -> Result<i128, MathError> {
    i128::try_from(amount).map_err(|_| MathError::Overflow)
}
