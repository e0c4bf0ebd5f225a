// SPDX-License-Identifier: MIT
// Single swap step within one initialized-tick interval (exact input)

use crate::constants::FEE_DENOMINATOR;
use crate::error::MathError;
use crate::full_math::{mul_div, mul_div_rounding_up};
use crate::sqrt_price::{get_amount0_delta, get_amount1_delta, get_next_sqrt_price_from_input};

/// Result of a single swap step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapStep {
    /// Sqrt price after this step
    pub sqrt_price_next: u128,
    /// Input consumed, excluding fee
    pub amount_in: u128,
    /// Output produced
    pub amount_out: u128,
    /// Fee taken from the input
    pub fee_amount: u128,
}

/// Compute how much of `amount_remaining` can be swapped before reaching
/// `sqrt_price_target`
///
/// Direction is implied by the price ordering: current >= target means
/// token0 in. `fee_pips` is in hundredths of a bip.
/// Invariant: `amount_in + fee_amount <= amount_remaining`.
pub fn compute_swap_step(
    sqrt_price_current: u128,
    sqrt_price_target: u128,
    liquidity: u128,
    amount_remaining: u128,
    fee_pips: u32,
) -> Result<SwapStep, MathError> {
    if fee_pips >= FEE_DENOMINATOR {
        return Err(MathError::Overflow);
    }

    let zero_for_one = sqrt_price_current >= sqrt_price_target;
    let fee_complement = (FEE_DENOMINATOR - fee_pips) as u128;

    let amount_less_fee = mul_div(amount_remaining, fee_complement, FEE_DENOMINATOR as u128)?;

    // Input needed to move all the way to the target; an overflow means the
    // target is out of reach for any representable input
    let amount_to_target = if zero_for_one {
        get_amount0_delta(sqrt_price_target, sqrt_price_current, liquidity, true)
    } else {
        get_amount1_delta(sqrt_price_current, sqrt_price_target, liquidity, true)
    };
    let amount_to_target = match amount_to_target {
        Ok(v) => v,
        Err(MathError::Overflow) => u128::MAX,
        Err(e) => return Err(e),
    };

    let reaches_target = amount_less_fee >= amount_to_target;
    let sqrt_price_next = if reaches_target {
        sqrt_price_target
    } else {
        get_next_sqrt_price_from_input(
            sqrt_price_current,
            liquidity,
            amount_less_fee,
            zero_for_one,
        )?
    };

    let (mut amount_in, amount_out) = if zero_for_one {
        let amount_in = if reaches_target {
            amount_to_target
        } else {
            get_amount0_delta(sqrt_price_next, sqrt_price_current, liquidity, true)?
        };
        let amount_out = get_amount1_delta(sqrt_price_next, sqrt_price_current, liquidity, false)?;
        (amount_in, amount_out)
    } else {
        let amount_in = if reaches_target {
            amount_to_target
        } else {
            get_amount1_delta(sqrt_price_current, sqrt_price_next, liquidity, true)?
        };
        let amount_out = get_amount0_delta(sqrt_price_current, sqrt_price_next, liquidity, false)?;
        (amount_in, amount_out)
    };

    if amount_in > amount_remaining {
        amount_in = amount_remaining;
    }

    let fee_amount = if reaches_target {
        mul_div_rounding_up(amount_in, fee_pips as u128, fee_complement)?
            .min(amount_remaining - amount_in)
    } else {
        // Price stops short of the target: whatever is left is fee
        amount_remaining - amount_in
    };

    Ok(SwapStep {
        sqrt_price_next,
        amount_in,
        amount_out,
        fee_amount,
    })
}
