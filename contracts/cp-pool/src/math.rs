// Constant-product pricing

use conxian_math::{mul_div, sqrt_product, MathError};

pub const BPS_DENOMINATOR: u128 = 10_000;

/// Output for `amount_in` against reserves under x * y = k, fee taken
/// from the input
pub fn get_amount_out(
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_bps: u32,
) -> Result<u128, MathError> {
    if reserve_in == 0 || reserve_out == 0 {
        return Ok(0);
    }
    let amount_in_less_fee = mul_div(
        amount_in,
        BPS_DENOMINATOR - fee_bps as u128,
        BPS_DENOMINATOR,
    )?;
    let denominator = reserve_in
        .checked_add(amount_in_less_fee)
        .ok_or(MathError::Overflow)?;
    mul_div(reserve_out, amount_in_less_fee, denominator)
}

/// Shares minted for a deposit: geometric mean on the first deposit,
/// otherwise the smaller proportional claim
pub fn shares_for_deposit(
    amount0: u128,
    amount1: u128,
    reserve0: u128,
    reserve1: u128,
    total_shares: u128,
) -> Result<u128, MathError> {
    if total_shares == 0 {
        return Ok(sqrt_product(amount0, amount1));
    }
    let by0 = mul_div(amount0, total_shares, reserve0)?;
    let by1 = mul_div(amount1, total_shares, reserve1)?;
    Ok(by0.min(by1))
}

/// Reserves released by burning `shares` of `total_shares`, rounded down
pub fn amounts_for_shares(
    shares: u128,
    reserve0: u128,
    reserve1: u128,
    total_shares: u128,
) -> Result<(u128, u128), MathError> {
    Ok((
        mul_div(shares, reserve0, total_shares)?,
        mul_div(shares, reserve1, total_shares)?,
    ))
}
