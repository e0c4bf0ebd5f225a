use conxian_math::{mul_div, MathError, Q64};

use crate::types::Position;

/// Fees earned by `pos` since its last checkpoint
pub fn calculate_pending_fees(
    pos: &Position,
    fee_growth_inside_0: u128,
    fee_growth_inside_1: u128,
) -> Result<(u128, u128), MathError> {
    if pos.liquidity == 0 {
        return Ok((0, 0));
    }

    let delta_0 = fee_growth_inside_0.wrapping_sub(pos.fee_growth_inside_last_0);
    let delta_1 = fee_growth_inside_1.wrapping_sub(pos.fee_growth_inside_last_1);

    Ok((
        mul_div(pos.liquidity, delta_0, Q64)?,
        mul_div(pos.liquidity, delta_1, Q64)?,
    ))
}
