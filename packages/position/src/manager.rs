// Position Management Logic

use conxian_math::{add_delta, MathError};

use crate::fees::calculate_pending_fees;
use crate::types::{Position, PositionInfo};

/// Checkpoint a position's fees: credit what it earned since the last
/// checkpoint to tokens owed and move the checkpoint to `fee_growth_inside`
pub fn update_position(
    pos: &mut Position,
    fee_growth_inside_0: u128,
    fee_growth_inside_1: u128,
) -> Result<(), MathError> {
    let (fee_0, fee_1) = calculate_pending_fees(pos, fee_growth_inside_0, fee_growth_inside_1)?;

    pos.tokens_owed_0 = pos.tokens_owed_0.checked_add(fee_0).ok_or(MathError::Overflow)?;
    pos.tokens_owed_1 = pos.tokens_owed_1.checked_add(fee_1).ok_or(MathError::Overflow)?;

    pos.fee_growth_inside_last_0 = fee_growth_inside_0;
    pos.fee_growth_inside_last_1 = fee_growth_inside_1;
    Ok(())
}

/// Checkpoint fees, then apply a signed liquidity change
pub fn modify_position(
    pos: &mut Position,
    liquidity_delta: i128,
    fee_growth_inside_0: u128,
    fee_growth_inside_1: u128,
) -> Result<(), MathError> {
    update_position(pos, fee_growth_inside_0, fee_growth_inside_1)?;
    pos.liquidity = add_delta(pos.liquidity, liquidity_delta)?;
    Ok(())
}

/// Credit principal released by a burn
pub fn credit_tokens_owed(
    pos: &mut Position,
    amount0: u128,
    amount1: u128,
) -> Result<(), MathError> {
    pos.tokens_owed_0 = pos.tokens_owed_0.checked_add(amount0).ok_or(MathError::Overflow)?;
    pos.tokens_owed_1 = pos.tokens_owed_1.checked_add(amount1).ok_or(MathError::Overflow)?;
    Ok(())
}

/// Take everything owed, leaving the position with nothing to collect
pub fn take_tokens_owed(pos: &mut Position) -> (u128, u128) {
    let owed = (pos.tokens_owed_0, pos.tokens_owed_1);
    pos.tokens_owed_0 = 0;
    pos.tokens_owed_1 = 0;
    owed
}

/// View of a position with pending fees folded in
pub fn position_info(
    pos: &Position,
    fee_growth_inside_0: u128,
    fee_growth_inside_1: u128,
) -> Result<PositionInfo, MathError> {
    let (pending_0, pending_1) = calculate_pending_fees(
        pos,
        fee_growth_inside_0,
        fee_growth_inside_1,
    )?;
    Ok(PositionInfo {
        owner: pos.owner.clone(),
        lower: pos.tick_lower,
        upper: pos.tick_upper,
        liquidity: pos.liquidity,
        fees_owed_0: pos.tokens_owed_0.checked_add(pending_0).ok_or(MathError::Overflow)?,
        fees_owed_1: pos.tokens_owed_1.checked_add(pending_1).ok_or(MathError::Overflow)?,
    })
}
