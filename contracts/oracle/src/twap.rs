//! Time-weighted average price over a ring buffer
//!
//! Each observation carries the running sum of `price * seconds`, so the
//! average between any two instants is a difference of cumulatives divided
//! by the elapsed time. The buffer keeps the last `TWAP_BUFFER_SIZE`
//! observations; older history is overwritten.

use conxian_types::DexError;
use soroban_sdk::{Env, Vec};

use crate::types::{TwapBuffer, TwapObservation};

pub const TWAP_BUFFER_SIZE: u32 = 64;

pub fn new_buffer(env: &Env) -> TwapBuffer {
    TwapBuffer {
        observations: Vec::new(env),
        newest: 0,
    }
}

/// Most recent observation
pub fn latest(buffer: &TwapBuffer) -> Option<TwapObservation> {
    buffer.observations.get(buffer.newest)
}

fn oldest_slot(buffer: &TwapBuffer) -> u32 {
    if buffer.observations.len() < TWAP_BUFFER_SIZE {
        0
    } else {
        (buffer.newest + 1) % TWAP_BUFFER_SIZE
    }
}

/// Cumulative price extrapolated from `obs` to `at` (`at >= obs.timestamp`)
fn cumulative_at(obs: &TwapObservation, at: u64) -> Result<i128, DexError> {
    let elapsed = at.saturating_sub(obs.timestamp) as i128;
    obs.price
        .checked_mul(elapsed)
        .and_then(|v| obs.price_cumulative.checked_add(v))
        .ok_or(DexError::MathOverflow)
}

/// Record `price` at `now`
///
/// A second observation in the same second replaces the price of the first.
pub fn record(buffer: &mut TwapBuffer, now: u64, price: i128) -> Result<(), DexError> {
    let Some(last) = latest(buffer) else {
        buffer.observations.push_back(TwapObservation {
            timestamp: now,
            price,
            price_cumulative: 0,
        });
        buffer.newest = 0;
        return Ok(());
    };

    if now <= last.timestamp {
        buffer.observations.set(
            buffer.newest,
            TwapObservation { price, ..last },
        );
        return Ok(());
    }

    let obs = TwapObservation {
        timestamp: now,
        price,
        price_cumulative: cumulative_at(&last, now)?,
    };
    let len = buffer.observations.len();
    if len < TWAP_BUFFER_SIZE {
        buffer.observations.push_back(obs);
        buffer.newest = len;
    } else {
        let slot = (buffer.newest + 1) % TWAP_BUFFER_SIZE;
        buffer.observations.set(slot, obs);
        buffer.newest = slot;
    }
    Ok(())
}

/// Average price over `[now - period, now]`
///
/// The window is clipped to the oldest observation; with a single
/// observation the average is its price. `NoData` unless some observation
/// falls inside the window.
pub fn twap(buffer: &TwapBuffer, now: u64, period: u64) -> Result<i128, DexError> {
    if period == 0 {
        return Err(DexError::InvalidPeriod);
    }
    let last = latest(buffer).ok_or(DexError::NoData)?;
    if last.timestamp < now.saturating_sub(period) {
        return Err(DexError::NoData);
    }
    let now = now.max(last.timestamp);
    let cumulative_now = cumulative_at(&last, now)?;

    let oldest_index = oldest_slot(buffer);
    let oldest = buffer.observations.get_unchecked(oldest_index);
    let start = now.saturating_sub(period).max(oldest.timestamp);
    if start >= now {
        return Ok(last.price);
    }

    // Latest observation at or before `start`
    let len = buffer.observations.len();
    let mut anchor = oldest;
    for k in 1..len {
        let obs = buffer.observations.get_unchecked((oldest_index + k) % len);
        if obs.timestamp > start {
            break;
        }
        anchor = obs;
    }

    let cumulative_start = cumulative_at(&anchor, start)?;
    Ok((cumulative_now - cumulative_start) / (now - start) as i128)
}

/// (cumulative price, timestamp) extrapolated to `now`
pub fn cumulative(buffer: &TwapBuffer, now: u64) -> Result<(i128, u64), DexError> {
    let last = latest(buffer).ok_or(DexError::NoData)?;
    let now = now.max(last.timestamp);
    Ok((cumulative_at(&last, now)?, now))
}
