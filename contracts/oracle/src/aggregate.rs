//! Multi-source price aggregation
//!
//! Everything here is a pure function of the samples and `now`.

use conxian_types::DexError;
use soroban_sdk::{Env, Vec};

use crate::types::{AggregatedPrice, PriceSample};

pub const BPS: u32 = 10_000;

/// Largest decimals difference `normalize_price` will scale across
pub const MAX_DECIMALS: u32 = 38;

/// Rescale `price` from `from` decimals to `to` decimals
///
/// Scaling down truncates.
pub fn normalize_price(price: i128, from: u32, to: u32) -> Result<i128, DexError> {
    if from > MAX_DECIMALS || to > MAX_DECIMALS {
        return Err(DexError::InvalidPrice);
    }
    if from == to {
        return Ok(price);
    }
    if from < to {
        let factor = 10i128.checked_pow(to - from).ok_or(DexError::MathOverflow)?;
        price.checked_mul(factor).ok_or(DexError::MathOverflow)
    } else {
        let factor = 10i128.checked_pow(from - to).ok_or(DexError::MathOverflow)?;
        Ok(price / factor)
    }
}

#[inline]
pub fn is_fresh(timestamp: u64, now: u64, stale_threshold: u64) -> bool {
    now.saturating_sub(timestamp) <= stale_threshold
}

/// Confidence-weighted mean of the fresh samples, `None` when none are fresh
pub fn weighted_mean(
    samples: &Vec<PriceSample>,
    now: u64,
    stale_threshold: u64,
) -> Result<Option<AggregatedPrice>, DexError> {
    let mut weighted: i128 = 0;
    let mut total_weight: i128 = 0;
    let mut sources: u32 = 0;

    for sample in samples.iter() {
        if !is_fresh(sample.timestamp, now, stale_threshold) || sample.confidence == 0 {
            continue;
        }
        let weight = sample.confidence as i128;
        weighted = sample
            .price
            .checked_mul(weight)
            .and_then(|v| weighted.checked_add(v))
            .ok_or(DexError::MathOverflow)?;
        total_weight += weight;
        sources += 1;
    }

    if sources == 0 {
        return Ok(None);
    }

    Ok(Some(AggregatedPrice {
        price: weighted / total_weight,
        confidence: (total_weight / sources as i128) as u32,
        sources,
        timestamp: now,
    }))
}

/// Median of the fresh sample prices
///
/// An even count averages the two middle prices. Fewer than `min_sources`
/// fresh samples fails with `InsufficientSources`.
pub fn median_price(
    env: &Env,
    samples: &Vec<PriceSample>,
    now: u64,
    stale_threshold: u64,
    min_sources: u32,
) -> Result<i128, DexError> {
    // Insertion sort; one sample per source keeps this small
    let mut sorted: Vec<i128> = Vec::new(env);
    for sample in samples.iter() {
        if !is_fresh(sample.timestamp, now, stale_threshold) {
            continue;
        }
        let mut at = sorted.len();
        while at > 0 && sorted.get_unchecked(at - 1) > sample.price {
            at -= 1;
        }
        sorted.insert(at, sample.price);
    }

    let count = sorted.len();
    if count == 0 || count < min_sources {
        return Err(DexError::InsufficientSources);
    }

    let mid = count / 2;
    if count % 2 == 1 {
        Ok(sorted.get_unchecked(mid))
    } else {
        let low = sorted.get_unchecked(mid - 1);
        let high = sorted.get_unchecked(mid);
        Ok(low + (high - low) / 2)
    }
}

/// True when `candidate` is more than `max_bps` away from `reference`
pub fn exceeds_deviation(reference: i128, candidate: i128, max_bps: u32) -> bool {
    if reference <= 0 {
        return false;
    }
    let diff = (candidate - reference).unsigned_abs();
    match diff.checked_mul(BPS as u128) {
        Some(scaled) => scaled > (max_bps as u128).saturating_mul(reference as u128),
        None => true,
    }
}
