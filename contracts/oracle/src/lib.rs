#![no_std]

//! # Conxian Oracle
//!
//! Per-asset price aggregation across registered sources. `get_price`
//! serves the confidence-weighted aggregate while it is fresh and falls back
//! to the TWAP over the configured window once it goes stale; the response
//! says which one the caller got.

use conxian_types::DexError;
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

pub mod aggregate;
mod events;
mod storage;
pub mod twap;
mod types;

use aggregate::{
    exceeds_deviation,
    is_fresh,
    median_price,
    normalize_price,
    weighted_mean,
    BPS,
    MAX_DECIMALS,
};
use events::*;
use storage::*;
pub use types::*;

#[contract]
pub struct ConxianOracle;

#[contractimpl]
impl ConxianOracle {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(env: Env, admin: Address, config: OracleConfig) -> Result<(), DexError> {
        admin.require_auth();

        if has_admin(&env) {
            return Err(DexError::AlreadyInitialized);
        }
        validate_config(&config)?;

        write_admin(&env, &admin);
        write_config(&env, &config);

        emit_initialized(&env, &admin);
        Ok(())
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    pub fn set_config(env: Env, admin: Address, config: OracleConfig) -> Result<(), DexError> {
        require_admin(&env, &admin)?;
        validate_config(&config)?;

        write_config(&env, &config);
        emit_config_updated(&env, config.stale_threshold, config.twap_window);
        Ok(())
    }

    pub fn set_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), DexError> {
        require_admin(&env, &admin)?;

        write_admin(&env, &new_admin);
        emit_admin_changed(&env, &admin, &new_admin);
        Ok(())
    }

    /// Bind `source_id` to `operator`, replacing any previous operator
    ///
    /// An operator runs at most one source.
    pub fn register_source(
        env: Env,
        admin: Address,
        source_id: u32,
        operator: Address,
    ) -> Result<(), DexError> {
        require_admin(&env, &admin)?;

        if let Some(existing) = read_operator_source(&env, &operator) {
            if existing != source_id {
                return Err(DexError::InvalidConfig);
            }
        }
        if let Some(previous) = read_source_operator(&env, source_id) {
            remove_source(&env, source_id, &previous);
        }
        write_source(&env, source_id, &operator);

        emit_source_registered(&env, source_id, &operator);
        Ok(())
    }

    /// Unbind a source; its samples stop counting immediately
    pub fn remove_source(env: Env, admin: Address, source_id: u32) -> Result<(), DexError> {
        require_admin(&env, &admin)?;

        let operator = read_source_operator(&env, source_id).ok_or(DexError::InvalidConfig)?;
        remove_source(&env, source_id, &operator);

        emit_source_removed(&env, source_id);
        Ok(())
    }

    /// Open the breaker to reject every price write, close it to resume
    pub fn set_circuit_breaker(env: Env, admin: Address, open: bool) -> Result<(), DexError> {
        require_admin(&env, &admin)?;

        write_circuit_open(&env, open);
        emit_circuit_breaker(&env, open);
        Ok(())
    }

    // ========================================================
    // PRICE SUBMISSION
    // ========================================================

    /// Submit through the operator's own source, already in the oracle's
    /// decimals
    pub fn set_price(
        env: Env,
        operator: Address,
        asset: Address,
        price: i128,
        confidence: u32,
    ) -> Result<i128, DexError> {
        operator.require_auth();
        let config = read_config(&env)?;
        let source_id = read_operator_source(&env, &operator).ok_or(DexError::NotAuthorized)?;

        ingest(&env, &config, &asset, source_id, price, config.price_decimals, confidence)
    }

    /// Submit a sample for `source_id` in the source's own decimals
    ///
    /// Returns the new aggregate price.
    pub fn submit_price(
        env: Env,
        operator: Address,
        asset: Address,
        source_id: u32,
        price: i128,
        decimals: u32,
        confidence: u32,
    ) -> Result<i128, DexError> {
        operator.require_auth();
        let config = read_config(&env)?;
        match read_source_operator(&env, source_id) {
            Some(registered) if registered == operator => {}
            _ => return Err(DexError::NotAuthorized),
        }

        ingest(&env, &config, &asset, source_id, price, decimals, confidence)
    }

    /// Record a TWAP observation directly and return the TWAP over `period`
    pub fn update_twap(
        env: Env,
        caller: Address,
        asset: Address,
        period: u64,
        price: i128,
    ) -> Result<i128, DexError> {
        require_admin(&env, &caller)?;

        if is_circuit_open(&env) {
            return Err(DexError::CircuitOpen);
        }
        if period == 0 {
            return Err(DexError::InvalidPeriod);
        }
        if price <= 0 {
            return Err(DexError::InvalidPrice);
        }

        let now = env.ledger().timestamp();
        let mut buffer = read_twap_buffer(&env, &asset).unwrap_or(twap::new_buffer(&env));
        twap::record(&mut buffer, now, price)?;
        let average = twap::twap(&buffer, now, period)?;
        write_twap_buffer(&env, &asset, &buffer);

        emit_twap_updated(&env, &asset, price, period, average);
        Ok(average)
    }

    // ========================================================
    // PRICE QUERIES
    // ========================================================

    /// Live aggregate when fresh, otherwise the TWAP over `twap_window`
    pub fn get_price(env: Env, asset: Address) -> Result<PriceResponse, DexError> {
        let config = read_config(&env)?;
        let now = env.ledger().timestamp();

        if let Some(aggregate) = read_aggregate(&env, &asset) {
            if is_fresh(aggregate.timestamp, now, config.stale_threshold) {
                return Ok(PriceResponse {
                    price: aggregate.price,
                    timestamp: aggregate.timestamp,
                    provenance: Provenance::Live,
                });
            }
        }

        let buffer = read_twap_buffer(&env, &asset).ok_or(DexError::NoData)?;
        let price = twap::twap(&buffer, now, config.twap_window)?;
        let timestamp = twap::latest(&buffer).map(|obs| obs.timestamp).unwrap_or(now);
        Ok(PriceResponse {
            price,
            timestamp,
            provenance: Provenance::TwapFallback,
        })
    }

    /// The aggregate only, failing `StalePrice` instead of falling back
    pub fn get_live_price(env: Env, asset: Address) -> Result<AggregatedPrice, DexError> {
        let config = read_config(&env)?;
        let now = env.ledger().timestamp();

        let aggregate = read_aggregate(&env, &asset).ok_or(DexError::NoData)?;
        if !is_fresh(aggregate.timestamp, now, config.stale_threshold) {
            return Err(DexError::StalePrice);
        }
        Ok(aggregate)
    }

    pub fn get_twap(env: Env, asset: Address, period: u64) -> Result<i128, DexError> {
        if period == 0 {
            return Err(DexError::InvalidPeriod);
        }
        let buffer = read_twap_buffer(&env, &asset).ok_or(DexError::NoData)?;
        twap::twap(&buffer, env.ledger().timestamp(), period)
    }

    /// True when the last aggregate is older than `stale_threshold`, or when
    /// there is none
    pub fn is_stale(env: Env, asset: Address) -> bool {
        let (Ok(config), Some(aggregate)) = (read_config(&env), read_aggregate(&env, &asset)) else {
            return true;
        };
        !is_fresh(aggregate.timestamp, env.ledger().timestamp(), config.stale_threshold)
    }

    pub fn get_median_price(env: Env, asset: Address) -> Result<i128, DexError> {
        let config = read_config(&env)?;
        let samples = registered_samples(&env, &asset);
        median_price(
            &env,
            &samples,
            env.ledger().timestamp(),
            config.stale_threshold,
            config.min_sources,
        )
    }

    /// Running sum of price * seconds, extrapolated to now
    pub fn get_cumulative_price(env: Env, asset: Address) -> Result<(i128, u64), DexError> {
        let buffer = read_twap_buffer(&env, &asset).ok_or(DexError::NoData)?;
        twap::cumulative(&buffer, env.ledger().timestamp())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn get_config(env: Env) -> Result<OracleConfig, DexError> {
        read_config(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, DexError> {
        read_admin(&env)
    }

    pub fn get_aggregate(env: Env, asset: Address) -> Option<AggregatedPrice> {
        read_aggregate(&env, &asset)
    }

    pub fn get_sample(env: Env, asset: Address, source_id: u32) -> Option<PriceSample> {
        read_samples(&env, &asset)
            .iter()
            .find(|sample| sample.source_id == source_id)
    }

    pub fn get_source(env: Env, source_id: u32) -> Option<Address> {
        read_source_operator(&env, source_id)
    }

    pub fn is_circuit_open(env: Env) -> bool {
        is_circuit_open(&env)
    }
}

// ========================================================
// HELPER FUNCTIONS
// ========================================================

fn require_admin(env: &Env, caller: &Address) -> Result<(), DexError> {
    caller.require_auth();
    if read_admin(env)? != *caller {
        return Err(DexError::NotAuthorized);
    }
    Ok(())
}

fn validate_config(config: &OracleConfig) -> Result<(), DexError> {
    if config.stale_threshold == 0
        || config.twap_window == 0
        || config.min_confidence > BPS
        || config.max_deviation_bps == 0
        || config.min_sources == 0
        || config.price_decimals > MAX_DECIMALS
    {
        return Err(DexError::InvalidConfig);
    }
    Ok(())
}

/// Samples whose source is still registered
fn registered_samples(env: &Env, asset: &Address) -> Vec<PriceSample> {
    let mut kept = Vec::new(env);
    for sample in read_samples(env, asset).iter() {
        if read_source_operator(env, sample.source_id).is_some() {
            kept.push_back(sample);
        }
    }
    kept
}

/// Validate a sample, fold it into the aggregate and the TWAP
fn ingest(
    env: &Env,
    config: &OracleConfig,
    asset: &Address,
    source_id: u32,
    price: i128,
    decimals: u32,
    confidence: u32,
) -> Result<i128, DexError> {
    if is_circuit_open(env) {
        return Err(DexError::CircuitOpen);
    }
    if price <= 0 || confidence > BPS {
        return Err(DexError::InvalidPrice);
    }
    if confidence == 0 || confidence < config.min_confidence {
        return Err(DexError::LowConfidence);
    }

    let now = env.ledger().timestamp();
    let normalized = normalize_price(price, decimals, config.price_decimals)?;
    if normalized <= 0 {
        return Err(DexError::InvalidPrice);
    }

    if let Some(current) = read_aggregate(env, asset) {
        if is_fresh(current.timestamp, now, config.stale_threshold)
            && exceeds_deviation(current.price, normalized, config.max_deviation_bps)
        {
            return Err(DexError::PriceManipulation);
        }
    }

    let mut samples = Vec::new(env);
    for sample in registered_samples(env, asset).iter() {
        if sample.source_id != source_id {
            samples.push_back(sample);
        }
    }
    samples.push_back(PriceSample {
        source_id,
        price: normalized,
        decimals,
        confidence,
        timestamp: now,
    });

    let aggregate = weighted_mean(&samples, now, config.stale_threshold)?.ok_or(DexError::NoData)?;

    let mut buffer = read_twap_buffer(env, asset).unwrap_or(twap::new_buffer(env));
    twap::record(&mut buffer, now, aggregate.price)?;

    write_samples(env, asset, &samples);
    write_aggregate(env, asset, &aggregate);
    write_twap_buffer(env, asset, &buffer);

    emit_price_submitted(env, asset, source_id, normalized, confidence, aggregate.price);
    Ok(aggregate.price)
}
