//! Oracle type definitions

use soroban_sdk::{contracttype, Address, Vec};

/// Aggregation settings, changed only by the admin
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleConfig {
    /// Seconds after which the live aggregate is no longer served
    pub stale_threshold: u64,
    /// Seconds averaged by the TWAP fallback
    pub twap_window: u64,
    /// Minimum sample confidence, basis points
    pub min_confidence: u32,
    /// Largest accepted move away from a fresh aggregate, basis points
    pub max_deviation_bps: u32,
    /// Fresh sources required for a median
    pub min_sources: u32,
    /// Decimals every stored price is normalized to
    pub price_decimals: u32,
}

/// Latest submission of one source for one asset
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceSample {
    pub source_id: u32,
    /// Normalized to `price_decimals`
    pub price: i128,
    /// Decimals the source reported in
    pub decimals: u32,
    pub confidence: u32,
    pub timestamp: u64,
}

/// Confidence-weighted composite of the fresh samples
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AggregatedPrice {
    pub price: i128,
    /// Mean confidence of the contributing samples
    pub confidence: u32,
    pub sources: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Provenance {
    Live,
    TwapFallback,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceResponse {
    pub price: i128,
    /// When the underlying data was last refreshed
    pub timestamp: u64,
    pub provenance: Provenance,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TwapObservation {
    pub timestamp: u64,
    pub price: i128,
    /// Sum of price * seconds up to `timestamp`
    pub price_cumulative: i128,
}

/// Ring buffer of observations for one asset
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TwapBuffer {
    pub observations: Vec<TwapObservation>,
    /// Slot of the most recent observation
    pub newest: u32,
}
