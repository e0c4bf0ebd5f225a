// Oracle storage: one enum of keys, typed accessors, TTL bumps on write

use conxian_types::{DexError, PERSISTENT_TTL};
use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{AggregatedPrice, OracleConfig, PriceSample, TwapBuffer};

#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    CircuitOpen,
    /// Operator by source id
    Source(u32),
    /// Source id by operator
    OperatorSource(Address),
    /// One sample per source, by asset
    Samples(Address),
    /// Latest composite, by asset
    Aggregate(Address),
    /// TWAP observations, by asset
    Twap(Address),
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

fn write<V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    extend_persistent_ttl(env, key);
}

// ============================================================
// ADMIN / CONFIG
// ============================================================

pub fn has_admin(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Admin)
}

pub fn read_admin(env: &Env) -> Result<Address, DexError> {
    env.storage()
        .persistent()
        .get(&DataKey::Admin)
        .ok_or(DexError::NotInitialized)
}

pub fn write_admin(env: &Env, admin: &Address) {
    write(env, &DataKey::Admin, admin);
}

pub fn read_config(env: &Env) -> Result<OracleConfig, DexError> {
    env.storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or(DexError::NotInitialized)
}

pub fn write_config(env: &Env, config: &OracleConfig) {
    write(env, &DataKey::Config, config);
}

pub fn is_circuit_open(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::CircuitOpen)
        .unwrap_or(false)
}

pub fn write_circuit_open(env: &Env, open: bool) {
    write(env, &DataKey::CircuitOpen, &open);
}

// ============================================================
// SOURCES
// ============================================================

pub fn read_source_operator(env: &Env, source_id: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Source(source_id))
}

pub fn read_operator_source(env: &Env, operator: &Address) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::OperatorSource(operator.clone()))
}

pub fn write_source(env: &Env, source_id: u32, operator: &Address) {
    write(env, &DataKey::Source(source_id), operator);
    write(env, &DataKey::OperatorSource(operator.clone()), &source_id);
}

pub fn remove_source(env: &Env, source_id: u32, operator: &Address) {
    env.storage().persistent().remove(&DataKey::Source(source_id));
    env.storage()
        .persistent()
        .remove(&DataKey::OperatorSource(operator.clone()));
}

// ============================================================
// PRICES
// ============================================================

pub fn read_samples(env: &Env, asset: &Address) -> Vec<PriceSample> {
    env.storage()
        .persistent()
        .get(&DataKey::Samples(asset.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn write_samples(env: &Env, asset: &Address, samples: &Vec<PriceSample>) {
    write(env, &DataKey::Samples(asset.clone()), samples);
}

pub fn read_aggregate(env: &Env, asset: &Address) -> Option<AggregatedPrice> {
    env.storage()
        .persistent()
        .get(&DataKey::Aggregate(asset.clone()))
}

pub fn write_aggregate(env: &Env, asset: &Address, aggregate: &AggregatedPrice) {
    write(env, &DataKey::Aggregate(asset.clone()), aggregate);
}

pub fn read_twap_buffer(env: &Env, asset: &Address) -> Option<TwapBuffer> {
    env.storage().persistent().get(&DataKey::Twap(asset.clone()))
}

pub fn write_twap_buffer(env: &Env, asset: &Address, buffer: &TwapBuffer) {
    write(env, &DataKey::Twap(asset.clone()), buffer);
}
