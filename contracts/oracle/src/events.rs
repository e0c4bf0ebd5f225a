// Oracle events

use soroban_sdk::{Address, Env, Symbol};

/// Topics: ("OracleInit",)
/// Data: (admin,)
pub fn emit_initialized(env: &Env, admin: &Address) {
    env.events().publish((Symbol::new(env, "OracleInit"),), (admin.clone(),));
}

pub fn emit_config_updated(env: &Env, stale_threshold: u64, twap_window: u64) {
    env.events().publish(
        (Symbol::new(env, "ConfigUpdated"),),
        (stale_threshold, twap_window),
    );
}

pub fn emit_source_registered(env: &Env, source_id: u32, operator: &Address) {
    env.events().publish(
        (Symbol::new(env, "SourceRegistered"), source_id),
        (operator.clone(),),
    );
}

pub fn emit_source_removed(env: &Env, source_id: u32) {
    env.events().publish((Symbol::new(env, "SourceRemoved"), source_id), ());
}

/// Topics: ("PriceSubmitted", asset)
/// Data: (source_id, price, confidence, aggregate_price)
pub fn emit_price_submitted(
    env: &Env,
    asset: &Address,
    source_id: u32,
    price: i128,
    confidence: u32,
    aggregate_price: i128,
) {
    env.events().publish(
        (Symbol::new(env, "PriceSubmitted"), asset.clone()),
        (source_id, price, confidence, aggregate_price),
    );
}

/// Topics: ("TwapUpdated", asset)
/// Data: (price, period, twap)
pub fn emit_twap_updated(env: &Env, asset: &Address, price: i128, period: u64, twap: i128) {
    env.events().publish(
        (Symbol::new(env, "TwapUpdated"), asset.clone()),
        (price, period, twap),
    );
}

pub fn emit_circuit_breaker(env: &Env, open: bool) {
    env.events().publish((Symbol::new(env, "CircuitBreaker"),), (open,));
}

pub fn emit_admin_changed(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminChanged"),),
        (old_admin.clone(), new_admin.clone()),
    );
}
