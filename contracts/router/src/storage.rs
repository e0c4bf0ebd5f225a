//! Router storage operations

use conxian_types::{DexError, PERSISTENT_TTL};
use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{RouteEdge, RouterConfig};

#[contracttype]
pub enum DataKey {
    Initialized,
    Config,
    /// Graph tokens in insertion order
    Tokens,
    /// Directed graph edges in insertion order
    Edges,
}

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_ttl(env, &DataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &RouterConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Result<RouterConfig, DexError> {
    env.storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or(DexError::NotInitialized)
}

// ============================================================
// GRAPH
// ============================================================

pub fn read_tokens(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Tokens)
        .unwrap_or(Vec::new(env))
}

pub fn write_tokens(env: &Env, tokens: &Vec<Address>) {
    env.storage().persistent().set(&DataKey::Tokens, tokens);
    extend_ttl(env, &DataKey::Tokens);
}

pub fn read_edges(env: &Env) -> Vec<RouteEdge> {
    env.storage()
        .persistent()
        .get(&DataKey::Edges)
        .unwrap_or(Vec::new(env))
}

pub fn write_edges(env: &Env, edges: &Vec<RouteEdge>) {
    env.storage().persistent().set(&DataKey::Edges, edges);
    extend_ttl(env, &DataKey::Edges);
}
