// Registry storage module

use conxian_types::{DexError, PoolRecord, PERSISTENT_TTL};
use soroban_sdk::{contracttype, Address, Env, Vec};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum RegistryDataKey {
    Admin,
    PoolCount,
    /// Record by pool id
    Pool(u32),
    /// Pool id by sorted (token0, token1, fee_tier)
    PoolId(Address, Address, u32),
    /// Every pool id registered for a sorted pair
    PairPools(Address, Address),
}

fn extend_ttl(env: &Env, key: &RegistryDataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

// ============================================================
// ADMIN
// ============================================================

pub fn has_admin(env: &Env) -> bool {
    env.storage().persistent().has(&RegistryDataKey::Admin)
}

pub fn read_admin(env: &Env) -> Result<Address, DexError> {
    env.storage()
        .persistent()
        .get(&RegistryDataKey::Admin)
        .ok_or(DexError::NotInitialized)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().persistent().set(&RegistryDataKey::Admin, admin);
    extend_ttl(env, &RegistryDataKey::Admin);
}

// ============================================================
// POOL RECORDS
// ============================================================

pub fn read_pool_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&RegistryDataKey::PoolCount)
        .unwrap_or(0)
}

pub fn write_pool_count(env: &Env, count: u32) {
    env.storage().persistent().set(&RegistryDataKey::PoolCount, &count);
    extend_ttl(env, &RegistryDataKey::PoolCount);
}

pub fn read_pool_record(env: &Env, id: u32) -> Option<PoolRecord> {
    env.storage().persistent().get(&RegistryDataKey::Pool(id))
}

/// Store a record together with its pair and triple indexes
pub fn write_pool_record(env: &Env, record: &PoolRecord) {
    let key = RegistryDataKey::Pool(record.id);
    env.storage().persistent().set(&key, record);
    extend_ttl(env, &key);

    let id_key = RegistryDataKey::PoolId(
        record.token0.clone(),
        record.token1.clone(),
        record.fee_tier,
    );
    env.storage().persistent().set(&id_key, &record.id);
    extend_ttl(env, &id_key);

    let mut ids = read_pair_pool_ids(env, &record.token0, &record.token1);
    ids.push_back(record.id);
    let pair_key = RegistryDataKey::PairPools(record.token0.clone(), record.token1.clone());
    env.storage().persistent().set(&pair_key, &ids);
    extend_ttl(env, &pair_key);
}

pub fn read_pool_id(env: &Env, token0: &Address, token1: &Address, fee_tier: u32) -> Option<u32> {
    env.storage().persistent().get(&RegistryDataKey::PoolId(
        token0.clone(),
        token1.clone(),
        fee_tier,
    ))
}

pub fn read_pair_pool_ids(env: &Env, token0: &Address, token1: &Address) -> Vec<u32> {
    env.storage()
        .persistent()
        .get(&RegistryDataKey::PairPools(token0.clone(), token1.clone()))
        .unwrap_or(Vec::new(env))
}
