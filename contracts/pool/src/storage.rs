// Pool storage: one enum of keys, typed accessors, TTL bumps on write

use conxian_types::{DexError, PERSISTENT_TTL};
use soroban_sdk::{contracttype, Env};

use crate::types::{PoolConfig, PoolState, Position, TickInfo};

#[contracttype]
pub enum DataKey {
    PoolConfig,
    PoolState,
    Initialized,
    /// Tick data by tick index
    Tick(i32),
    /// Tick bitmap word by word position
    TickWord(i32),
    /// Position by id
    Position(u64),
    NextPositionId,
}

// ============================================================
// INITIALIZATION STORAGE
// ============================================================

#[inline]
pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_persistent_ttl(env, &DataKey::Initialized);
}

// ============================================================
// POOL CONFIG / STATE STORAGE
// ============================================================

pub fn write_pool_config(env: &Env, config: &PoolConfig) {
    env.storage().persistent().set(&DataKey::PoolConfig, config);
    extend_persistent_ttl(env, &DataKey::PoolConfig);
}

pub fn read_pool_config(env: &Env) -> Result<PoolConfig, DexError> {
    env.storage()
        .persistent()
        .get(&DataKey::PoolConfig)
        .ok_or(DexError::NotInitialized)
}

pub fn write_pool_state(env: &Env, state: &PoolState) {
    env.storage().persistent().set(&DataKey::PoolState, state);
    extend_persistent_ttl(env, &DataKey::PoolState);
}

pub fn read_pool_state(env: &Env) -> Result<PoolState, DexError> {
    env.storage()
        .persistent()
        .get(&DataKey::PoolState)
        .ok_or(DexError::NotInitialized)
}

// ============================================================
// TICK STORAGE
// ============================================================

pub fn write_tick_info(env: &Env, tick: i32, info: &TickInfo) {
    let key = DataKey::Tick(tick);
    if info.liquidity_gross == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, info);
    extend_persistent_ttl(env, &key);
}

/// Tick info, default when the tick was never initialized
pub fn read_tick_info(env: &Env, tick: i32) -> TickInfo {
    env.storage()
        .persistent()
        .get(&DataKey::Tick(tick))
        .unwrap_or_default()
}

pub fn read_tick_word(env: &Env, word_pos: i32) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::TickWord(word_pos))
        .unwrap_or(0)
}

pub fn write_tick_word(env: &Env, word_pos: i32, word: u128) {
    let key = DataKey::TickWord(word_pos);
    if word == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &word);
    extend_persistent_ttl(env, &key);
}

// ============================================================
// POSITION STORAGE
// ============================================================

pub fn write_position(env: &Env, id: u64, pos: &Position) {
    let key = DataKey::Position(id);
    env.storage().persistent().set(&key, pos);
    extend_persistent_ttl(env, &key);
}

pub fn read_position(env: &Env, id: u64) -> Result<Position, DexError> {
    env.storage()
        .persistent()
        .get(&DataKey::Position(id))
        .ok_or(DexError::PositionNotFound)
}

/// Hand out the next position id, starting from 1
pub fn next_position_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .persistent()
        .get(&DataKey::NextPositionId)
        .unwrap_or(1);
    env.storage().persistent().set(&DataKey::NextPositionId, &(id + 1));
    extend_persistent_ttl(env, &DataKey::NextPositionId);
    id
}

// ============================================================
// TTL MANAGEMENT
// ============================================================

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}
