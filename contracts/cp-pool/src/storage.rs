use conxian_types::{DexError, PERSISTENT_TTL};
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CpPoolState {
    pub admin: Address,
    pub token0: Address,
    pub token1: Address,
    pub fee_bps: u32,
    pub reserve0: u128,
    pub reserve1: u128,
    pub total_shares: u128,
}

#[contracttype]
pub enum DataKey {
    State,
    Shares(Address),
}

pub fn has_state(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::State)
}

pub fn read_state(env: &Env) -> Result<CpPoolState, DexError> {
    env.storage()
        .persistent()
        .get(&DataKey::State)
        .ok_or(DexError::NotInitialized)
}

pub fn write_state(env: &Env, state: &CpPoolState) {
    env.storage().persistent().set(&DataKey::State, state);
    extend_persistent_ttl(env, &DataKey::State);
}

pub fn read_shares(env: &Env, owner: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Shares(owner.clone()))
        .unwrap_or(0)
}

pub fn write_shares(env: &Env, owner: &Address, shares: u128) {
    let key = DataKey::Shares(owner.clone());
    env.storage().persistent().set(&key, &shares);
    extend_persistent_ttl(env, &key);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}
