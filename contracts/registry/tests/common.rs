#![allow(dead_code)]

use conxian_registry::{ConxianRegistry, ConxianRegistryClient};
use conxian_types::PoolRef;
use soroban_sdk::{testutils::Address as _, Address, Env};

pub const DEFAULT_FEE_TIER: u32 = 3000;

pub fn setup_registry(env: &Env) -> (ConxianRegistryClient<'_>, Address) {
    let admin = Address::generate(env);
    let registry_id = env.register(ConxianRegistry, ());
    let client = ConxianRegistryClient::new(env, &registry_id);
    client.initialize(&admin);
    (client, admin)
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// A stand-in pool address; the registry never calls it
pub fn pool_ref(env: &Env) -> PoolRef {
    PoolRef::concentrated(Address::generate(env))
}
