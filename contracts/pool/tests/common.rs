#![allow(dead_code)]

use conxian_math::SQRT_PRICE_1_1;
use conxian_pool::{ConxianPool, ConxianPoolClient};
use soroban_sdk::{testutils::Address as _, token, Address, Env};

// Test constants
pub const DEFAULT_FEE: u32 = 3000; // 0.30%, spacing 10
pub const DEFAULT_SQRT_PRICE: u128 = SQRT_PRICE_1_1;
pub const DEFAULT_TICK: i32 = 0;
pub const FUNDING: i128 = 1_000_000_000_000;

pub struct PoolSetup<'a> {
    pub client: ConxianPoolClient<'a>,
    pub admin: Address,
    pub token0: Address,
    pub token1: Address,
}

/// Setup an initialized pool at price 1.0 with the default fee
pub fn setup_pool(env: &Env) -> PoolSetup<'_> {
    setup_custom_pool(env, DEFAULT_FEE, DEFAULT_SQRT_PRICE, DEFAULT_TICK)
}

pub fn setup_custom_pool(env: &Env, fee: u32, sqrt_price: u128, tick: i32) -> PoolSetup<'_> {
    let admin = Address::generate(env);
    let token_a = create_token(env, &admin);
    let token_b = create_token(env, &admin);

    let pool_id = env.register(ConxianPool, ());
    let client = ConxianPoolClient::new(env, &pool_id);
    client.initialize(&admin, &token_a, &token_b, &sqrt_price, &tick, &fee);

    let (token0, token1) = client.get_tokens();
    PoolSetup { client, admin, token0, token1 }
}

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    use soroban_sdk::token::StellarAssetClient;
    let client = StellarAssetClient::new(env, token);
    client.mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, who: &Address) -> i128 {
    token::Client::new(env, token).balance(who)
}

/// A user holding both pool tokens
pub fn funded_user(env: &Env, setup: &PoolSetup) -> Address {
    let user = Address::generate(env);
    mint_tokens(env, &setup.token0, &user, FUNDING);
    mint_tokens(env, &setup.token1, &user, FUNDING);
    user
}
