#![allow(dead_code)]

use conxian_cp_pool::{ConstantProductPool, ConstantProductPoolClient};
use soroban_sdk::{testutils::Address as _, token, Address, Env};

pub const DEFAULT_FEE_BPS: u32 = 30;
pub const FUNDING: i128 = 1_000_000_000_000;

pub struct CpSetup<'a> {
    pub client: ConstantProductPoolClient<'a>,
    pub admin: Address,
    pub token0: Address,
    pub token1: Address,
}

pub fn setup_pool(env: &Env) -> CpSetup<'_> {
    let admin = Address::generate(env);
    let token_a = create_token(env, &admin);
    let token_b = create_token(env, &admin);

    let pool_id = env.register(ConstantProductPool, ());
    let client = ConstantProductPoolClient::new(env, &pool_id);
    client.initialize(&admin, &token_a, &token_b, &DEFAULT_FEE_BPS);

    let (token0, token1) = client.get_tokens();
    CpSetup { client, admin, token0, token1 }
}

pub fn create_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone()).address()
}

pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, who: &Address) -> i128 {
    token::Client::new(env, token).balance(who)
}

pub fn funded_user(env: &Env, setup: &CpSetup) -> Address {
    let user = Address::generate(env);
    mint_tokens(env, &setup.token0, &user, FUNDING);
    mint_tokens(env, &setup.token1, &user, FUNDING);
    user
}
