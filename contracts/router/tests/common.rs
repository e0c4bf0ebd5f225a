#![allow(dead_code)]

use conxian_cp_pool::{ConstantProductPool, ConstantProductPoolClient};
use conxian_math::SQRT_PRICE_1_1;
use conxian_pool::{ConxianPool, ConxianPoolClient};
use conxian_registry::{ConxianRegistry, ConxianRegistryClient};
use conxian_router::{ConxianRouter, ConxianRouterClient};
use conxian_types::{DexError, PoolRef};
use soroban_sdk::{
    contract, contractimpl, symbol_short, testutils::Address as _, token, vec, Address, Env,
};

// Test constants
pub const CL_FEE: u32 = 10_000; // spacing 50
pub const CP_FEE_BPS: u32 = 30;
pub const CL_LIQUIDITY: u128 = 10_000_000_000;
pub const CP_RESERVE: i128 = 1_000_000_000;
pub const FUNDING: i128 = 1_000_000_000_000;

pub struct RouterSetup<'a> {
    pub router: ConxianRouterClient<'a>,
    pub registry: ConxianRegistryClient<'a>,
    pub admin: Address,
    pub token_a: Address,
    pub token_b: Address,
    pub base: Address,
}

/// Registry plus router over three fresh tokens; `base` is the routing asset
pub fn setup_router(env: &Env) -> RouterSetup<'_> {
    let admin = Address::generate(env);
    let token_a = create_token(env, &admin);
    let token_b = create_token(env, &admin);
    let base = create_token(env, &admin);

    let registry = ConxianRegistryClient::new(env, &env.register(ConxianRegistry, ()));
    registry.initialize(&admin);

    let router = ConxianRouterClient::new(env, &env.register(ConxianRouter, ()));
    router.initialize(&admin, &registry.address, &base, &vec![env, 3000u32, CL_FEE]);

    RouterSetup { router, registry, admin, token_a, token_b, base }
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

pub fn funded_user(env: &Env, tokens: &[&Address]) -> Address {
    let user = Address::generate(env);
    for token in tokens {
        mint_tokens(env, token, &user, FUNDING);
    }
    user
}

// ============================================================
// POOLS
// ============================================================

/// Concentrated pool at price 1.0 with `liquidity` over [-1000, 1000)
pub fn deploy_cl_pool(
    env: &Env,
    admin: &Address,
    t0: &Address,
    t1: &Address,
    fee: u32,
    liquidity: u128,
) -> PoolRef {
    let client = ConxianPoolClient::new(env, &env.register(ConxianPool, ()));
    client.initialize(admin, t0, t1, &SQRT_PRICE_1_1, &0, &fee);

    let lp = funded_user(env, &[t0, t1]);
    client.mint(&lp, &-1000, &1000, &liquidity);
    PoolRef::concentrated(client.address)
}

/// Constant-product pool holding `reserve` of each token
pub fn deploy_cp_pool(
    env: &Env,
    admin: &Address,
    t0: &Address,
    t1: &Address,
    reserve: i128,
) -> PoolRef {
    let client = ConstantProductPoolClient::new(env, &env.register(ConstantProductPool, ()));
    client.initialize(admin, t0, t1, &CP_FEE_BPS);

    let lp = funded_user(env, &[t0, t1]);
    client.add_liquidity(&lp, &reserve, &reserve);
    PoolRef::constant_product(client.address)
}

pub fn cl_client<'a>(env: &'a Env, pool: &PoolRef) -> ConxianPoolClient<'a> {
    ConxianPoolClient::new(env, &pool.address)
}

pub fn cp_client<'a>(env: &'a Env, pool: &PoolRef) -> ConstantProductPoolClient<'a> {
    ConstantProductPoolClient::new(env, &pool.address)
}

/// CL output for selling `amount_in` of `token_in`
pub fn cl_quote(env: &Env, pool: &PoolRef, token_in: &Address, amount_in: i128) -> i128 {
    let client = cl_client(env, pool);
    let (token0, _) = client.get_tokens();
    client.quote(&(*token_in == token0), &amount_in).amount_out
}

// ============================================================
// SCRIPTED POOL
// ============================================================

/// Quotes 1:1 but refuses every swap with `Slippage`
#[contract]
pub struct SlippingPool;

#[contractimpl]
impl SlippingPool {
    pub fn init(env: Env, token0: Address, token1: Address) {
        env.storage().instance().set(&symbol_short!("tokens"), &(token0, token1));
    }

    pub fn get_tokens(env: Env) -> Result<(Address, Address), DexError> {
        env.storage()
            .instance()
            .get(&symbol_short!("tokens"))
            .ok_or(DexError::NotInitialized)
    }

    pub fn quote(_env: Env, _token_in: Address, amount_in: i128) -> Result<i128, DexError> {
        Ok(amount_in)
    }

    pub fn swap(
        _env: Env,
        _sender: Address,
        _recipient: Address,
        _token_in: Address,
        _amount_in: i128,
        _min_amount_out: i128,
    ) -> Result<i128, DexError> {
        Err(DexError::Slippage)
    }
}

pub fn deploy_slipping_pool(env: &Env, t0: &Address, t1: &Address) -> PoolRef {
    let address = env.register(SlippingPool, ());
    SlippingPoolClient::new(env, &address).init(t0, t1);
    PoolRef::constant_product(address)
}
