//! Router events

use conxian_types::PoolRef;
use soroban_sdk::{Address, Env, Symbol};

/// Emitted when router is initialized
pub fn emit_initialized(env: &Env, admin: &Address, registry: &Address, base_asset: &Address) {
    env.events().publish(
        (Symbol::new(env, "RouterInit"),),
        (admin.clone(), registry.clone(), base_asset.clone()),
    );
}

/// Emitted on every executed path
pub fn emit_swap(
    env: &Env,
    sender: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
    amount_out: i128,
    num_hops: u32,
) {
    env.events().publish(
        (Symbol::new(env, "RouterSwap"), sender.clone()),
        (token_in.clone(), token_out.clone(), amount_in, amount_out, num_hops),
    );
}

pub fn emit_token_added(env: &Env, token: &Address) {
    env.events().publish((Symbol::new(env, "TokenAdded"),), (token.clone(),));
}

pub fn emit_edge_added(
    env: &Env,
    token_a: &Address,
    token_b: &Address,
    pool: &PoolRef,
    liquidity: u128,
    fee_bps: u32,
) {
    env.events().publish(
        (Symbol::new(env, "EdgeAdded"),),
        (token_a.clone(), token_b.clone(), pool.address.clone(), liquidity, fee_bps),
    );
}
