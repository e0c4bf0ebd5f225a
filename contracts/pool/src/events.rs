// Pool events

use soroban_sdk::{Address, Env, Symbol};

/// Topics: ("PoolInit",)
/// Data: (token0, token1, fee, tick_spacing, sqrt_price_x96, tick)
pub fn emit_pool_init(
    env: &Env,
    token0: &Address,
    token1: &Address,
    fee: u32,
    tick_spacing: i32,
    sqrt_price_x96: u128,
    tick: i32,
) {
    env.events().publish(
        (Symbol::new(env, "PoolInit"),),
        (token0.clone(), token1.clone(), fee, tick_spacing, sqrt_price_x96, tick),
    );
}

/// Topics: ("Mint", owner)
/// Data: (position_id, lower, upper, liquidity, amount0, amount1)
pub fn emit_mint(
    env: &Env,
    owner: &Address,
    position_id: u64,
    lower: i32,
    upper: i32,
    liquidity: u128,
    amount0: i128,
    amount1: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Mint"), owner.clone()),
        (position_id, lower, upper, liquidity, amount0, amount1),
    );
}

/// Topics: ("Burn", owner)
/// Data: (position_id, liquidity, amount0, amount1)
pub fn emit_burn(
    env: &Env,
    owner: &Address,
    position_id: u64,
    liquidity: u128,
    amount0: u128,
    amount1: u128,
) {
    env.events().publish(
        (Symbol::new(env, "Burn"), owner.clone()),
        (position_id, liquidity, amount0, amount1),
    );
}

/// Topics: ("Collect", owner)
/// Data: (position_id, amount0, amount1)
pub fn emit_collect(env: &Env, owner: &Address, position_id: u64, amount0: u128, amount1: u128) {
    env.events().publish(
        (Symbol::new(env, "Collect"), owner.clone()),
        (position_id, amount0, amount1),
    );
}

/// Topics: ("Swap", sender)
/// Data: (recipient, zero_for_one, amount_in, amount_out, sqrt_price_x96, liquidity, tick)
pub fn emit_swap(
    env: &Env,
    sender: &Address,
    recipient: &Address,
    zero_for_one: bool,
    amount_in: i128,
    amount_out: i128,
    sqrt_price_x96: u128,
    liquidity: u128,
    tick: i32,
) {
    env.events().publish(
        (Symbol::new(env, "Swap"), sender.clone()),
        (recipient.clone(), zero_for_one, amount_in, amount_out, sqrt_price_x96, liquidity, tick),
    );
}

pub fn emit_fee_updated(env: &Env, old_fee: u32, new_fee: u32) {
    env.events()
        .publish((Symbol::new(env, "FeeUpdated"),), (old_fee, new_fee));
}

pub fn emit_paused(env: &Env, paused: bool) {
    env.events().publish((Symbol::new(env, "Paused"),), paused);
}

pub fn emit_admin_changed(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminChanged"),),
        (old_admin.clone(), new_admin.clone()),
    );
}
