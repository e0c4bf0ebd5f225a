use soroban_sdk::{Address, Env, Symbol};

/// Topics: ("PoolInit",)
/// Data: (token0, token1, fee_bps)
pub fn emit_pool_init(env: &Env, token0: &Address, token1: &Address, fee_bps: u32) {
    env.events().publish(
        (Symbol::new(env, "PoolInit"),),
        (token0.clone(), token1.clone(), fee_bps),
    );
}

/// Topics: ("AddLiquidity", provider)
/// Data: (amount0, amount1, shares)
pub fn emit_add_liquidity(
    env: &Env,
    provider: &Address,
    amount0: i128,
    amount1: i128,
    shares: u128,
) {
    env.events().publish(
        (Symbol::new(env, "AddLiquidity"), provider.clone()),
        (amount0, amount1, shares),
    );
}

/// Topics: ("RemoveLiquidity", provider)
/// Data: (amount0, amount1, shares)
pub fn emit_remove_liquidity(
    env: &Env,
    provider: &Address,
    amount0: i128,
    amount1: i128,
    shares: u128,
) {
    env.events().publish(
        (Symbol::new(env, "RemoveLiquidity"), provider.clone()),
        (amount0, amount1, shares),
    );
}

/// Topics: ("Swap", sender)
/// Data: (recipient, token_in, amount_in, amount_out)
pub fn emit_swap(
    env: &Env,
    sender: &Address,
    recipient: &Address,
    token_in: &Address,
    amount_in: i128,
    amount_out: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Swap"), sender.clone()),
        (recipient.clone(), token_in.clone(), amount_in, amount_out),
    );
}
