//! Registry events

use conxian_types::PoolKind;
use soroban_sdk::{Address, Env, Symbol};

/// Emitted when the registry is initialized
pub fn emit_initialized(env: &Env, admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "RegistryInit"),),
        (admin.clone(),),
    );
}

/// Emitted when a pool is registered
pub fn emit_pool_registered(
    env: &Env,
    pool_id: u32,
    pool: &Address,
    kind: PoolKind,
    token0: &Address,
    token1: &Address,
    fee_tier: u32,
) {
    env.events().publish(
        (Symbol::new(env, "PoolRegistered"),),
        (pool_id, pool.clone(), kind, token0.clone(), token1.clone(), fee_tier),
    );
}

/// Emitted when the admin changes
pub fn emit_admin_changed(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminChanged"),),
        (old_admin.clone(), new_admin.clone()),
    );
}
