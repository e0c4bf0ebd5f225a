#![no_std]

mod events;
mod storage;

use conxian_types::{sort_tokens, DexError, PoolRef};
pub use conxian_types::PoolRecord;
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use events::*;
use storage::*;

#[contract]
pub struct ConxianRegistry;

#[contractimpl]
impl ConxianRegistry {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(env: Env, admin: Address) -> Result<(), DexError> {
        if has_admin(&env) {
            return Err(DexError::AlreadyInitialized);
        }

        admin.require_auth();
        write_admin(&env, &admin);
        write_pool_count(&env, 0);

        emit_initialized(&env, &admin);
        Ok(())
    }

    // ========================================================
    // REGISTRATION
    // ========================================================

    /// Register a deployed pool and return its id
    ///
    /// Ids are zero-based and sequential. A pair may hold one pool per fee
    /// tier.
    pub fn register_pool(
        env: Env,
        caller: Address,
        token0: Address,
        token1: Address,
        fee_tier: u32,
        pool_ref: PoolRef,
    ) -> Result<u32, DexError> {
        caller.require_auth();
        require_admin(&env, &caller)?;

        let (token0, token1) = sort_tokens(token0, token1)?;
        if fee_tier == 0 {
            return Err(DexError::ZeroFeeTier);
        }
        if read_pool_id(&env, &token0, &token1, fee_tier).is_some() {
            return Err(DexError::PoolExists);
        }

        let id = read_pool_count(&env);
        let next = id.checked_add(1).ok_or(DexError::MathOverflow)?;

        let record = PoolRecord {
            id,
            token0,
            token1,
            fee_tier,
            pool: pool_ref,
            registered_at: env.ledger().timestamp(),
        };
        write_pool_record(&env, &record);
        write_pool_count(&env, next);

        emit_pool_registered(
            &env,
            id,
            &record.pool.address,
            record.pool.kind,
            &record.token0,
            &record.token1,
            fee_tier,
        );
        Ok(id)
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn get_pool_data(env: Env, pool_id: u32) -> Option<PoolRecord> {
        read_pool_record(&env, pool_id)
    }

    pub fn get_pool_count(env: Env) -> u32 {
        read_pool_count(&env)
    }

    /// Pool for a pair and fee tier, token order irrelevant
    pub fn get_pool(
        env: Env,
        token_a: Address,
        token_b: Address,
        fee_tier: u32,
    ) -> Option<PoolRecord> {
        let (token0, token1) = sort_tokens(token_a, token_b).ok()?;
        let id = read_pool_id(&env, &token0, &token1, fee_tier)?;
        read_pool_record(&env, id)
    }

    /// Every pool registered for a pair, in registration order
    pub fn get_pools_for_pair(env: Env, token_a: Address, token_b: Address) -> Vec<PoolRecord> {
        let mut records = Vec::new(&env);
        let Ok((token0, token1)) = sort_tokens(token_a, token_b) else {
            return records;
        };
        for id in read_pair_pool_ids(&env, &token0, &token1).iter() {
            if let Some(record) = read_pool_record(&env, id) {
                records.push_back(record);
            }
        }
        records
    }

    pub fn get_admin(env: Env) -> Result<Address, DexError> {
        read_admin(&env)
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), DexError> {
        caller.require_auth();
        require_admin(&env, &caller)?;

        write_admin(&env, &new_admin);
        emit_admin_changed(&env, &caller, &new_admin);
        Ok(())
    }
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), DexError> {
    if read_admin(env)? != *caller {
        return Err(DexError::NotAuthorized);
    }
    Ok(())
}
