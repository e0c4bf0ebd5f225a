#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env};

use conxian_math::to_token_amount;
use conxian_types::{sort_tokens, DexError};

mod events;
mod math;
mod storage;

use events::*;
use math::{amounts_for_shares, get_amount_out, shares_for_deposit, BPS_DENOMINATOR};
use storage::*;

pub use storage::CpPoolState;

#[contract]
pub struct ConstantProductPool;

#[contractimpl]
impl ConstantProductPool {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(
        env: Env,
        admin: Address,
        token_a: Address,
        token_b: Address,
        fee_bps: u32,
    ) -> Result<(), DexError> {
        admin.require_auth();

        if has_state(&env) {
            return Err(DexError::AlreadyInitialized);
        }
        let (token0, token1) = sort_tokens(token_a, token_b)?;
        if fee_bps as u128 >= BPS_DENOMINATOR {
            return Err(DexError::InvalidFee);
        }

        write_state(
            &env,
            &CpPoolState {
                admin,
                token0: token0.clone(),
                token1: token1.clone(),
                fee_bps,
                reserve0: 0,
                reserve1: 0,
                total_shares: 0,
            },
        );

        emit_pool_init(&env, &token0, &token1, fee_bps);
        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn get_tokens(env: Env) -> Result<(Address, Address), DexError> {
        let state = read_state(&env)?;
        Ok((state.token0, state.token1))
    }

    pub fn get_reserves(env: Env) -> Result<(u128, u128), DexError> {
        let state = read_state(&env)?;
        Ok((state.reserve0, state.reserve1))
    }

    pub fn get_shares(env: Env, owner: Address) -> u128 {
        read_shares(&env, &owner)
    }

    /// Output for selling `amount_in` of `token_in`
    pub fn quote(env: Env, token_in: Address, amount_in: i128) -> Result<i128, DexError> {
        let state = read_state(&env)?;
        let (amount_out, _) = price_swap(&state, &token_in, amount_in)?;
        Ok(to_token_amount(amount_out)?)
    }

    // ========================================================
    // LIQUIDITY
    // ========================================================

    /// Deposit both tokens and receive pool shares
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        amount0: i128,
        amount1: i128,
    ) -> Result<u128, DexError> {
        provider.require_auth();

        if amount0 <= 0 || amount1 <= 0 {
            return Err(DexError::InvalidAmount);
        }
        let mut state = read_state(&env)?;

        let shares = shares_for_deposit(
            amount0 as u128,
            amount1 as u128,
            state.reserve0,
            state.reserve1,
            state.total_shares,
        )?;
        if shares == 0 {
            return Err(DexError::InvalidAmount);
        }

        state.reserve0 = checked_add(state.reserve0, amount0 as u128)?;
        state.reserve1 = checked_add(state.reserve1, amount1 as u128)?;
        state.total_shares = checked_add(state.total_shares, shares)?;
        write_state(&env, &state);

        let held = read_shares(&env, &provider);
        write_shares(&env, &provider, held + shares);

        let pool_addr = env.current_contract_address();
        transfer(&env, &state.token0, &provider, &pool_addr, amount0)?;
        transfer(&env, &state.token1, &provider, &pool_addr, amount1)?;

        emit_add_liquidity(&env, &provider, amount0, amount1, shares);
        Ok(shares)
    }

    /// Burn pool shares for a pro-rata slice of both reserves
    pub fn remove_liquidity(
        env: Env,
        provider: Address,
        shares: u128,
        min_amount0: i128,
        min_amount1: i128,
    ) -> Result<(i128, i128), DexError> {
        provider.require_auth();

        if shares == 0 {
            return Err(DexError::InvalidAmount);
        }
        let held = read_shares(&env, &provider);
        if shares > held {
            return Err(DexError::InsufficientLiquidity);
        }
        let mut state = read_state(&env)?;

        let (amount0, amount1) =
            amounts_for_shares(shares, state.reserve0, state.reserve1, state.total_shares)?;
        if amount0 == 0 && amount1 == 0 {
            return Err(DexError::InvalidAmount);
        }
        let (out0, out1) = (to_token_amount(amount0)?, to_token_amount(amount1)?);
        if out0 < min_amount0 || out1 < min_amount1 {
            return Err(DexError::Slippage);
        }

        // shares <= held <= total_shares and amounts never exceed reserves
        state.reserve0 -= amount0;
        state.reserve1 -= amount1;
        state.total_shares -= shares;
        write_state(&env, &state);
        write_shares(&env, &provider, held - shares);

        let pool_addr = env.current_contract_address();
        transfer(&env, &state.token0, &pool_addr, &provider, out0)?;
        transfer(&env, &state.token1, &pool_addr, &provider, out1)?;

        emit_remove_liquidity(&env, &provider, out0, out1, shares);
        Ok((out0, out1))
    }

    // ========================================================
    // SWAP FUNCTION
    // ========================================================

    /// Exact-input swap of `token_in` for the other pool token
    pub fn swap(
        env: Env,
        sender: Address,
        recipient: Address,
        token_in: Address,
        amount_in: i128,
        min_amount_out: i128,
    ) -> Result<i128, DexError> {
        sender.require_auth();

        let mut state = read_state(&env)?;
        let (amount_out, zero_for_one) = price_swap(&state, &token_in, amount_in)?;
        let amount_out = to_token_amount(amount_out)?;

        if amount_out < min_amount_out {
            return Err(DexError::Slippage);
        }

        // amount_out < reserve_out, so only the input side can overflow
        let token_out = if zero_for_one {
            state.reserve0 = checked_add(state.reserve0, amount_in as u128)?;
            state.reserve1 -= amount_out as u128;
            state.token1.clone()
        } else {
            state.reserve1 = checked_add(state.reserve1, amount_in as u128)?;
            state.reserve0 -= amount_out as u128;
            state.token0.clone()
        };
        write_state(&env, &state);

        let pool_addr = env.current_contract_address();
        transfer(&env, &token_in, &sender, &pool_addr, amount_in)?;
        transfer(&env, &token_out, &pool_addr, &recipient, amount_out)?;

        emit_swap(&env, &sender, &recipient, &token_in, amount_in, amount_out);
        Ok(amount_out)
    }
}

// ========================================================
// HELPER FUNCTIONS
// ========================================================

/// (amount_out, zero_for_one) for a prospective swap
fn price_swap(
    state: &CpPoolState,
    token_in: &Address,
    amount_in: i128,
) -> Result<(u128, bool), DexError> {
    if amount_in <= 0 {
        return Err(DexError::InvalidAmount);
    }
    let zero_for_one = if *token_in == state.token0 {
        true
    } else if *token_in == state.token1 {
        false
    } else {
        return Err(DexError::InvalidToken);
    };

    let (reserve_in, reserve_out) = if zero_for_one {
        (state.reserve0, state.reserve1)
    } else {
        (state.reserve1, state.reserve0)
    };

    let amount_out = get_amount_out(amount_in as u128, reserve_in, reserve_out, state.fee_bps)?;
    if amount_out == 0 {
        return Err(DexError::NoLiquidity);
    }
    Ok((amount_out, zero_for_one))
}

fn checked_add(a: u128, b: u128) -> Result<u128, DexError> {
    a.checked_add(b).ok_or(DexError::MathOverflow)
}

fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), DexError> {
    if amount == 0 {
        return Ok(());
    }
    match token::Client::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(DexError::TransferFailed),
    }
}
