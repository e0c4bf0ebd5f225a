#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env};

use conxian_math::{
    add_delta, get_amounts_for_liquidity, is_aligned, is_valid_tick, sqrt_price_to_tick,
    tick_spacing_for_fee, tick_to_sqrt_price, to_token_amount, MAX_FEE,
};
use conxian_position::{
    credit_tokens_owed, modify_position, position_info, take_tokens_owed, update_position,
};
use conxian_swap::{apply_crossings, simulate_swap, SwapOutcome, SwapState};
use conxian_tick::{clear_tick, flip_tick, get_fee_growth_inside, update_tick};
use conxian_types::{sort_tokens, DexError, SwapQuote, SwapResult};

mod events;
mod storage;
pub mod types;

use events::*;
use storage::*;
use types::{PoolConfig, PoolState, Position, PositionInfo, TickInfo};

#[contract]
pub struct ConxianPool;

#[contractimpl]
impl ConxianPool {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the pool once
    ///
    /// `fee` is in hundredths of a basis point; the tick spacing follows
    /// from it. `initial_tick` must be the tick of `initial_sqrt_price`.
    pub fn initialize(
        env: Env,
        admin: Address,
        token_a: Address,
        token_b: Address,
        initial_sqrt_price: u128,
        initial_tick: i32,
        fee: u32,
    ) -> Result<(), DexError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(DexError::AlreadyInitialized);
        }

        let (token0, token1) = sort_tokens(token_a, token_b)?;

        if fee == 0 || fee > MAX_FEE {
            return Err(DexError::InvalidFee);
        }

        if sqrt_price_to_tick(initial_sqrt_price)? != initial_tick {
            return Err(DexError::InvalidTick);
        }

        let tick_spacing = tick_spacing_for_fee(fee);

        write_pool_config(
            &env,
            &PoolConfig {
                admin,
                fee,
                tick_spacing,
                paused: false,
            },
        );
        write_pool_state(
            &env,
            &PoolState {
                sqrt_price_x96: initial_sqrt_price,
                current_tick: initial_tick,
                liquidity: 0,
                token0: token0.clone(),
                token1: token1.clone(),
                fee_growth_global_0: 0,
                fee_growth_global_1: 0,
            },
        );
        set_initialized(&env);

        emit_pool_init(&env, &token0, &token1, fee, tick_spacing, initial_sqrt_price, initial_tick);
        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    /// Current price, tick, active liquidity and fee growth
    pub fn get_pool_state(env: Env) -> Result<PoolState, DexError> {
        read_pool_state(&env)
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, DexError> {
        read_pool_config(&env)
    }

    /// Sorted (token0, token1)
    pub fn get_tokens(env: Env) -> Result<(Address, Address), DexError> {
        let state = read_pool_state(&env)?;
        Ok((state.token0, state.token1))
    }

    pub fn get_tick(env: Env, tick: i32) -> TickInfo {
        read_tick_info(&env, tick)
    }

    /// Position with fees owed, including those accrued since its last
    /// checkpoint
    pub fn get_position(env: Env, position_id: u64) -> Result<PositionInfo, DexError> {
        let pos = read_position(&env, position_id)?;
        let state = read_pool_state(&env)?;
        let (inside_0, inside_1) = fee_growth_inside(&env, &state, pos.tick_lower, pos.tick_upper);
        Ok(position_info(&pos, inside_0, inside_1)?)
    }

    /// Simulate a swap without writing anything
    pub fn quote(env: Env, zero_for_one: bool, amount_in: i128) -> Result<SwapQuote, DexError> {
        let config = read_pool_config(&env)?;
        let state = read_pool_state(&env)?;

        let (swap_state, outcome) = Self::run_swap(&env, &config, &state, zero_for_one, amount_in)?;

        Ok(SwapQuote {
            amount_in: to_token_amount(outcome.amount_in)?,
            amount_out: to_token_amount(outcome.amount_out)?,
            fee_paid: to_token_amount(outcome.fee_paid)?,
            sqrt_price_after: swap_state.sqrt_price_x96,
            tick_after: swap_state.tick,
            ticks_crossed: outcome.ticks_crossed(),
        })
    }

    // ========================================================
    // SWAP FUNCTION
    // ========================================================

    /// Exact-input swap
    ///
    /// Pulls the consumed input (fee included) from `sender` and pays the
    /// output to `recipient`. Fails with `Slippage` and no state change when
    /// the output is below `min_amount_out`.
    pub fn swap(
        env: Env,
        sender: Address,
        recipient: Address,
        zero_for_one: bool,
        amount_in: i128,
        min_amount_out: i128,
    ) -> Result<SwapResult, DexError> {
        sender.require_auth();

        let config = read_pool_config(&env)?;
        let mut state = read_pool_state(&env)?;

        let (swap_state, outcome) = Self::run_swap(&env, &config, &state, zero_for_one, amount_in)?;

        let amount_in_used = to_token_amount(outcome.amount_in)?;
        let amount_out = to_token_amount(outcome.amount_out)?;

        if amount_out < min_amount_out {
            return Err(DexError::Slippage);
        }

        // Commit: tick crossings first, then pool state
        apply_crossings(
            &env,
            |e, t| read_tick_info(e, t),
            |e, t, info| write_tick_info(e, t, info),
            &outcome.crossings,
        );

        state.sqrt_price_x96 = swap_state.sqrt_price_x96;
        state.current_tick = swap_state.tick;
        state.liquidity = swap_state.liquidity;
        state.fee_growth_global_0 = swap_state.fee_growth_global_0;
        state.fee_growth_global_1 = swap_state.fee_growth_global_1;
        write_pool_state(&env, &state);

        let (token_in, token_out) = if zero_for_one {
            (&state.token0, &state.token1)
        } else {
            (&state.token1, &state.token0)
        };

        let pool_addr = env.current_contract_address();
        transfer(&env, token_in, &sender, &pool_addr, amount_in_used)?;
        transfer(&env, token_out, &pool_addr, &recipient, amount_out)?;

        emit_swap(
            &env,
            &sender,
            &recipient,
            zero_for_one,
            amount_in_used,
            amount_out,
            state.sqrt_price_x96,
            state.liquidity,
            state.current_tick,
        );

        Ok(SwapResult {
            amount_in: amount_in_used,
            amount_out,
            fee_paid: to_token_amount(outcome.fee_paid)?,
            sqrt_price_x96: state.sqrt_price_x96,
            tick: state.current_tick,
        })
    }

    // ========================================================
    // LIQUIDITY FUNCTIONS
    // ========================================================

    /// Open a position over [lower_tick, upper_tick) and pull the tokens it
    /// needs from `owner`
    ///
    /// Returns the new position id; ids start at 1.
    pub fn mint(
        env: Env,
        owner: Address,
        lower_tick: i32,
        upper_tick: i32,
        liquidity: u128,
    ) -> Result<u64, DexError> {
        owner.require_auth();

        let config = read_pool_config(&env)?;
        if config.paused {
            return Err(DexError::Paused);
        }
        validate_range(lower_tick, upper_tick, config.tick_spacing)?;
        let delta = positive_delta(liquidity)?;

        let mut state = read_pool_state(&env)?;
        let position_id = next_position_id(&env);
        let mut pos = Position::new(owner.clone(), lower_tick, upper_tick);

        let (amount0, amount1) = modify_liquidity(&env, &config, &mut state, &mut pos, delta)?;
        let amount0 = to_token_amount(amount0)?;
        let amount1 = to_token_amount(amount1)?;

        write_pool_state(&env, &state);
        write_position(&env, position_id, &pos);

        let pool_addr = env.current_contract_address();
        transfer(&env, &state.token0, &owner, &pool_addr, amount0)?;
        transfer(&env, &state.token1, &owner, &pool_addr, amount1)?;

        emit_mint(&env, &owner, position_id, lower_tick, upper_tick, liquidity, amount0, amount1);
        Ok(position_id)
    }

    /// Add liquidity to an existing position
    pub fn increase_liquidity(
        env: Env,
        caller: Address,
        position_id: u64,
        liquidity: u128,
    ) -> Result<(i128, i128), DexError> {
        caller.require_auth();

        let config = read_pool_config(&env)?;
        if config.paused {
            return Err(DexError::Paused);
        }
        let mut pos = read_owned_position(&env, &caller, position_id)?;
        let delta = positive_delta(liquidity)?;

        let mut state = read_pool_state(&env)?;
        let (amount0, amount1) = modify_liquidity(&env, &config, &mut state, &mut pos, delta)?;
        let amount0 = to_token_amount(amount0)?;
        let amount1 = to_token_amount(amount1)?;

        write_pool_state(&env, &state);
        write_position(&env, position_id, &pos);

        let pool_addr = env.current_contract_address();
        transfer(&env, &state.token0, &caller, &pool_addr, amount0)?;
        transfer(&env, &state.token1, &caller, &pool_addr, amount1)?;

        emit_mint(
            &env,
            &caller,
            position_id,
            pos.tick_lower,
            pos.tick_upper,
            liquidity,
            amount0,
            amount1,
        );
        Ok((amount0, amount1))
    }

    /// Remove liquidity from a position
    ///
    /// The released principal (rounded down) and pending fees are credited
    /// to the position's tokens owed; `collect` pays them out.
    pub fn burn(
        env: Env,
        caller: Address,
        position_id: u64,
        liquidity: u128,
    ) -> Result<(u128, u128), DexError> {
        caller.require_auth();

        let mut pos = read_owned_position(&env, &caller, position_id)?;
        if liquidity == 0 {
            return Err(DexError::InvalidAmount);
        }
        if liquidity > pos.liquidity {
            return Err(DexError::InsufficientLiquidity);
        }
        let delta = -positive_delta(liquidity)?;

        let config = read_pool_config(&env)?;
        let mut state = read_pool_state(&env)?;
        let (amount0, amount1) = modify_liquidity(&env, &config, &mut state, &mut pos, delta)?;
        credit_tokens_owed(&mut pos, amount0, amount1)?;

        write_pool_state(&env, &state);
        write_position(&env, position_id, &pos);

        emit_burn(&env, &caller, position_id, liquidity, amount0, amount1);
        Ok((amount0, amount1))
    }

    // ========================================================
    // FEE COLLECTION
    // ========================================================

    /// Pay out everything the position is owed: burned principal and fees
    pub fn collect(env: Env, caller: Address, position_id: u64) -> Result<(u128, u128), DexError> {
        caller.require_auth();

        let mut pos = read_owned_position(&env, &caller, position_id)?;
        let state = read_pool_state(&env)?;

        let (inside_0, inside_1) = fee_growth_inside(&env, &state, pos.tick_lower, pos.tick_upper);
        update_position(&mut pos, inside_0, inside_1)?;
        let (amount0, amount1) = take_tokens_owed(&mut pos);
        write_position(&env, position_id, &pos);

        let pool_addr = env.current_contract_address();
        transfer(&env, &state.token0, &pool_addr, &caller, to_token_amount(amount0)?)?;
        transfer(&env, &state.token1, &pool_addr, &caller, to_token_amount(amount1)?)?;

        emit_collect(&env, &caller, position_id, amount0, amount1);
        Ok((amount0, amount1))
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Change the swap fee; the tick spacing stays fixed
    pub fn set_fee(env: Env, admin: Address, fee: u32) -> Result<(), DexError> {
        let mut config = require_admin(&env, &admin)?;
        if fee == 0 || fee > MAX_FEE {
            return Err(DexError::InvalidFee);
        }
        let old_fee = config.fee;
        config.fee = fee;
        write_pool_config(&env, &config);
        emit_fee_updated(&env, old_fee, fee);
        Ok(())
    }

    /// Pausing stops swaps and new liquidity; burns and collects still work
    pub fn set_paused(env: Env, admin: Address, paused: bool) -> Result<(), DexError> {
        let mut config = require_admin(&env, &admin)?;
        config.paused = paused;
        write_pool_config(&env, &config);
        emit_paused(&env, paused);
        Ok(())
    }

    pub fn set_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), DexError> {
        let mut config = require_admin(&env, &admin)?;
        config.admin = new_admin.clone();
        write_pool_config(&env, &config);
        emit_admin_changed(&env, &admin, &new_admin);
        Ok(())
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn run_swap(
        env: &Env,
        config: &PoolConfig,
        state: &PoolState,
        zero_for_one: bool,
        amount_in: i128,
    ) -> Result<(SwapState, SwapOutcome), DexError> {
        if config.paused {
            return Err(DexError::Paused);
        }
        if amount_in <= 0 {
            return Err(DexError::InvalidAmount);
        }

        let mut swap_state = SwapState {
            sqrt_price_x96: state.sqrt_price_x96,
            tick: state.current_tick,
            liquidity: state.liquidity,
            tick_spacing: config.tick_spacing,
            fee_growth_global_0: state.fee_growth_global_0,
            fee_growth_global_1: state.fee_growth_global_1,
        };

        let outcome = simulate_swap(
            env,
            &mut swap_state,
            |e, t| read_tick_info(e, t),
            |e, w| read_tick_word(e, w),
            amount_in as u128,
            zero_for_one,
            config.fee,
        )?;

        if outcome.amount_out == 0 {
            return Err(DexError::NoLiquidity);
        }

        Ok((swap_state, outcome))
    }
}

// ========================================================
// HELPER FUNCTIONS
// ========================================================

fn require_admin(env: &Env, caller: &Address) -> Result<PoolConfig, DexError> {
    caller.require_auth();
    let config = read_pool_config(env)?;
    if *caller != config.admin {
        return Err(DexError::NotAuthorized);
    }
    Ok(config)
}

fn read_owned_position(
    env: &Env,
    caller: &Address,
    position_id: u64,
) -> Result<Position, DexError> {
    let pos = read_position(env, position_id)?;
    if pos.owner != *caller {
        return Err(DexError::NotAuthorized);
    }
    Ok(pos)
}

fn validate_range(lower: i32, upper: i32, tick_spacing: i32) -> Result<(), DexError> {
    if !is_valid_tick(lower) || !is_valid_tick(upper) {
        return Err(DexError::TickOutOfRange);
    }
    if lower >= upper {
        return Err(DexError::InvalidTickRange);
    }
    if !is_aligned(lower, tick_spacing) || !is_aligned(upper, tick_spacing) {
        return Err(DexError::TickNotAligned);
    }
    Ok(())
}

fn positive_delta(liquidity: u128) -> Result<i128, DexError> {
    if liquidity == 0 {
        return Err(DexError::InvalidAmount);
    }
    i128::try_from(liquidity).map_err(|_| DexError::InvalidAmount)
}

/// Apply a liquidity change to both boundary ticks, the bitmap, the
/// position and the active liquidity
///
/// The position is settled against the ticks' fee growth before any tick
/// emptied by a removal is cleared. Returns the token amounts the change
/// represents: rounded up when adding, rounded down when removing.
fn modify_liquidity(
    env: &Env,
    config: &PoolConfig,
    state: &mut PoolState,
    pos: &mut Position,
    delta: i128,
) -> Result<(u128, u128), DexError> {
    let mut flipped = [false; 2];
    for (slot, (tick, upper)) in [(pos.tick_lower, false), (pos.tick_upper, true)]
        .into_iter()
        .enumerate()
    {
        flipped[slot] = update_tick(
            env,
            |e, t| read_tick_info(e, t),
            |e, t, info| write_tick_info(e, t, info),
            tick,
            state.current_tick,
            delta,
            state.fee_growth_global_0,
            state.fee_growth_global_1,
            upper,
        )?;
    }

    let (inside_0, inside_1) = fee_growth_inside(env, state, pos.tick_lower, pos.tick_upper);
    modify_position(pos, delta, inside_0, inside_1)?;

    for (slot, tick) in [pos.tick_lower, pos.tick_upper].into_iter().enumerate() {
        if !flipped[slot] {
            continue;
        }
        if delta < 0 {
            clear_tick(env, |e, t, info| write_tick_info(e, t, info), tick);
        }
        flip_tick(
            env,
            |e, w| read_tick_word(e, w),
            |e, w, word| write_tick_word(e, w, word),
            tick,
            config.tick_spacing,
        );
    }

    if pos.tick_lower <= state.current_tick && state.current_tick < pos.tick_upper {
        state.liquidity = add_delta(state.liquidity, delta)?;
    }

    let amounts = get_amounts_for_liquidity(
        state.sqrt_price_x96,
        tick_to_sqrt_price(pos.tick_lower)?,
        tick_to_sqrt_price(pos.tick_upper)?,
        delta.unsigned_abs(),
        delta > 0,
    )?;
    Ok(amounts)
}

fn fee_growth_inside(env: &Env, state: &PoolState, lower: i32, upper: i32) -> (u128, u128) {
    get_fee_growth_inside(
        env,
        |e, t| read_tick_info(e, t),
        lower,
        upper,
        state.current_tick,
        state.fee_growth_global_0,
        state.fee_growth_global_1,
    )
}

/// Token transfer that surfaces failure as `TransferFailed`
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
