//! Cross-contract calls into pools and the registry
//!
//! Every call goes through `try_invoke_contract` so a pool's `DexError`
//! reaches the router's caller with its original code.

use conxian_types::{DexError, PoolKind, PoolRecord, PoolRef, SwapQuote, SwapResult};
use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    vec, Address, Env, IntoVal, Symbol, TryFromVal, Val, Vec,
};

use crate::types::HopPlan;

fn call<T>(env: &Env, contract: &Address, func: &str, args: Vec<Val>) -> Result<T, DexError>
where
    T: TryFromVal<Env, Val>,
{
    match env.try_invoke_contract::<T, DexError>(contract, &Symbol::new(env, func), args) {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err),
        _ => Err(DexError::PoolCallFailed),
    }
}

// ============================================================
// REGISTRY
// ============================================================

pub fn registry_pool(
    env: &Env,
    registry: &Address,
    token_a: &Address,
    token_b: &Address,
    fee_tier: u32,
) -> Option<PoolRecord> {
    call::<Option<PoolRecord>>(
        env,
        registry,
        "get_pool",
        vec![
            env,
            token_a.clone().into_val(env),
            token_b.clone().into_val(env),
            fee_tier.into_val(env),
        ],
    )
    .ok()
    .flatten()
}

// ============================================================
// QUOTES
// ============================================================

/// Quote one hop of `amount_in` of `token_in`
///
/// Fails with `InvalidPath` when the pool does not trade `token_in`.
pub fn quote_hop(
    env: &Env,
    pool: &PoolRef,
    token_in: &Address,
    amount_in: i128,
) -> Result<HopPlan, DexError> {
    let (token0, token1): (Address, Address) = call(env, &pool.address, "get_tokens", vec![env])?;
    let (zero_for_one, token_out) = if *token_in == token0 {
        (true, token1)
    } else if *token_in == token1 {
        (false, token0)
    } else {
        return Err(DexError::InvalidPath);
    };

    let (amount_consumed, amount_out) = match pool.kind {
        PoolKind::ConcentratedLiquidity => {
            let quote: SwapQuote = call(
                env,
                &pool.address,
                "quote",
                vec![env, zero_for_one.into_val(env), amount_in.into_val(env)],
            )?;
            (quote.amount_in, quote.amount_out)
        }
        PoolKind::ConstantProduct => {
            let amount_out: i128 = call(
                env,
                &pool.address,
                "quote",
                vec![env, token_in.clone().into_val(env), amount_in.into_val(env)],
            )?;
            (amount_in, amount_out)
        }
    };

    Ok(HopPlan {
        pool: pool.clone(),
        token_in: token_in.clone(),
        token_out,
        zero_for_one,
        amount_in,
        amount_consumed,
        amount_out,
    })
}

/// Quote a whole path, feeding each hop's output into the next
pub fn quote_path(
    env: &Env,
    path: &Vec<PoolRef>,
    token_in: &Address,
    amount_in: i128,
) -> Result<Vec<HopPlan>, DexError> {
    let mut plan = Vec::new(env);
    let mut token = token_in.clone();
    let mut amount = amount_in;
    for pool in path.iter() {
        let hop = quote_hop(env, &pool, &token, amount)?;
        token = hop.token_out.clone();
        amount = hop.amount_out;
        plan.push_back(hop);
    }
    Ok(plan)
}

// ============================================================
// EXECUTION
// ============================================================

/// Execute a planned hop paid from the router's balance
///
/// Returns (consumed input, output).
pub fn execute_hop(
    env: &Env,
    hop: &HopPlan,
    recipient: &Address,
    min_amount_out: i128,
) -> Result<(i128, i128), DexError> {
    let router = env.current_contract_address();

    env.authorize_as_current_contract(vec![
        env,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: hop.token_in.clone(),
                fn_name: Symbol::new(env, "transfer"),
                args: (router.clone(), hop.pool.address.clone(), hop.amount_consumed).into_val(env),
            },
            sub_invocations: vec![env],
        }),
    ]);

    match hop.pool.kind {
        PoolKind::ConcentratedLiquidity => {
            let result: SwapResult = call(
                env,
                &hop.pool.address,
                "swap",
                vec![
                    env,
                    router.into_val(env),
                    recipient.clone().into_val(env),
                    hop.zero_for_one.into_val(env),
                    hop.amount_in.into_val(env),
                    min_amount_out.into_val(env),
                ],
            )?;
            Ok((result.amount_in, result.amount_out))
        }
        PoolKind::ConstantProduct => {
            let amount_out: i128 = call(
                env,
                &hop.pool.address,
                "swap",
                vec![
                    env,
                    router.into_val(env),
                    recipient.clone().into_val(env),
                    hop.token_in.clone().into_val(env),
                    hop.amount_in.into_val(env),
                    min_amount_out.into_val(env),
                ],
            )?;
            Ok((hop.amount_in, amount_out))
        }
    }
}
