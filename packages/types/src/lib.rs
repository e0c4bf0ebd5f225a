// Conxian Types Package
//
// Error codes and value types shared across contract boundaries.

#![no_std]

pub mod error;
pub mod pool;

pub use error::DexError;
pub use pool::{PoolKind, PoolRecord, PoolRef, SwapQuote, SwapResult};

/// Persistent entry lifetime, in ledgers
pub const PERSISTENT_TTL: u32 = 6_307_200;

/// Sort two token addresses into canonical (token0, token1) order
pub fn sort_tokens(
    a: soroban_sdk::Address,
    b: soroban_sdk::Address,
) -> Result<(soroban_sdk::Address, soroban_sdk::Address), DexError> {
    if a == b {
        return Err(DexError::IdenticalTokens);
    }
    if a < b {
        Ok((a, b))
    } else {
        Ok((b, a))
    }
}
