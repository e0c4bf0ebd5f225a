// SPDX-License-Identifier: MIT
//
// Constants for Q64.96 concentrated-liquidity math.
// Grouped by concern; every value is referenced by the pool, swap engine
// or the tests in this package.

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Minimum valid tick value
/// The widest symmetric range whose sqrt price still fits in a u128 at 96
/// fractional bits
pub const MIN_TICK: i32 = -443636;

/// Maximum valid tick value
pub const MAX_TICK: i32 = 443636;

// ============================================================
// SQRT PRICE CONSTANTS (Q64.96 format)
// ============================================================

/// 2^96, the Q64.96 representation of 1.0
pub const Q96: u128 = 1u128 << 96;

/// Sqrt price at MIN_TICK
pub const MIN_SQRT_RATIO: u128 = 18447090764788882728;

/// Sqrt price at MAX_TICK
pub const MAX_SQRT_RATIO: u128 = 340275971719517849884101479065584693834;

/// Sqrt price for a 1:1 price ratio
pub const SQRT_PRICE_1_1: u128 = Q96;

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Fee denominator: fees are expressed in hundredths of a basis point
/// (3000 = 0.30%)
pub const FEE_DENOMINATOR: u32 = 1_000_000;

/// Maximum pool fee (10%)
pub const MAX_FEE: u32 = 100_000;

/// Fee growth accumulators are Q64.64 fees per unit of liquidity
pub const Q64: u128 = 1u128 << 64;

// ============================================================
// SWAP CONSTANTS
// ============================================================

/// Maximum ticks crossed by a single swap
pub const MAX_SWAP_ITERATIONS: u32 = 512;

/// Ticks tracked per tick-bitmap word
pub const TICKS_PER_WORD: i32 = 128;
