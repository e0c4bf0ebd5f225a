// SPDX-License-Identifier: MIT
// Full-precision multiply/divide with a 256-bit intermediate

use crate::error::MathError;

const LOW_MASK: u128 = 0xFFFF_FFFF_FFFF_FFFF;

/// Unsigned 256-bit value as two u128 limbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct U256 {
    pub hi: u128,
    pub lo: u128,
}

impl U256 {
    pub const MAX: U256 = U256 { hi: u128::MAX, lo: u128::MAX };

    /// Widening product of two u128 values, decomposed into 64-bit limbs.
    pub fn from_mul(a: u128, b: u128) -> U256 {
        let a_hi = a >> 64;
        let a_lo = a & LOW_MASK;
        let b_hi = b >> 64;
        let b_lo = b & LOW_MASK;

        let term_ll = a_lo * b_lo;
        let term_lh = a_lo * b_hi;
        let term_hl = a_hi * b_lo;
        let term_hh = a_hi * b_hi;

        let mid = (term_ll >> 64) + (term_lh & LOW_MASK) + (term_hl & LOW_MASK);

        U256 {
            hi: term_hh + (term_lh >> 64) + (term_hl >> 64) + (mid >> 64),
            lo: (term_ll & LOW_MASK) | (mid << 64),
        }
    }

    /// Divide by a u128, returning a 256-bit quotient and the remainder.
    pub fn div_rem(self, divisor: u128) -> (U256, u128) {
        let q_hi = self.hi / divisor;
        let r_hi = self.hi % divisor;
        let (q_lo, rem) = div_narrow(r_hi, self.lo, divisor);
        (U256 { hi: q_hi, lo: q_lo }, rem)
    }

    pub fn to_u128(self) -> Option<u128> {
        if self.hi == 0 {
            Some(self.lo)
        } else {
            None
        }
    }
}

/// Long division of `hi * 2^128 + lo` by `divisor`, requires `hi < divisor`.
fn div_narrow(hi: u128, lo: u128, divisor: u128) -> (u128, u128) {
    let mut rem = hi;
    let mut quotient: u128 = 0;

    for i in (0..128).rev() {
        let carry = rem >> 127;
        rem = (rem << 1) | ((lo >> i) & 1);
        quotient <<= 1;
        if carry == 1 || rem >= divisor {
            rem = rem.wrapping_sub(divisor);
            quotient |= 1;
        }
    }

    (quotient, rem)
}

/// (a * b) >> 128
#[inline]
pub(crate) fn mul_shift_128(a: u128, b: u128) -> u128 {
    U256::from_mul(a, b).hi
}

/// Calculates floor(a * b / denominator) without intermediate overflow
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let product = U256::from_mul(a, b);
    if product.hi >= denominator {
        return Err(MathError::Overflow);
    }

    let (quotient, _) = div_narrow(product.hi, product.lo, denominator);
    Ok(quotient)
}

/// Calculates ceil(a * b / denominator) without intermediate overflow
pub fn mul_div_rounding_up(a: u128, b: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let product = U256::from_mul(a, b);
    if product.hi >= denominator {
        return Err(MathError::Overflow);
    }

    let (quotient, rem) = div_narrow(product.hi, product.lo, denominator);
    if rem == 0 {
        Ok(quotient)
    } else {
        quotient.checked_add(1).ok_or(MathError::Overflow)
    }
}

/// Divide with rounding up
#[inline]
pub fn div_rounding_up(numerator: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }
    let result = numerator / denominator;
    if numerator % denominator != 0 {
        Ok(result + 1)
    } else {
        Ok(result)
    }
}

/// floor(sqrt(a * b)), exact for any pair of u128 values
pub fn sqrt_product(a: u128, b: u128) -> u128 {
    let product = U256::from_mul(a, b);
    let mut root: u128 = 0;
    for bit in (0..128).rev() {
        let candidate = root | (1u128 << bit);
        if U256::from_mul(candidate, candidate) <= product {
            root = candidate;
        }
    }
    root
}
