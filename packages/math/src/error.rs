// SPDX-License-Identifier: MIT
// Math errors

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MathError {
    TickOutOfRange = 1,
    SqrtPriceOutOfRange = 2,
    DivisionByZero = 3,
    Overflow = 4,
    LiquidityUnderflow = 5,
    LiquidityOverflow = 6,
    InvalidPriceInput = 7,
}
