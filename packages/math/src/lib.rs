// Conxian Math Package
//
// Q64.96 fixed-point math for concentrated liquidity. Pure functions only;
// nothing here touches the host environment.

#![no_std]

pub mod constants;
pub mod error;
pub mod full_math;
pub mod liquidity;
pub mod sqrt_price;
pub mod swap_step;
pub mod tick_math;

pub use constants::*;
pub use error::MathError;

pub use full_math::{div_rounding_up, mul_div, mul_div_rounding_up, sqrt_product};

pub use tick_math::{
    is_aligned,
    is_valid_tick,
    sqrt_price_to_tick,
    tick_spacing_for_fee,
    tick_to_sqrt_price,
};

pub use sqrt_price::{
    get_amount0_delta,
    get_amount1_delta,
    get_next_sqrt_price_from_input,
};

pub use liquidity::{add_delta, get_amounts_for_liquidity, to_token_amount};

pub use swap_step::{compute_swap_step, SwapStep};
