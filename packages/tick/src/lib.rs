#![no_std]

pub mod bitmap;
pub mod fee_growth;
pub mod types;
pub mod update;

pub use bitmap::{compress, flip_tick, next_initialized_tick_within_one_word};
pub use fee_growth::get_fee_growth_inside;
pub use types::{StagedCrossing, TickInfo};
pub use update::{clear_tick, cross_tick, update_tick};

pub use conxian_math::{is_aligned, is_valid_tick};
