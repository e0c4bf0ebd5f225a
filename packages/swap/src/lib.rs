#![no_std]

pub mod engine;
pub mod types;

pub use engine::{apply_crossings, simulate_swap};
pub use types::{SwapOutcome, SwapState};
