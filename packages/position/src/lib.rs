#![no_std]

pub mod fees;
pub mod manager;
pub mod types;

pub use fees::calculate_pending_fees;
pub use manager::{
    credit_tokens_owed, modify_position, position_info, take_tokens_owed, update_position,
};
pub use types::{Position, PositionInfo};
