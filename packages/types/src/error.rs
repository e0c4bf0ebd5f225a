// Shared error taxonomy for every Conxian contract
//
// Pools, the router, the registry and the oracle all return `DexError`, so a
// pool failure surfaces through the router with its original code.

use conxian_math::MathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DexError {
    // Authorization errors (100-199)
    NotAuthorized = 100,

    // State precondition errors (200-299)
    AlreadyInitialized = 200,
    NotInitialized = 201,
    PositionNotFound = 202,
    PoolExists = 204,
    Paused = 205,
    CircuitOpen = 206,

    // Parameter validation errors (300-399)
    InvalidAmount = 300,
    ZeroFeeTier = 301,
    IdenticalTokens = 302,
    TickOutOfRange = 303,
    SqrtPriceOutOfRange = 304,
    InvalidTick = 305,
    InvalidTickRange = 306,
    TickNotAligned = 307,
    InvalidPeriod = 308,
    InvalidFee = 309,
    InvalidPath = 310,
    PathTooLong = 311,
    InvalidToken = 312,
    InvalidPrice = 313,
    InvalidConfig = 314,

    // Economic errors (400-499)
    Slippage = 400,
    InsufficientLiquidity = 401,
    NoLiquidity = 402,
    PriceManipulation = 403,
    NoPath = 404,
    MathOverflow = 405,

    // Staleness and data errors (500-599)
    NoData = 500,
    LowConfidence = 501,
    StalePrice = 502,
    InsufficientSources = 503,

    // External call errors (600-699)
    TransferFailed = 600,
    PoolCallFailed = 601,
}

impl From<MathError> for DexError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::TickOutOfRange => DexError::TickOutOfRange,
            MathError::SqrtPriceOutOfRange => DexError::SqrtPriceOutOfRange,
            MathError::LiquidityUnderflow => DexError::InsufficientLiquidity,
            MathError::DivisionByZero
            | MathError::Overflow
            | MathError::LiquidityOverflow
            | MathError::InvalidPriceInput => DexError::MathOverflow,
        }
    }
}
