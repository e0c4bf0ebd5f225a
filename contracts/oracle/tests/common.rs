#![allow(dead_code)]

use conxian_oracle::{ConxianOracle, ConxianOracleClient, OracleConfig};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env,
};

pub const START: u64 = 1_000;
pub const SOURCE_ONE: u32 = 1;
pub const SOURCE_TWO: u32 = 2;
pub const ONE: i128 = 100_000_000; // 1.0 at 8 decimals

pub struct OracleSetup<'a> {
    pub client: ConxianOracleClient<'a>,
    pub admin: Address,
    pub operator: Address,
    pub second_operator: Address,
    pub asset: Address,
}

pub fn default_config() -> OracleConfig {
    OracleConfig {
        stale_threshold: 60,
        twap_window: 300,
        min_confidence: 5_000,
        max_deviation_bps: 5_000,
        min_sources: 2,
        price_decimals: 8,
    }
}

/// Oracle at `START` with two registered sources
pub fn setup_oracle(env: &Env) -> OracleSetup<'_> {
    setup_oracle_with(env, default_config())
}

pub fn setup_oracle_with(env: &Env, config: OracleConfig) -> OracleSetup<'_> {
    set_time(env, START);

    let admin = Address::generate(env);
    let client = ConxianOracleClient::new(env, &env.register(ConxianOracle, ()));
    client.initialize(&admin, &config);

    let operator = Address::generate(env);
    let second_operator = Address::generate(env);
    client.register_source(&admin, &SOURCE_ONE, &operator);
    client.register_source(&admin, &SOURCE_TWO, &second_operator);

    OracleSetup { client, admin, operator, second_operator, asset: Address::generate(env) }
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().set_timestamp(timestamp);
}
