use conxian_oracle::aggregate::{exceeds_deviation, median_price, normalize_price, weighted_mean};
use conxian_oracle::PriceSample;
use proptest::prelude::*;
use soroban_sdk::{Env, Vec};

fn samples(env: &Env, prices: &[(i128, u32)]) -> Vec<PriceSample> {
    let mut out = Vec::new(env);
    for (i, (price, confidence)) in prices.iter().enumerate() {
        out.push_back(PriceSample {
            source_id: i as u32,
            price: *price,
            decimals: 8,
            confidence: *confidence,
            timestamp: 0,
        });
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn weighted_mean_stays_within_sample_range(
        prices in prop::collection::vec((1i128..1_000_000_000_000, 1u32..=10_000), 1..8),
    ) {
        let env = Env::default();
        let agg = weighted_mean(&samples(&env, &prices), 0, 60).unwrap().unwrap();

        let low = prices.iter().map(|p| p.0).min().unwrap();
        let high = prices.iter().map(|p| p.0).max().unwrap();
        prop_assert!(agg.price >= low && agg.price <= high);
        prop_assert_eq!(agg.sources as usize, prices.len());
    }

    #[test]
    fn median_stays_within_sample_range(
        prices in prop::collection::vec(1i128..1_000_000_000_000, 1..8),
    ) {
        let env = Env::default();
        let pairs: std::vec::Vec<(i128, u32)> = prices.iter().map(|p| (*p, 5_000)).collect();
        let median = median_price(&env, &samples(&env, &pairs), 0, 60, 1).unwrap();

        prop_assert!(median >= *prices.iter().min().unwrap());
        prop_assert!(median <= *prices.iter().max().unwrap());
    }

    #[test]
    fn normalize_up_then_down_is_identity(
        price in 1i128..1_000_000_000_000,
        from in 0u32..10,
        extra in 0u32..10,
    ) {
        let up = normalize_price(price, from, from + extra).unwrap();
        prop_assert_eq!(normalize_price(up, from + extra, from).unwrap(), price);
    }

    #[test]
    fn deviation_is_symmetric_in_direction(
        reference in 1i128..1_000_000_000,
        delta in 0i128..1_000_000_000,
        max_bps in 1u32..10_000,
    ) {
        prop_assume!(reference - delta > 0);
        prop_assert_eq!(
            exceeds_deviation(reference, reference + delta, max_bps),
            exceeds_deviation(reference, reference - delta, max_bps)
        );
    }
}
