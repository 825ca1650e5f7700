//! Property-based tests for the Zakat engine.
//!
//! - Zakat due is never negative
//! - Zakat due never exceeds the rate applied to non-negative wealth
//! - Zakat due is zero exactly when wealth is below Nisab
//! - The engine is deterministic

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::compute_zakat;
use super::params::ZakatParams;
use super::types::ZakatInput;

/// Strategy to generate non-negative amounts (0.00 to 10,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive gold prices per ten grams (1.00 to 200,000.00).
fn gold_price() -> impl Strategy<Value = Decimal> {
    (100i64..20_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn zakat_input() -> impl Strategy<Value = ZakatInput> {
    (amount(), amount(), amount(), amount(), amount(), gold_price()).prop_map(
        |(gold_grams, silver_grams, cash, investments, debts, gold_price_per_ten_grams)| {
            ZakatInput {
                gold_grams,
                silver_grams,
                cash,
                investments,
                debts,
                gold_price_per_ten_grams,
            }
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Zakat due is non-negative for any non-negative holdings.
    #[test]
    fn prop_zakat_due_non_negative(input in zakat_input()) {
        let result = compute_zakat(&input, &ZakatParams::default());
        prop_assert!(result.zakat_due >= Decimal::ZERO);
    }

    /// With non-negative wealth, Zakat due is bounded by wealth times the rate.
    #[test]
    fn prop_zakat_due_bounded_by_rate(input in zakat_input()) {
        let params = ZakatParams::default();
        let result = compute_zakat(&input, &params);
        if result.total_wealth >= Decimal::ZERO {
            prop_assert!(result.zakat_due <= result.total_wealth * params.zakat_rate);
        }
    }

    /// Zakat is due exactly when wealth reaches the threshold.
    #[test]
    fn prop_due_iff_wealth_reaches_nisab(input in zakat_input()) {
        let params = ZakatParams::default();
        let result = compute_zakat(&input, &params);
        if result.total_wealth >= result.nisab_threshold {
            prop_assert_eq!(result.zakat_due, result.total_wealth * params.zakat_rate);
        } else {
            prop_assert_eq!(result.zakat_due, Decimal::ZERO);
        }
    }

    /// Threshold is the lower of the two Nisab values.
    #[test]
    fn prop_threshold_is_minimum_nisab(input in zakat_input()) {
        let params = ZakatParams::default();
        let result = compute_zakat(&input, &params);
        let gold_nisab = params.gold_nisab_grams * input.gold_price_per_ten_grams / Decimal::TEN;
        let silver_nisab = params.silver_nisab_grams * params.silver_price_per_gram;
        prop_assert_eq!(result.nisab_threshold, gold_nisab.min(silver_nisab));
    }

    /// Calling the engine twice yields identical results.
    #[test]
    fn prop_zakat_is_deterministic(input in zakat_input()) {
        let params = ZakatParams::default();
        let first = compute_zakat(&input, &params);
        let second = compute_zakat(&input, &params);
        prop_assert_eq!(first, second);
    }
}
