//! Zakat engine.
//!
//! Steps, in order:
//! 1. Value gold from the price per ten grams and silver from the price per gram
//! 2. Sum assets and subtract debts
//! 3. Take the lower of the gold and silver Nisab values
//! 4. Apply the Zakat rate when wealth reaches the threshold

use rust_decimal::Decimal;

use super::params::ZakatParams;
use super::types::{NisabBasis, ZakatInput, ZakatResult};

const TEN: Decimal = Decimal::TEN;

/// Computes Zakat due for the given holdings.
///
/// Pure and deterministic: identical inputs always produce identical results.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use mizan_core::zakat::{ZakatInput, ZakatParams, compute_zakat};
///
/// let input = ZakatInput {
///     gold_grams: dec!(100),
///     silver_grams: dec!(0),
///     cash: dec!(0),
///     investments: dec!(0),
///     debts: dec!(0),
///     gold_price_per_ten_grams: dec!(6850),
/// };
/// let result = compute_zakat(&input, &ZakatParams::default());
/// assert_eq!(result.zakat_due, dec!(1712.5));
/// ```
#[must_use]
pub fn compute_zakat(input: &ZakatInput, params: &ZakatParams) -> ZakatResult {
    let gold_value = input.gold_grams * input.gold_price_per_ten_grams / TEN;
    let silver_value = input.silver_grams * params.silver_price_per_gram;

    let total_wealth =
        gold_value + silver_value + input.cash + input.investments - input.debts;

    let gold_nisab = params.gold_nisab_grams * input.gold_price_per_ten_grams / TEN;
    let silver_nisab = params.silver_nisab_grams * params.silver_price_per_gram;
    let (nisab_threshold, nisab_basis) = if gold_nisab <= silver_nisab {
        (gold_nisab, NisabBasis::Gold)
    } else {
        (silver_nisab, NisabBasis::Silver)
    };

    let zakat_due = if total_wealth >= nisab_threshold {
        total_wealth * params.zakat_rate
    } else {
        Decimal::ZERO
    };

    ZakatResult {
        gold_value,
        silver_value,
        cash: input.cash,
        investments: input.investments,
        total_wealth,
        nisab_threshold,
        nisab_basis,
        zakat_due,
    }
}

/// Computes Zakat with [`ZakatParams::default`].
#[must_use]
pub fn compute_zakat_default(input: &ZakatInput) -> ZakatResult {
    compute_zakat(input, &ZakatParams::default())
}
