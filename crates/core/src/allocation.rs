//! Amount allocation utilities using the Largest Remainder Method.
//!
//! Used to present exact shares at currency precision while guaranteeing the
//! rounded parts still sum to the rounded total (no paisa lost or invented).
//!
//! The method:
//! 1. Calculate exact allocations
//! 2. Round each one down
//! 3. Calculate the remainder (total - sum of rounded)
//! 4. Give one unit each to the parts with the largest fractional remainders

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Allocation utility for splitting amounts at a fixed precision.
pub struct AllocationUtil;

impl AllocationUtil {
    /// Allocate an amount equally across N recipients.
    ///
    /// The first recipients absorb the leftover units.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use mizan_core::allocation::AllocationUtil;
    ///
    /// // 100 / 3 = [33.34, 33.33, 33.33], sum = 100.00
    /// let result = AllocationUtil::allocate_equal(dec!(100), 3, 2);
    /// assert_eq!(result.iter().sum::<rust_decimal::Decimal>(), dec!(100));
    /// ```
    #[must_use]
    pub fn allocate_equal(total: Decimal, count: usize, decimal_places: u32) -> Vec<Decimal> {
        if count == 0 {
            return vec![];
        }

        let total_rounded = round_half_even(total, decimal_places);
        if count == 1 {
            return vec![total_rounded];
        }

        let count_dec = Decimal::from(count as u64);
        let unit = Decimal::new(1, decimal_places);

        let base = (total_rounded / count_dec)
            .round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero);
        let extra_count = units_in(total_rounded - base * count_dec, unit);

        (0..count)
            .map(|i| if i < extra_count { base + unit } else { base })
            .collect()
    }

    /// Allocate an amount in proportion to the given weights.
    ///
    /// Weights need not sum to anything in particular; an exact share is
    /// `total * weight / sum(weights)`. Ties between equal remainders go to the
    /// earlier position.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use mizan_core::allocation::AllocationUtil;
    ///
    /// let weights = vec![dec!(1), dec!(1), dec!(1)];
    /// let result = AllocationUtil::allocate_by_weights(dec!(100), &weights, 2);
    /// assert_eq!(result, vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
    /// ```
    #[must_use]
    pub fn allocate_by_weights(
        total: Decimal,
        weights: &[Decimal],
        decimal_places: u32,
    ) -> Vec<Decimal> {
        if weights.is_empty() {
            return vec![];
        }

        let weight_sum: Decimal = weights.iter().copied().sum();
        if weight_sum <= Decimal::ZERO {
            return vec![Decimal::ZERO; weights.len()];
        }

        let unit = Decimal::new(1, decimal_places);
        let total_rounded = round_half_even(total, decimal_places);

        let exact: Vec<Decimal> = weights
            .iter()
            .map(|w| total_rounded * *w / weight_sum)
            .collect();

        let mut rounded: Vec<Decimal> = exact
            .iter()
            .map(|a| a.round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero))
            .collect();

        let sum_rounded: Decimal = rounded.iter().copied().sum();
        let units_to_distribute = units_in(total_rounded - sum_rounded, unit);
        if units_to_distribute == 0 {
            return rounded;
        }

        let mut remainders: Vec<(usize, Decimal)> = exact
            .iter()
            .zip(rounded.iter())
            .enumerate()
            .map(|(i, (e, r))| (i, *e - *r))
            .collect();

        // Stable sort keeps earlier positions first on ties
        remainders.sort_by(|a, b| b.1.cmp(&a.1));

        for (idx, _) in remainders.iter().take(units_to_distribute) {
            rounded[*idx] += unit;
        }

        rounded
    }
}

fn round_half_even(amount: Decimal, decimal_places: u32) -> Decimal {
    amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

/// Number of whole `unit`s contained in `amount`.
fn units_in(amount: Decimal, unit: Decimal) -> usize {
    (amount / unit)
        .round_dp_with_strategy(0, RoundingStrategy::ToZero)
        .to_u64()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}
