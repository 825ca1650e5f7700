//! Zakat input and result records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Asset holdings for a single Zakat calculation.
///
/// All quantities are expected to be non-negative (see [`crate::input`]);
/// the gold price must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZakatInput {
    /// Gold held, in grams.
    pub gold_grams: Decimal,
    /// Silver held, in grams.
    pub silver_grams: Decimal,
    /// Cash and bank balances.
    pub cash: Decimal,
    /// Investments and other zakatable assets.
    pub investments: Decimal,
    /// Outstanding debts deducted from wealth.
    pub debts: Decimal,
    /// Market price of gold per ten grams.
    pub gold_price_per_ten_grams: Decimal,
}

/// Which metal produced the applied Nisab threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NisabBasis {
    /// Gold Nisab was lower (or equal).
    Gold,
    /// Silver Nisab was lower.
    Silver,
}

/// Outcome of a Zakat calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZakatResult {
    /// Value of the gold held.
    pub gold_value: Decimal,
    /// Value of the silver held.
    pub silver_value: Decimal,
    /// Cash, as supplied.
    pub cash: Decimal,
    /// Investments, as supplied.
    pub investments: Decimal,
    /// Assets minus debts. Negative when debts exceed assets.
    pub total_wealth: Decimal,
    /// The lower of the gold and silver Nisab values.
    pub nisab_threshold: Decimal,
    /// Metal the threshold was taken from.
    pub nisab_basis: NisabBasis,
    /// Amount of Zakat due; zero below Nisab.
    pub zakat_due: Decimal,
}

impl ZakatResult {
    /// Returns true if wealth reached Nisab and Zakat is owed.
    #[must_use]
    pub fn is_due(&self) -> bool {
        self.total_wealth >= self.nisab_threshold && self.zakat_due > Decimal::ZERO
    }
}
