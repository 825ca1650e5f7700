//! Overridable constants for the Zakat engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default silver price per gram used when no override is configured.
pub const DEFAULT_SILVER_PRICE_PER_GRAM: Decimal = Decimal::from_parts(85, 0, 0, false, 0);

/// Gold Nisab in grams (87.48 g).
pub const DEFAULT_GOLD_NISAB_GRAMS: Decimal = Decimal::from_parts(8748, 0, 0, false, 2);

/// Silver Nisab in grams (612.36 g).
pub const DEFAULT_SILVER_NISAB_GRAMS: Decimal = Decimal::from_parts(61236, 0, 0, false, 2);

/// Annual Zakat rate (2.5%).
pub const DEFAULT_ZAKAT_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);

/// Parameters that differ by jurisdiction or era.
///
/// Every field has a default, so a partially filled configuration section
/// deserializes into a complete parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZakatParams {
    /// Market price of silver per gram.
    pub silver_price_per_gram: Decimal,
    /// Grams of gold that make up the Nisab.
    pub gold_nisab_grams: Decimal,
    /// Grams of silver that make up the Nisab.
    pub silver_nisab_grams: Decimal,
    /// Fraction of zakatable wealth that is due (0.025 for 2.5%).
    pub zakat_rate: Decimal,
}

impl Default for ZakatParams {
    fn default() -> Self {
        Self {
            silver_price_per_gram: DEFAULT_SILVER_PRICE_PER_GRAM,
            gold_nisab_grams: DEFAULT_GOLD_NISAB_GRAMS,
            silver_nisab_grams: DEFAULT_SILVER_NISAB_GRAMS,
            zakat_rate: DEFAULT_ZAKAT_RATE,
        }
    }
}

impl ZakatParams {
    /// Returns a copy with a different silver price.
    #[must_use]
    pub const fn with_silver_price_per_gram(mut self, price: Decimal) -> Self {
        self.silver_price_per_gram = price;
        self
    }

    /// Returns a copy with a different Zakat rate.
    #[must_use]
    pub const fn with_zakat_rate(mut self, rate: Decimal) -> Self {
        self.zakat_rate = rate;
        self
    }
}
