//! Gold price value objects.
//!
//! The engines take the gold price as a plain parameter; these types carry a
//! quote from whichever feed the caller uses, together with where it came from.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::MAX_AMOUNT;

/// Price of gold per ten grams. Always positive and at most [`MAX_AMOUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GoldPrice(Decimal);

impl GoldPrice {
    /// Price per ten grams used when no live quote is available.
    pub const FALLBACK_PER_TEN_GRAMS: Decimal = Decimal::from_parts(6850, 0, 0, false, 0);

    /// The fallback price.
    pub const FALLBACK: Self = Self(Self::FALLBACK_PER_TEN_GRAMS);

    /// Creates a price from a value per ten grams. Returns `None` if not
    /// positive or above [`MAX_AMOUNT`].
    #[must_use]
    pub fn from_per_ten_grams(price: Decimal) -> Option<Self> {
        (price > Decimal::ZERO && price <= MAX_AMOUNT).then_some(Self(price))
    }

    /// Creates a price from a value per gram. Returns `None` if not positive
    /// or if ten grams would cost more than [`MAX_AMOUNT`].
    #[must_use]
    pub fn from_per_gram(price: Decimal) -> Option<Self> {
        price
            .checked_mul(Decimal::TEN)
            .and_then(Self::from_per_ten_grams)
    }

    /// Like [`Self::from_per_ten_grams`] but substitutes `fallback` for an
    /// out-of-range value.
    #[must_use]
    pub fn or_fallback(price: Decimal, fallback: Self) -> Self {
        Self::from_per_ten_grams(price).unwrap_or(fallback)
    }

    /// Price per ten grams.
    #[must_use]
    pub const fn per_ten_grams(self) -> Decimal {
        self.0
    }

    /// Price per gram.
    #[must_use]
    pub fn per_gram(self) -> Decimal {
        self.0 / Decimal::TEN
    }
}

impl Default for GoldPrice {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Where a quote came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    /// Fetched from the market-data feed.
    Live,
    /// Feed unavailable; configured fallback used.
    Fallback,
    /// Provided by the caller with the calculation request.
    Supplied,
}

/// A gold price at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoldQuote {
    /// The price.
    pub price: GoldPrice,
    /// Origin of the price.
    pub source: PriceSource,
    /// When the quote was produced.
    pub fetched_at: DateTime<Utc>,
}

impl GoldQuote {
    /// A quote fetched from the feed.
    #[must_use]
    pub const fn live(price: GoldPrice, fetched_at: DateTime<Utc>) -> Self {
        Self {
            price,
            source: PriceSource::Live,
            fetched_at,
        }
    }

    /// A quote standing in for an unavailable feed.
    #[must_use]
    pub const fn fallback(price: GoldPrice, fetched_at: DateTime<Utc>) -> Self {
        Self {
            price,
            source: PriceSource::Fallback,
            fetched_at,
        }
    }

    /// A price that arrived with the calculation request.
    #[must_use]
    pub const fn supplied(price: GoldPrice, fetched_at: DateTime<Utc>) -> Self {
        Self {
            price,
            source: PriceSource::Supplied,
            fetched_at,
        }
    }

    /// Returns true if the feed was unavailable and the fallback was served.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, PriceSource::Fallback)
    }
}
