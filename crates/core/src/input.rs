//! Sanitization of raw, user-entered values.
//!
//! Form fields arrive as free text. Anything that is not a number, and any
//! negative number, counts as zero, so the engines only ever see clean records.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::inheritance::{HeirCounts, InheritanceInput};
use crate::pricing::GoldPrice;
use crate::zakat::ZakatInput;

/// Largest amount accepted from a raw field (one trillion). Larger values are
/// clamped so products of two inputs stay within `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Largest heir count accepted from a raw field.
pub const MAX_HEIR_COUNT: u32 = 10_000;

/// Parses a monetary amount or weight. Garbage and negatives become zero.
#[must_use]
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_or(Decimal::ZERO, clamp_amount)
}

/// Clamps an amount into `0..=MAX_AMOUNT`.
#[must_use]
pub fn clamp_amount(amount: Decimal) -> Decimal {
    amount.max(Decimal::ZERO).min(MAX_AMOUNT)
}

/// Parses a head count, truncating fractions (`"2.7"` is 2).
#[must_use]
pub fn parse_count(raw: &str) -> u32 {
    parse_amount(raw)
        .trunc()
        .to_u32()
        .unwrap_or(0)
        .min(MAX_HEIR_COUNT)
}

/// Parses a 0/1 heir field; any positive count means present.
#[must_use]
pub fn parse_presence(raw: &str) -> bool {
    parse_count(raw) > 0
}

/// Zakat form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawZakatInput {
    /// Gold in grams.
    pub gold: String,
    /// Silver in grams.
    pub silver: String,
    /// Cash.
    pub cash: String,
    /// Investments.
    pub investments: String,
    /// Debts.
    pub debts: String,
}

impl RawZakatInput {
    /// Produces a clean engine input priced at `gold_price`.
    #[must_use]
    pub fn sanitize(&self, gold_price: GoldPrice) -> ZakatInput {
        ZakatInput {
            gold_grams: parse_amount(&self.gold),
            silver_grams: parse_amount(&self.silver),
            cash: parse_amount(&self.cash),
            investments: parse_amount(&self.investments),
            debts: parse_amount(&self.debts),
            gold_price_per_ten_grams: gold_price.per_ten_grams(),
        }
    }
}

/// Inheritance form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInheritanceInput {
    /// Gross estate.
    pub total_wealth: String,
    /// Debts.
    pub debts: String,
    /// Spouse (0 or 1).
    pub spouse: String,
    /// Number of sons.
    pub sons: String,
    /// Number of daughters.
    pub daughters: String,
    /// Father (0 or 1).
    pub father: String,
    /// Mother (0 or 1).
    pub mother: String,
}

impl RawInheritanceInput {
    /// Produces a clean engine input.
    #[must_use]
    pub fn sanitize(&self) -> InheritanceInput {
        InheritanceInput {
            total_wealth: parse_amount(&self.total_wealth),
            debts: parse_amount(&self.debts),
            heirs: HeirCounts {
                spouse: parse_presence(&self.spouse),
                sons: parse_count(&self.sons),
                daughters: parse_count(&self.daughters),
                father: parse_presence(&self.father),
                mother: parse_presence(&self.mother),
            },
        }
    }
}
