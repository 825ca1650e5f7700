//! Inheritance data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::AllocationUtil;

/// An exact share of the estate, kept as a ratio so 1/6 is not rounded to 0.1667.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareFraction {
    /// Numerator.
    pub numerator: u32,
    /// Denominator. Never zero.
    pub denominator: u32,
}

impl ShareFraction {
    /// Share of each parent (1/6).
    pub const PARENT: Self = Self::new(1, 6);
    /// Share of the spouse when the deceased left children (1/8).
    pub const SPOUSE_WITH_CHILDREN: Self = Self::new(1, 8);
    /// Share of the spouse when the deceased left no children (1/4).
    pub const SPOUSE_WITHOUT_CHILDREN: Self = Self::new(1, 4);

    /// Creates a fraction.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero; fractions are only built from constants.
    #[must_use]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        assert!(denominator != 0, "share denominator must be non-zero");
        Self {
            numerator,
            denominator,
        }
    }

    /// Applies the fraction to an amount.
    #[must_use]
    pub fn of(self, amount: Decimal) -> Decimal {
        amount * Decimal::from(self.numerator) / Decimal::from(self.denominator)
    }
}

/// Surviving relatives of the deceased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeirCounts {
    /// Surviving spouse.
    pub spouse: bool,
    /// Number of sons.
    pub sons: u32,
    /// Number of daughters.
    pub daughters: u32,
    /// Surviving father.
    pub father: bool,
    /// Surviving mother.
    pub mother: bool,
}

impl HeirCounts {
    /// Returns true if the deceased left at least one child.
    #[must_use]
    pub const fn has_children(&self) -> bool {
        self.sons > 0 || self.daughters > 0
    }

    /// Weight of all children where a son counts twice.
    #[must_use]
    pub fn child_units(&self) -> u64 {
        u64::from(self.sons) * 2 + u64::from(self.daughters)
    }
}

/// Estate and heirs for a single distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritanceInput {
    /// Gross value of the estate.
    pub total_wealth: Decimal,
    /// Debts settled before distribution.
    pub debts: Decimal,
    /// Surviving heirs.
    pub heirs: HeirCounts,
}

/// Class of heir that receives one line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeirCategory {
    /// Father of the deceased.
    Father,
    /// Mother of the deceased.
    Mother,
    /// Husband or wife of the deceased.
    Spouse,
    /// All daughters, as one aggregate.
    Daughters,
    /// All sons, as one aggregate.
    Sons,
}

impl std::fmt::Display for HeirCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Father => write!(f, "Father"),
            Self::Mother => write!(f, "Mother"),
            Self::Spouse => write!(f, "Spouse"),
            Self::Daughters => write!(f, "Daughters"),
            Self::Sons => write!(f, "Sons"),
        }
    }
}

/// Amount awarded to one heir category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeirShare {
    /// Who receives it.
    pub category: HeirCategory,
    /// Number of heirs sharing the line item.
    pub count: u32,
    /// Aggregate amount for the category.
    pub amount: Decimal,
}

impl HeirShare {
    /// Display label, e.g. `"Father"` or `"Sons (3)"`.
    #[must_use]
    pub fn label(&self) -> String {
        match self.category {
            HeirCategory::Daughters | HeirCategory::Sons => {
                format!("{} ({})", self.category, self.count)
            }
            _ => self.category.to_string(),
        }
    }

    /// Splits the aggregate evenly between the individual heirs at the given
    /// precision. The parts always sum to the aggregate rounded to that precision.
    #[must_use]
    pub fn per_heir(&self, decimal_places: u32) -> Vec<Decimal> {
        let count = usize::try_from(self.count).unwrap_or_default();
        AllocationUtil::allocate_equal(self.amount, count, decimal_places)
    }
}

/// Outcome of a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritanceResult {
    /// Gross value of the estate, as supplied.
    pub total_wealth: Decimal,
    /// Debts, as supplied.
    pub debts: Decimal,
    /// Estate after debts.
    pub net_wealth: Decimal,
    /// Heirs, as supplied.
    pub heirs: HeirCounts,
    /// Line items in order: Father, Mother, Spouse, Daughters, Sons.
    pub shares: Vec<HeirShare>,
}

impl InheritanceResult {
    /// Sum of all awarded shares.
    #[must_use]
    pub fn distributed(&self) -> Decimal {
        self.shares.iter().map(|s| s.amount).sum()
    }

    /// Residue left with no heir under the simplified model.
    #[must_use]
    pub fn unallocated(&self) -> Decimal {
        self.net_wealth - self.distributed()
    }

    /// Looks up the line item for a category.
    #[must_use]
    pub fn share(&self, category: HeirCategory) -> Option<&HeirShare> {
        self.shares.iter().find(|s| s.category == category)
    }

    /// Line items as `(label, amount)` pairs in computation order.
    #[must_use]
    pub fn labelled(&self) -> Vec<(String, Decimal)> {
        self.shares.iter().map(|s| (s.label(), s.amount)).collect()
    }

    /// Shares rounded to `decimal_places` using the Largest Remainder Method.
    ///
    /// The rounded amounts sum to the distributed total rounded to the same
    /// precision, so no smallest currency unit is lost or invented.
    #[must_use]
    pub fn rounded(&self, decimal_places: u32) -> Vec<HeirShare> {
        let weights: Vec<Decimal> = self.shares.iter().map(|s| s.amount).collect();
        let amounts =
            AllocationUtil::allocate_by_weights(self.distributed(), &weights, decimal_places);

        self.shares
            .iter()
            .zip(amounts)
            .map(|(share, amount)| HeirShare { amount, ..*share })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fraction_of_amount() {
        assert_eq!(ShareFraction::PARENT.of(dec!(1200000)), dec!(200000));
        assert_eq!(ShareFraction::SPOUSE_WITH_CHILDREN.of(dec!(1200000)), dec!(150000));
        assert_eq!(ShareFraction::SPOUSE_WITHOUT_CHILDREN.of(dec!(1200000)), dec!(300000));
    }

    #[test]
    fn test_child_units_counts_sons_twice() {
        let heirs = HeirCounts {
            sons: 3,
            daughters: 2,
            ..HeirCounts::default()
        };
        assert!(heirs.has_children());
        assert_eq!(heirs.child_units(), 8);
        assert!(!HeirCounts::default().has_children());
    }

    #[test]
    fn test_labels() {
        let father = HeirShare {
            category: HeirCategory::Father,
            count: 1,
            amount: dec!(10),
        };
        let sons = HeirShare {
            category: HeirCategory::Sons,
            count: 3,
            amount: dec!(30),
        };
        assert_eq!(father.label(), "Father");
        assert_eq!(sons.label(), "Sons (3)");
    }

    #[test]
    fn test_per_heir_split() {
        let daughters = HeirShare {
            category: HeirCategory::Daughters,
            count: 3,
            amount: dec!(100),
        };
        let parts = daughters.per_heir(2);
        assert_eq!(parts, vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
    }
}
