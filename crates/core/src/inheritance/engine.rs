//! Inheritance distribution engine.

use rust_decimal::{Decimal, RoundingStrategy};

use super::error::InheritanceError;
use super::types::{
    HeirCategory, HeirShare, InheritanceInput, InheritanceResult, ShareFraction,
};

/// Scale of computed shares.
pub const SHARE_DECIMAL_PLACES: u32 = 10;

/// Distributes the net estate across parents, spouse and children.
///
/// Order of computation:
/// 1. Father and mother each take 1/6 of the net estate
/// 2. The spouse takes 1/8 when there are children, otherwise 1/4
/// 3. Children share what remains, a son counting as two daughters
///
/// Fixed shares and the per-child unit are truncated to
/// [`SHARE_DECIMAL_PLACES`], so every sum is exact and never exceeds the net
/// estate. With children the truncation dust goes to the sons (or daughters
/// when there are no sons); without children the remainder stays unallocated,
/// see [`InheritanceResult::unallocated`].
///
/// # Errors
///
/// Returns `InheritanceError::InsufficientEstate` if debts are equal to or
/// larger than the estate.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use mizan_core::inheritance::{HeirCounts, InheritanceInput, compute_inheritance};
///
/// let input = InheritanceInput {
///     total_wealth: dec!(1200000),
///     debts: dec!(0),
///     heirs: HeirCounts { spouse: true, sons: 2, daughters: 1, ..HeirCounts::default() },
/// };
/// let result = compute_inheritance(&input).unwrap();
/// assert_eq!(result.distributed(), dec!(1200000));
/// ```
pub fn compute_inheritance(
    input: &InheritanceInput,
) -> Result<InheritanceResult, InheritanceError> {
    let net_wealth = input.total_wealth - input.debts;
    if net_wealth <= Decimal::ZERO {
        return Err(InheritanceError::InsufficientEstate { net_wealth });
    }

    let heirs = input.heirs;
    let mut shares = Vec::with_capacity(5);

    if heirs.father {
        shares.push(fixed_share(HeirCategory::Father, ShareFraction::PARENT, net_wealth));
    }
    if heirs.mother {
        shares.push(fixed_share(HeirCategory::Mother, ShareFraction::PARENT, net_wealth));
    }
    if heirs.spouse {
        let fraction = if heirs.has_children() {
            ShareFraction::SPOUSE_WITH_CHILDREN
        } else {
            ShareFraction::SPOUSE_WITHOUT_CHILDREN
        };
        shares.push(fixed_share(HeirCategory::Spouse, fraction, net_wealth));
    }

    let child_units = heirs.child_units();
    if child_units > 0 {
        let remaining = net_wealth - shares.iter().map(|s| s.amount).sum::<Decimal>();
        let per_unit = truncate(remaining / Decimal::from(child_units));

        // Sons take whatever the daughters leave so the children's total is
        // exactly the remainder.
        let daughters_total = if heirs.sons == 0 {
            remaining
        } else {
            per_unit * Decimal::from(heirs.daughters)
        };

        if heirs.daughters > 0 {
            shares.push(HeirShare {
                category: HeirCategory::Daughters,
                count: heirs.daughters,
                amount: daughters_total,
            });
        }
        if heirs.sons > 0 {
            shares.push(HeirShare {
                category: HeirCategory::Sons,
                count: heirs.sons,
                amount: remaining - daughters_total,
            });
        }
    }

    Ok(InheritanceResult {
        total_wealth: input.total_wealth,
        debts: input.debts,
        net_wealth,
        heirs,
        shares,
    })
}

fn fixed_share(category: HeirCategory, fraction: ShareFraction, net_wealth: Decimal) -> HeirShare {
    HeirShare {
        category,
        count: 1,
        amount: truncate(fraction.of(net_wealth)),
    }
}

fn truncate(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(SHARE_DECIMAL_PLACES, RoundingStrategy::ToZero)
}
