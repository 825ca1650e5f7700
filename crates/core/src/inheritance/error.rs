//! Inheritance error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Inheritance-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InheritanceError {
    /// Debts consume the whole estate.
    #[error("Net wealth must be positive to calculate inheritance, got {net_wealth}")]
    InsufficientEstate {
        /// Total wealth minus debts.
        net_wealth: Decimal,
    },
}
