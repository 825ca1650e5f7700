//! Calculation engines for Mizan.
//!
//! This crate contains pure calculation logic with ZERO web or I/O dependencies.
//! Every engine is a function from an immutable input record to an immutable
//! result record; callers own all state.
//!
//! # Modules
//!
//! - `zakat` - Zakat due on gold, silver, cash and investments against Nisab
//! - `inheritance` - Simplified fixed-fraction estate distribution
//! - `pricing` - Gold price value objects and the fallback quote
//! - `input` - Sanitization of raw user-entered values
//! - `allocation` - Largest Remainder rounding for presenting shares

pub mod allocation;
pub mod inheritance;
pub mod input;
pub mod pricing;
pub mod zakat;

pub use inheritance::{InheritanceError, InheritanceInput, InheritanceResult, compute_inheritance};
pub use pricing::{GoldPrice, GoldQuote, PriceSource};
pub use zakat::{ZakatInput, ZakatParams, ZakatResult, compute_zakat};
