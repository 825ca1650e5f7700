//! Zakat calculation against the gold/silver Nisab.

pub mod engine;
pub mod params;
pub mod types;

#[cfg(test)]
mod props;

pub use engine::{compute_zakat, compute_zakat_default};
pub use params::ZakatParams;
pub use types::{NisabBasis, ZakatInput, ZakatResult};
