//! Simplified fixed-fraction estate distribution.
//!
//! This is NOT a complete faraid engine: parents, spouse and children receive
//! fixed fractions and the residue is never redistributed (no radd, no awl).

pub mod engine;
pub mod error;
pub mod types;


pub use engine::{SHARE_DECIMAL_PLACES, compute_inheritance};
pub use error::InheritanceError;
pub use types::{HeirCategory, HeirCounts, HeirShare, InheritanceInput, InheritanceResult, ShareFraction};
