//! Shared errors, configuration, and price feed client for Mizan.
//!
//! This crate provides the pieces used by the HTTP layer and the server binary:
//! - Application-wide error types
//! - Configuration management
//! - The gold price feed client

pub mod config;
pub mod error;
pub mod gold_price;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use gold_price::{GoldPriceClient, GoldPriceConfig, GoldPriceError};
