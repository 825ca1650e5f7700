//! Application-wide error types.

use mizan_core::InheritanceError;
use thiserror::Error;

use crate::gold_price::GoldPriceError;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request could not be understood.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Inputs were well-formed but the calculation cannot proceed.
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// External service error.
    #[error("External service error: {0}")]
    ExternalService(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::BusinessRule(_) => 422,
            Self::ExternalService(_) => 502,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::BusinessRule(_) => "business_rule_violation",
            Self::ExternalService(_) => "external_service_error",
        }
    }
}

impl From<InheritanceError> for AppError {
    fn from(err: InheritanceError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}

impl From<GoldPriceError> for AppError {
    fn from(err: GoldPriceError) -> Self {
        Self::ExternalService(err.to_string())
    }
}
