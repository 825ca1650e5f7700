//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes for the Zakat and inheritance calculators
//! - Gold price quote routes
//! - Request extractors and error responses

pub mod error;
pub mod extractors;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use mizan_core::ZakatParams;
use mizan_shared::GoldPriceClient;
use rust_decimal::Decimal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Zakat constants from configuration.
    pub zakat_params: ZakatParams,
    /// Gold price feed client.
    pub gold_prices: Arc<GoldPriceClient>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Renders an amount as a JSON string without trailing zeros.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}
