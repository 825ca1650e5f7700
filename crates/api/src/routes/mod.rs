//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod calculators;
pub mod gold_price;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(gold_price::routes())
        .merge(calculators::routes())
}
