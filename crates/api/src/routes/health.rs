//! Health check endpoints.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// `"configured"` when a live gold price feed is set up, else `"fallback_only"`.
    pub gold_price_feed: &'static str,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let gold_price_feed = if state.gold_prices.is_configured() {
        "configured"
    } else {
        "fallback_only"
    };

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        gold_price_feed,
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{get, send, test_app};

    #[tokio::test]
    async fn test_health_reports_fallback_only_feed() {
        let (status, body) = send(test_app(), get("/api/v1/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["gold_price_feed"], "fallback_only");
    }
}
