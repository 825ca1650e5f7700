//! Gold price quote routes.

use axum::{Json, Router, extract::State, routing::get};
use chrono::Utc;
use mizan_core::{GoldQuote, PriceSource};
use serde::Serialize;

use crate::{AppState, error::ApiError, format_amount};

/// Creates the gold price routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/gold-price", get(get_gold_price))
        .route("/gold-price/live", get(get_live_gold_price))
}

/// Response for a gold price quote.
#[derive(Debug, Serialize)]
pub struct GoldPriceResponse {
    /// Price per ten grams.
    pub price_per_ten_grams: String,
    /// Price per gram.
    pub price_per_gram: String,
    /// `live`, `fallback` or `supplied`.
    pub source: PriceSource,
    /// When the quote was produced (RFC 3339).
    pub fetched_at: String,
}

impl From<GoldQuote> for GoldPriceResponse {
    fn from(quote: GoldQuote) -> Self {
        Self {
            price_per_ten_grams: format_amount(quote.price.per_ten_grams()),
            price_per_gram: format_amount(quote.price.per_gram()),
            source: quote.source,
            fetched_at: quote.fetched_at.to_rfc3339(),
        }
    }
}

/// GET `/gold-price` - Current quote, falling back when the feed is down.
async fn get_gold_price(State(state): State<AppState>) -> Json<GoldPriceResponse> {
    Json(state.gold_prices.quote().await.into())
}

/// GET `/gold-price/live` - Current quote from the feed only.
async fn get_live_gold_price(
    State(state): State<AppState>,
) -> Result<Json<GoldPriceResponse>, ApiError> {
    let price = state.gold_prices.fetch().await?;
    Ok(Json(GoldQuote::live(price, Utc::now()).into()))
}
