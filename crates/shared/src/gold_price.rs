//! Gold price feed client.
//!
//! Talks to a GoldAPI-compatible endpoint: `GET <api_url>` with an
//! `x-access-token` header, answering JSON with `price_gram_24k` (per gram).
//! The calculators need the price per ten grams, so the quote is scaled.

use std::time::Duration;

use chrono::Utc;
use mizan_core::{GoldPrice, GoldQuote};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Gold price feed configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldPriceConfig {
    /// Feed URL. When absent only the fallback price is served.
    #[serde(default)]
    pub api_url: Option<String>,
    /// Access token sent as `x-access-token`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Price per ten grams used when the feed is unavailable.
    #[serde(default = "default_fallback_per_ten_grams")]
    pub fallback_per_ten_grams: Decimal,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GoldPriceConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            fallback_per_ten_grams: default_fallback_per_ten_grams(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_fallback_per_ten_grams() -> Decimal {
    GoldPrice::FALLBACK_PER_TEN_GRAMS
}

fn default_timeout_secs() -> u64 {
    10
}

/// Gold price feed errors.
#[derive(Debug, Error)]
pub enum GoldPriceError {
    /// No feed URL configured.
    #[error("Gold price feed is not configured")]
    NotConfigured,

    /// Transport or decoding failure.
    #[error("Gold price request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Feed answered with a non-success status.
    #[error("Gold price feed returned status {0}")]
    Status(u16),

    /// Feed answered with a missing or out-of-range price.
    #[error("Gold price feed returned no usable price")]
    InvalidPrice,
}

#[derive(Debug, Deserialize)]
struct GoldApiResponse {
    price_gram_24k: Option<Decimal>,
}

/// Client for the gold price feed.
#[derive(Debug, Clone)]
pub struct GoldPriceClient {
    http: reqwest::Client,
    api_url: Option<String>,
    api_key: Option<String>,
    fallback: GoldPrice,
}

impl GoldPriceClient {
    /// Creates a client from configuration.
    ///
    /// An out-of-range configured fallback is replaced by
    /// [`GoldPrice::FALLBACK`].
    pub fn new(config: &GoldPriceConfig) -> Result<Self, GoldPriceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_url: config
                .api_url
                .clone()
                .filter(|url| !url.trim().is_empty()),
            api_key: config.api_key.clone(),
            fallback: GoldPrice::or_fallback(config.fallback_per_ten_grams, GoldPrice::FALLBACK),
        })
    }

    /// Returns true if a feed URL is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_url.is_some()
    }

    /// The price served when the feed is unavailable.
    #[must_use]
    pub const fn fallback_price(&self) -> GoldPrice {
        self.fallback
    }

    /// Fetches the current price from the feed.
    pub async fn fetch(&self) -> Result<GoldPrice, GoldPriceError> {
        let url = self
            .api_url
            .as_deref()
            .ok_or(GoldPriceError::NotConfigured)?;

        let mut request = self.http.get(url);
        if let Some(key) = &self.api_key {
            request = request.header("x-access-token", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GoldPriceError::Status(status.as_u16()));
        }

        let body: GoldApiResponse = response.json().await?;
        body.price_gram_24k
            .and_then(GoldPrice::from_per_gram)
            .ok_or(GoldPriceError::InvalidPrice)
    }

    /// Returns a live quote, or the fallback quote if the feed fails.
    pub async fn quote(&self) -> GoldQuote {
        match self.fetch().await {
            Ok(price) => {
                debug!(price_per_ten_grams = %price.per_ten_grams(), "Fetched gold price");
                GoldQuote::live(price, Utc::now())
            }
            Err(GoldPriceError::NotConfigured) => {
                debug!("Gold price feed not configured, using fallback");
                GoldQuote::fallback(self.fallback, Utc::now())
            }
            Err(e) => {
                warn!(
                    error = %e,
                    fallback = %self.fallback.per_ten_grams(),
                    "Failed to fetch gold price, using fallback"
                );
                GoldQuote::fallback(self.fallback, Utc::now())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::get};
    use mizan_core::PriceSource;
    use rust_decimal_macros::dec;
    use serde_json::{Value, json};

    async fn spawn_feed(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/XAU/INR")
    }

    fn client_for(api_url: Option<String>) -> GoldPriceClient {
        GoldPriceClient::new(&GoldPriceConfig {
            api_url,
            api_key: Some("test-key".to_string()),
            ..GoldPriceConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_unconfigured_feed_serves_fallback() {
        let client = client_for(None);
        assert!(!client.is_configured());
        assert!(matches!(
            client.fetch().await,
            Err(GoldPriceError::NotConfigured)
        ));

        let quote = client.quote().await;
        assert_eq!(quote.source, PriceSource::Fallback);
        assert_eq!(quote.price.per_ten_grams(), dec!(6850));
    }

    #[tokio::test]
    async fn test_blank_url_counts_as_unconfigured() {
        assert!(!client_for(Some("  ".to_string())).is_configured());
    }

    #[tokio::test]
    async fn test_custom_fallback() {
        let client = GoldPriceClient::new(&GoldPriceConfig {
            fallback_per_ten_grams: dec!(7100),
            ..GoldPriceConfig::default()
        })
        .unwrap();
        assert_eq!(client.fallback_price().per_ten_grams(), dec!(7100));

        let invalid = GoldPriceClient::new(&GoldPriceConfig {
            fallback_per_ten_grams: dec!(0),
            ..GoldPriceConfig::default()
        })
        .unwrap();
        assert_eq!(invalid.fallback_price(), GoldPrice::FALLBACK);
    }

    #[tokio::test]
    async fn test_live_price_is_scaled_to_ten_grams() {
        let router = Router::new().route(
            "/XAU/INR",
            get(|headers: HeaderMap| async move {
                if headers.get("x-access-token").and_then(|v| v.to_str().ok()) == Some("test-key")
                {
                    (StatusCode::OK, Json(json!({ "price_gram_24k": 712.5 })))
                } else {
                    (StatusCode::UNAUTHORIZED, Json(Value::Null))
                }
            }),
        );
        let client = client_for(Some(spawn_feed(router).await));

        let quote = client.quote().await;
        assert_eq!(quote.source, PriceSource::Live);
        assert_eq!(quote.price.per_ten_grams(), dec!(7125));
    }

    #[tokio::test]
    async fn test_error_status_falls_back() {
        let router = Router::new().route(
            "/XAU/INR",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let client = client_for(Some(spawn_feed(router).await));

        assert!(matches!(
            client.fetch().await,
            Err(GoldPriceError::Status(503))
        ));
        let quote = client.quote().await;
        assert!(quote.is_fallback());
        assert_eq!(quote.price, GoldPrice::FALLBACK);
    }

    #[tokio::test]
    async fn test_missing_price_is_invalid() {
        let router = Router::new().route(
            "/XAU/INR",
            get(|| async { Json(json!({ "metal": "XAU" })) }),
        );
        let client = client_for(Some(spawn_feed(router).await));

        assert!(matches!(
            client.fetch().await,
            Err(GoldPriceError::InvalidPrice)
        ));
    }

    #[tokio::test]
    async fn test_oversized_price_is_invalid_and_falls_back() {
        let router = Router::new().route(
            "/XAU/INR",
            get(|| async { Json(json!({ "price_gram_24k": 1e20 })) }),
        );
        let client = client_for(Some(spawn_feed(router).await));

        assert!(matches!(
            client.fetch().await,
            Err(GoldPriceError::InvalidPrice)
        ));
        let quote = client.quote().await;
        assert!(quote.is_fallback());
        assert_eq!(quote.price, GoldPrice::FALLBACK);
    }
}
