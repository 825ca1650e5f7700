//! Calculator routes.
//!
//! Both calculators accept loosely typed form fields (strings, numbers or
//! booleans) and sanitize them before running the engines.

use axum::{Json, Router, extract::State, routing::post};
use chrono::Utc;
use mizan_core::{
    GoldPrice, GoldQuote, PriceSource, compute_inheritance, compute_zakat,
    inheritance::HeirShare,
    input::{RawInheritanceInput, RawZakatInput, parse_amount},
    zakat::NisabBasis,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppState, error::ApiError, extractors::JsonBody, format_amount};

/// Decimal places used for the rounded share amounts.
const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Creates the calculator routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/calculators/zakat", post(calculate_zakat))
        .route("/calculators/inheritance", post(calculate_inheritance))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// A form field as sent by a client.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    /// Free text, e.g. `"1500.50"`.
    Text(String),
    /// JSON number.
    Number(serde_json::Number),
    /// Checkbox value; `true` counts as 1.
    Flag(bool),
}

impl RawField {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
            Self::Flag(flag) => String::from(if flag { "1" } else { "0" }),
        }
    }
}

fn text(field: Option<RawField>) -> String {
    field.map(RawField::into_text).unwrap_or_default()
}

/// Request body for the Zakat calculator.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ZakatRequest {
    /// Gold in grams.
    pub gold: Option<RawField>,
    /// Silver in grams.
    pub silver: Option<RawField>,
    /// Cash on hand.
    pub cash: Option<RawField>,
    /// Investments.
    pub investments: Option<RawField>,
    /// Outstanding debts.
    pub debts: Option<RawField>,
    /// Gold price per ten grams. When missing or not positive the current
    /// quote is used.
    pub gold_price_per_ten_grams: Option<RawField>,
}

/// Response for the Zakat calculator.
#[derive(Debug, Serialize)]
pub struct ZakatResponse {
    /// Value of the gold holding.
    pub gold_value: String,
    /// Value of the silver holding.
    pub silver_value: String,
    /// Cash on hand.
    pub cash: String,
    /// Investments.
    pub investments: String,
    /// Assets minus debts.
    pub total_wealth: String,
    /// Applied Nisab threshold.
    pub nisab_threshold: String,
    /// Metal that produced the threshold.
    pub nisab_basis: NisabBasis,
    /// Zakat payable.
    pub zakat_due: String,
    /// Whether wealth reached the threshold.
    pub is_due: bool,
    /// Gold price the calculation used.
    pub gold_price_per_ten_grams: String,
    /// Where that price came from.
    pub gold_price_source: PriceSource,
}

/// Request body for the inheritance calculator.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InheritanceRequest {
    /// Gross estate.
    pub total_wealth: Option<RawField>,
    /// Debts of the deceased.
    pub debts: Option<RawField>,
    /// Surviving spouse (0/1).
    pub spouse: Option<RawField>,
    /// Number of sons.
    pub sons: Option<RawField>,
    /// Number of daughters.
    pub daughters: Option<RawField>,
    /// Surviving father (0/1).
    pub father: Option<RawField>,
    /// Surviving mother (0/1).
    pub mother: Option<RawField>,
}

impl From<InheritanceRequest> for RawInheritanceInput {
    fn from(req: InheritanceRequest) -> Self {
        Self {
            total_wealth: text(req.total_wealth),
            debts: text(req.debts),
            spouse: text(req.spouse),
            sons: text(req.sons),
            daughters: text(req.daughters),
            father: text(req.father),
            mother: text(req.mother),
        }
    }
}

/// One line item of the distribution.
#[derive(Debug, Serialize)]
pub struct HeirShareResponse {
    /// Heir category.
    pub category: String,
    /// Display label, e.g. `"Sons (2)"`.
    pub label: String,
    /// Number of heirs in the category.
    pub count: u32,
    /// Exact aggregate amount.
    pub amount: String,
    /// Amount rounded to cents; rounded amounts sum to the rounded total.
    pub rounded_amount: String,
    /// Each heir's part of the rounded amount, split evenly to the cent.
    pub per_heir_amounts: Vec<String>,
}

/// Response for the inheritance calculator.
#[derive(Debug, Serialize)]
pub struct InheritanceResponse {
    /// Gross estate.
    pub total_wealth: String,
    /// Debts.
    pub debts: String,
    /// Estate after debts.
    pub net_wealth: String,
    /// Sum of all shares.
    pub distributed: String,
    /// Residue not assigned to any heir.
    pub unallocated: String,
    /// Line items in computation order.
    pub shares: Vec<HeirShareResponse>,
}

fn share_response(exact: &HeirShare, rounded: &HeirShare) -> HeirShareResponse {
    HeirShareResponse {
        category: exact.category.to_string().to_lowercase(),
        label: exact.label(),
        count: exact.count,
        amount: format_amount(exact.amount),
        rounded_amount: format_amount(rounded.amount),
        per_heir_amounts: rounded
            .per_heir(DISPLAY_DECIMAL_PLACES)
            .into_iter()
            .map(format_amount)
            .collect(),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST `/calculators/zakat`
async fn calculate_zakat(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ZakatRequest>,
) -> Json<ZakatResponse> {
    let supplied = req
        .gold_price_per_ten_grams
        .map(RawField::into_text)
        .and_then(|raw| GoldPrice::from_per_ten_grams(parse_amount(&raw)));

    let quote = match supplied {
        Some(price) => GoldQuote::supplied(price, Utc::now()),
        None => state.gold_prices.quote().await,
    };

    let raw = RawZakatInput {
        gold: text(req.gold),
        silver: text(req.silver),
        cash: text(req.cash),
        investments: text(req.investments),
        debts: text(req.debts),
    };
    let result = compute_zakat(&raw.sanitize(quote.price), &state.zakat_params);

    info!(
        calculator = "zakat",
        total_wealth = %result.total_wealth,
        zakat_due = %result.zakat_due,
        price_source = ?quote.source,
        "Calculation completed"
    );

    Json(ZakatResponse {
        gold_value: format_amount(result.gold_value),
        silver_value: format_amount(result.silver_value),
        cash: format_amount(result.cash),
        investments: format_amount(result.investments),
        total_wealth: format_amount(result.total_wealth),
        nisab_threshold: format_amount(result.nisab_threshold),
        nisab_basis: result.nisab_basis,
        zakat_due: format_amount(result.zakat_due),
        is_due: result.is_due(),
        gold_price_per_ten_grams: format_amount(quote.price.per_ten_grams()),
        gold_price_source: quote.source,
    })
}

/// POST `/calculators/inheritance`
async fn calculate_inheritance(
    JsonBody(req): JsonBody<InheritanceRequest>,
) -> Result<Json<InheritanceResponse>, ApiError> {
    let input = RawInheritanceInput::from(req).sanitize();
    let result = compute_inheritance(&input)?;

    info!(
        calculator = "inheritance",
        net_wealth = %result.net_wealth,
        heir_lines = result.shares.len(),
        "Calculation completed"
    );

    let rounded = result.rounded(DISPLAY_DECIMAL_PLACES);
    let shares = result
        .shares
        .iter()
        .zip(&rounded)
        .map(|(exact, rounded)| share_response(exact, rounded))
        .collect();

    Ok(Json(InheritanceResponse {
        total_wealth: format_amount(result.total_wealth),
        debts: format_amount(result.debts),
        net_wealth: format_amount(result.net_wealth),
        distributed: format_amount(result.distributed()),
        unallocated: format_amount(result.unallocated()),
        shares,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use serde_json::json;

    use crate::routes::test_support::{post_json, send, test_app, test_app_with_feed};

    #[tokio::test]
    async fn test_zakat_uses_fallback_price() {
        let (status, body) = send(
            test_app(),
            post_json("/api/v1/calculators/zakat", r#"{"gold": "100"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["gold_value"], "68500");
        assert_eq!(body["zakat_due"], "1712.5");
        assert_eq!(body["is_due"], true);
        assert_eq!(body["gold_price_per_ten_grams"], "6850");
        assert_eq!(body["gold_price_source"], "fallback");
    }

    #[tokio::test]
    async fn test_zakat_with_supplied_price() {
        let (status, body) = send(
            test_app(),
            post_json(
                "/api/v1/calculators/zakat",
                r#"{"cash": 50000, "gold_price_per_ten_grams": "5000"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["nisab_threshold"], "43740");
        assert_eq!(body["nisab_basis"], "gold");
        assert_eq!(body["zakat_due"], "1250");
        assert_eq!(body["gold_price_source"], "supplied");
    }

    #[tokio::test]
    async fn test_zakat_garbage_fields_count_as_zero() {
        let (status, body) = send(
            test_app(),
            post_json(
                "/api/v1/calculators/zakat",
                r#"{"cash": "lots", "debts": "-5", "gold_price_per_ten_grams": "-1"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_wealth"], "0");
        assert_eq!(body["zakat_due"], "0");
        assert_eq!(body["is_due"], false);
        assert_eq!(body["gold_price_source"], "fallback");
    }

    #[tokio::test]
    async fn test_inheritance_distribution() {
        let (status, body) = send(
            test_app(),
            post_json(
                "/api/v1/calculators/inheritance",
                r#"{"total_wealth": "1200000", "spouse": true, "sons": 2, "daughters": "1"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["net_wealth"], "1200000");
        assert_eq!(body["unallocated"], "0");

        let shares = body["shares"].as_array().unwrap();
        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0]["label"], "Spouse");
        assert_eq!(shares[0]["amount"], "150000");
        assert_eq!(shares[1]["label"], "Daughters (1)");
        assert_eq!(shares[1]["amount"], "210000");
        assert_eq!(shares[2]["category"], "sons");
        assert_eq!(shares[2]["count"], 2);
        assert_eq!(shares[2]["rounded_amount"], "840000");
        assert_eq!(shares[2]["per_heir_amounts"], json!(["420000", "420000"]));
    }

    #[tokio::test]
    async fn test_inheritance_per_heir_amounts_split_to_the_cent() {
        let (status, body) = send(
            test_app(),
            post_json("/api/v1/calculators/inheritance", r#"{"total_wealth": 100, "daughters": 3}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["shares"][0]["per_heir_amounts"],
            json!(["33.34", "33.33", "33.33"])
        );
    }

    #[tokio::test]
    async fn test_zakat_uses_live_feed_price() {
        let app = test_app_with_feed(json!({ "price_gram_24k": 500 })).await;
        let (status, body) = send(
            app,
            post_json("/api/v1/calculators/zakat", r#"{"cash": "50000"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["gold_price_per_ten_grams"], "5000");
        assert_eq!(body["gold_price_source"], "live");
        assert_eq!(body["zakat_due"], "1250");
    }

    #[tokio::test]
    async fn test_zakat_oversized_feed_price_falls_back() {
        let app = test_app_with_feed(json!({ "price_gram_24k": 1e20 })).await;
        let (status, body) = send(
            app,
            post_json("/api/v1/calculators/zakat", r#"{"gold": "1000000000000"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["gold_price_source"], "fallback");
        assert_eq!(body["gold_price_per_ten_grams"], "6850");
        assert_eq!(body["gold_value"], "685000000000000");
    }

    #[tokio::test]
    async fn test_inheritance_insufficient_estate() {
        let (status, body) = send(
            test_app(),
            post_json(
                "/api/v1/calculators/inheritance",
                r#"{"total_wealth": "1000", "debts": "1500", "sons": "1"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "business_rule_violation");
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let (status, body) = send(
            test_app(),
            post_json("/api/v1/calculators/inheritance", "{not json"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
    }
}
