//! Mizan API Server
//!
//! Main entry point for the Zakat and inheritance calculator service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mizan_api::{AppState, create_router};
use mizan_shared::{AppConfig, GoldPriceClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mizan=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    let gold_prices = GoldPriceClient::new(&config.gold_price)?;
    if gold_prices.is_configured() {
        info!("Gold price feed configured");
    } else {
        warn!(
            fallback = %gold_prices.fallback_price().per_ten_grams(),
            "No gold price feed configured, quotes will use the fallback price"
        );
    }

    let state = AppState {
        zakat_params: config.zakat,
        gold_prices: Arc::new(gold_prices),
    };

    let app = create_router(state);

    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
