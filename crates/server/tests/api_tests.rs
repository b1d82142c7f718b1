// ═══════════════════════════════════════════════════════════════════
// API Tests — routing, envelopes and status codes over mock upstreams
// ═══════════════════════════════════════════════════════════════════

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use equity_tracker_core::errors::CoreError;
use equity_tracker_core::models::holding::{default_holdings, Exchange};
use equity_tracker_core::providers::traits::{
    FundamentalsFields, FundamentalsProvider, QuoteProvider,
};
use equity_tracker_core::services::market_data::MarketDataService;
use equity_tracker_core::EquityTracker;
use equity_tracker_server::app;

struct OfflineQuoteProvider;

#[async_trait]
impl QuoteProvider for OfflineQuoteProvider {
    fn name(&self) -> &str {
        "OfflineQuotes"
    }

    async fn fetch_price(&self, symbol: &str, _exchange: Exchange) -> Result<f64, CoreError> {
        Err(CoreError::Network(format!("offline: {symbol}")))
    }
}

struct OfflineFundamentalsProvider;

#[async_trait]
impl FundamentalsProvider for OfflineFundamentalsProvider {
    fn name(&self) -> &str {
        "OfflineFundamentals"
    }

    async fn fetch_fundamentals(
        &self,
        symbol: &str,
        _exchange: Exchange,
    ) -> Result<FundamentalsFields, CoreError> {
        Err(CoreError::Network(format!("offline: {symbol}")))
    }
}

fn test_app() -> axum::Router {
    let tracker = Arc::new(EquityTracker::with_market_data(
        default_holdings(),
        Arc::new(MarketDataService::with_providers(
            Box::new(OfflineQuoteProvider),
            Box::new(OfflineFundamentalsProvider),
        )),
    ));
    app(tracker, None)
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn portfolio_snapshot_succeeds_even_fully_offline() {
    let (status, body) = get_json("/api/portfolio").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let data = &body["data"];
    assert_eq!(data["holdings"].as_array().unwrap().len(), 8);
    assert!(data["totalInvestment"].as_f64().unwrap() > 0.0);
    // Synthetic fallback: every holding still has a present value.
    for h in data["holdings"].as_array().unwrap() {
        assert!(h["presentValue"].as_f64().is_some());
    }
}

#[tokio::test]
async fn stocks_endpoint_lists_all_holdings() {
    let (status, body) = get_json("/api/portfolio/stocks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn stock_by_symbol_returns_the_holding() {
    let (status, body) = get_json("/api/portfolio/stocks/RELIANCE").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["symbol"], "RELIANCE");
    assert_eq!(body["data"]["sector"], "Energy");
}

#[tokio::test]
async fn unknown_symbol_is_not_found() {
    let (status, body) = get_json("/api/portfolio/stocks/NOSUCH").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Stock not found");
}

#[tokio::test]
async fn blank_symbol_is_a_client_error() {
    let (status, body) = get_json("/api/portfolio/stocks/%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Symbol parameter is required");
}
