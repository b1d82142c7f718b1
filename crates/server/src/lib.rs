use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use equity_tracker_core::errors::CoreError;
use equity_tracker_core::models::holding::Holding;
use equity_tracker_core::models::snapshot::PortfolioSnapshot;
use equity_tracker_core::EquityTracker;

/// Uniform response envelope for every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

type ErrorReply = (StatusCode, Json<ApiResponse<()>>);

fn error_reply(status: StatusCode, message: &str, error: impl Into<String>) -> ErrorReply {
    (status, Json(ApiResponse::failure(message, error)))
}

/// Build the application router over a shared tracker.
pub fn app(tracker: Arc<EquityTracker>, cors_origin: Option<HeaderValue>) -> Router {
    let cors = match cors_origin {
        Some(origin) => CorsLayer::new().allow_origin(origin),
        None => CorsLayer::permissive(),
    };

    Router::new()
        .route("/health", get(health))
        .route("/api/portfolio", get(get_portfolio))
        .route("/api/portfolio/stocks", get(get_all_stocks))
        .route("/api/portfolio/stocks/:symbol", get(get_stock_by_symbol))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(tracker)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "message": "Server is running" }))
}

/// Full portfolio snapshot. Enrichment always produces best-effort data
/// (real or synthetic); only an internal defect during aggregation can
/// fail this, surfaced as a single generic 500 with no partial data.
async fn get_portfolio(
    State(tracker): State<Arc<EquityTracker>>,
) -> Result<Json<ApiResponse<PortfolioSnapshot>>, ErrorReply> {
    let task = tokio::spawn(async move { tracker.snapshot().await });
    match task.await {
        Ok(snapshot) => Ok(Json(ApiResponse::success(
            snapshot,
            "Portfolio data fetched successfully",
        ))),
        Err(e) => {
            tracing::error!(error = %e, "portfolio snapshot failed");
            Err(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch portfolio data",
                "Internal server error",
            ))
        }
    }
}

async fn get_all_stocks(
    State(tracker): State<Arc<EquityTracker>>,
) -> Json<ApiResponse<Vec<Holding>>> {
    let stocks = tracker.holdings().to_vec();
    Json(ApiResponse::success(stocks, "Stocks fetched successfully"))
}

async fn get_stock_by_symbol(
    State(tracker): State<Arc<EquityTracker>>,
    Path(symbol): Path<String>,
) -> Result<Json<ApiResponse<Holding>>, ErrorReply> {
    match tracker.holding(&symbol) {
        Ok(holding) => Ok(Json(ApiResponse::success(
            holding.clone(),
            "Stock fetched successfully",
        ))),
        Err(CoreError::InvalidSymbol) => Err(error_reply(
            StatusCode::BAD_REQUEST,
            "Invalid request",
            "Symbol parameter is required",
        )),
        Err(CoreError::HoldingNotFound(symbol)) => Err(error_reply(
            StatusCode::NOT_FOUND,
            format!("No stock found with symbol: {symbol}").as_str(),
            "Stock not found",
        )),
        Err(e) => {
            tracing::error!(error = %e, "stock lookup failed");
            Err(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch stock",
                "Internal server error",
            ))
        }
    }
}

/// Bind and serve the API until the process is stopped.
pub async fn run_server() -> anyhow::Result<()> {
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);
    let cors_origin = std::env::var("CORS_ORIGIN")
        .ok()
        .and_then(|o| o.parse::<HeaderValue>().ok());

    let tracker = Arc::new(EquityTracker::new()?);
    let router = app(tracker, cors_origin);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Equity Tracker API listening on port {port}");
    axum::serve(listener, router).await?;
    Ok(())
}
