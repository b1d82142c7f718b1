pub mod cache;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use std::sync::Arc;

use errors::CoreError;
use models::holding::{default_holdings, Holding};
use models::snapshot::PortfolioSnapshot;
use services::aggregation;
use services::enrichment::EnrichmentService;
use services::market_data::MarketDataService;

/// Main entry point for the Equity Tracker core library.
/// Holds the fixed holding list and the services needed to value it.
///
/// Holdings are immutable reference data created at construction; every
/// market-dependent number is recomputed per [`snapshot`](Self::snapshot)
/// call. Nothing is persisted — the only caching is the short-TTL
/// quote/fundamentals cache inside [`MarketDataService`].
#[must_use]
pub struct EquityTracker {
    holdings: Vec<Holding>,
    enrichment: EnrichmentService,
}

impl std::fmt::Debug for EquityTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EquityTracker")
            .field("holdings", &self.holdings.len())
            .finish()
    }
}

impl EquityTracker {
    /// Create a tracker over the default seed portfolio, wired to the
    /// live Yahoo/Google upstreams.
    pub fn new() -> Result<Self, CoreError> {
        Self::with_holdings(default_holdings())
    }

    /// Create a tracker over a custom holding list, wired to the live
    /// upstreams.
    pub fn with_holdings(holdings: Vec<Holding>) -> Result<Self, CoreError> {
        Ok(Self::with_market_data(
            holdings,
            Arc::new(MarketDataService::new()?),
        ))
    }

    /// Create a tracker with an injected market-data service (custom
    /// providers, tests).
    pub fn with_market_data(holdings: Vec<Holding>, market_data: Arc<MarketDataService>) -> Self {
        Self {
            holdings,
            enrichment: EnrichmentService::new(market_data),
        }
    }

    // ── Portfolio retrieval ─────────────────────────────────────────

    /// Compute a fresh portfolio snapshot: fan out quote + fundamentals
    /// retrieval across all holdings, then aggregate.
    ///
    /// Always succeeds with best-effort data — the adapters substitute
    /// synthetic values for anything the upstreams cannot provide.
    pub async fn snapshot(&self) -> PortfolioSnapshot {
        let enriched = self.enrichment.enrich(&self.holdings).await;
        aggregation::aggregate(enriched)
    }

    /// All holdings, in their fixed configuration order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Look up a single holding by symbol (case-insensitive).
    ///
    /// A blank symbol is a client error (`InvalidSymbol`); an unknown
    /// one is a not-found condition (`HoldingNotFound`), never a fault.
    pub fn holding(&self, symbol: &str) -> Result<&Holding, CoreError> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidSymbol);
        }
        self.holdings
            .iter()
            .find(|h| h.symbol.eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::HoldingNotFound(trimmed.to_string()))
    }
}
