use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::holding::Exchange;

/// Partially extracted fundamentals, before any fallback is applied.
/// Both fields are pulled out of the upstream markup independently;
/// either may be missing without the fetch as a whole failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FundamentalsFields {
    pub pe_ratio: Option<f64>,
    pub earnings_date: Option<String>,
}

impl FundamentalsFields {
    /// True when neither field could be extracted.
    pub fn is_empty(&self) -> bool {
        self.pe_ratio.is_none() && self.earnings_date.is_none()
    }
}

/// Trait abstraction for the live quote upstream (Dependency Inversion).
///
/// Implementations fetch raw data and return errors freely; the
/// never-fails guarantee (synthetic fallback, caching) lives one layer
/// up in `MarketDataService`, so a provider can be swapped out without
/// touching the fallback policy.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the current market price for a symbol on an exchange.
    async fn fetch_price(&self, symbol: &str, exchange: Exchange) -> Result<f64, CoreError>;
}

/// Trait abstraction for the fundamentals upstream.
#[async_trait]
pub trait FundamentalsProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch P/E ratio and latest-earnings label for a symbol.
    /// A field missing from the markup is a normal miss (`None`),
    /// not an error; only transport/HTTP failures return `Err`.
    async fn fetch_fundamentals(
        &self,
        symbol: &str,
        exchange: Exchange,
    ) -> Result<FundamentalsFields, CoreError>;
}
