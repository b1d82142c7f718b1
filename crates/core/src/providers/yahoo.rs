use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::holding::Exchange;
use super::traits::QuoteProvider;

/// Yahoo Finance provider for current market prices.
///
/// - **Free**: No API key required.
/// - **Coverage**: Global equities, including NSE/BSE listings via
///   exchange suffixes (`RELIANCE.NS`, `RELIANCE.BO`).
/// - **Data**: The latest regular-market close from the chart endpoint.
///
/// Uses the `yahoo_finance_api` crate which wraps Yahoo Finance's public
/// endpoints (one GET per fetch with a short day-range query). Failures
/// here are absorbed by `MarketDataService`, which substitutes a
/// synthetic price.
pub struct YahooQuoteProvider {
    connector: yahoo_finance_api::YahooConnector,
}

impl YahooQuoteProvider {
    pub fn new() -> Result<Self, CoreError> {
        let connector = yahoo_finance_api::YahooConnector::new()
            .map_err(|e| CoreError::Api {
                provider: "Yahoo Finance".into(),
                message: format!("Failed to create connector: {e}"),
            })?;
        Ok(Self { connector })
    }
}

#[async_trait]
impl QuoteProvider for YahooQuoteProvider {
    fn name(&self) -> &str {
        "Yahoo Finance"
    }

    async fn fetch_price(&self, symbol: &str, exchange: Exchange) -> Result<f64, CoreError> {
        let ticker = exchange.yahoo_symbol(symbol);

        let resp = self
            .connector
            .get_latest_quotes(&ticker, "1d")
            .await
            .map_err(|e| CoreError::Api {
                provider: "Yahoo Finance".into(),
                message: format!("Failed to fetch latest quote for {ticker}: {e}"),
            })?;

        let quote = resp.last_quote().map_err(|e| CoreError::Api {
            provider: "Yahoo Finance".into(),
            message: format!("No quote data for {ticker}: {e}"),
        })?;

        Ok(quote.close)
    }
}
