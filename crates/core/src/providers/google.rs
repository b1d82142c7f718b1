use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::errors::CoreError;
use crate::models::holding::Exchange;
use super::traits::{FundamentalsFields, FundamentalsProvider};

const BASE_URL: &str = "https://www.google.com/finance/quote";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Google Finance provider for P/E ratio and latest-earnings date.
///
/// - **Free**: No API key; scrapes the public quote page.
/// - **Exchange mapping**: `NSE:RELIANCE`, `BOM:RELIANCE`.
/// - **Extraction**: elements tagged `data-field="trailingPE"` and
///   `data-field="earningsDate"`. The page structure may vary, so a
///   missing field is a normal miss, never an error.
///
/// Transport/HTTP failures return `Err` and are absorbed by
/// `MarketDataService` via synthetic fundamentals.
pub struct GoogleFundamentalsProvider {
    client: Client,
}

impl GoogleFundamentalsProvider {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for GoogleFundamentalsProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract P/E ratio and earnings date from a quote page's markup.
/// Each field is located independently; either may be absent.
pub fn parse_fundamentals(html: &str) -> FundamentalsFields {
    let document = Html::parse_document(html);
    let mut fields = FundamentalsFields::default();

    if let Ok(selector) = Selector::parse(r#"[data-field="trailingPE"]"#) {
        for element in document.select(&selector) {
            let text = element.text().collect::<String>();
            if let Ok(parsed) = text.trim().parse::<f64>() {
                fields.pe_ratio = Some(parsed);
            }
        }
    }

    if let Ok(selector) = Selector::parse(r#"[data-field="earningsDate"]"#) {
        for element in document.select(&selector) {
            let text = element.text().collect::<String>();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                fields.earnings_date = Some(trimmed.to_string());
            }
        }
    }

    fields
}

#[async_trait]
impl FundamentalsProvider for GoogleFundamentalsProvider {
    fn name(&self) -> &str {
        "Google Finance"
    }

    async fn fetch_fundamentals(
        &self,
        symbol: &str,
        exchange: Exchange,
    ) -> Result<FundamentalsFields, CoreError> {
        let ticker = exchange.google_symbol(symbol);

        let body = self
            .client
            .get(format!("{BASE_URL}/{ticker}"))
            .query(&[("hl", "en")])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| CoreError::Api {
                provider: "Google Finance".into(),
                message: format!("Quote page for {ticker} returned {e}"),
            })?
            .text()
            .await?;

        Ok(parse_fundamentals(&body))
    }
}
