use crate::cache::{cache_key, FreshnessCache, CACHE_TTL};
use crate::errors::CoreError;
use crate::models::holding::Exchange;
use crate::models::market::{Fundamentals, Quote, EARNINGS_NOT_AVAILABLE};
use crate::providers::google::GoogleFundamentalsProvider;
use crate::providers::synthetic;
use crate::providers::traits::{FundamentalsProvider, QuoteProvider};
use crate::providers::yahoo::YahooQuoteProvider;

/// Cache key prefixes, one per provider kind so entries never collide.
const QUOTE_KIND: &str = "yahoo";
const FUNDAMENTALS_KIND: &str = "google";

/// Fetches quotes and fundamentals through the freshness cache, with
/// synthetic fallback on any upstream failure.
///
/// Both operations are infallible by design: a network error, a
/// malformed response or a missing field all degrade to deterministic
/// synthetic data, which is cached and returned exactly like a real
/// value. Callers cannot distinguish the two — an explicit design
/// choice that lets the system run fully offline.
pub struct MarketDataService {
    quotes: Box<dyn QuoteProvider>,
    fundamentals: Box<dyn FundamentalsProvider>,
    quote_cache: FreshnessCache<Quote>,
    fundamentals_cache: FreshnessCache<Fundamentals>,
}

impl MarketDataService {
    /// Wire up the live Yahoo/Google providers with the default TTL.
    pub fn new() -> Result<Self, CoreError> {
        Ok(Self::with_providers(
            Box::new(YahooQuoteProvider::new()?),
            Box::new(GoogleFundamentalsProvider::new()),
        ))
    }

    /// Inject custom providers (used by tests and alternative upstreams).
    pub fn with_providers(
        quotes: Box<dyn QuoteProvider>,
        fundamentals: Box<dyn FundamentalsProvider>,
    ) -> Self {
        Self {
            quotes,
            fundamentals,
            quote_cache: FreshnessCache::new(CACHE_TTL),
            fundamentals_cache: FreshnessCache::new(CACHE_TTL),
        }
    }

    /// Current market price for a symbol, real or synthetic.
    ///
    /// 1. Fresh cache entry → return it.
    /// 2. Otherwise fetch upstream; validate the price is finite and
    ///    non-negative.
    /// 3. On any failure, synthesize a deterministic price instead.
    /// 4. Cache whatever was produced, stamped now, then return it.
    pub async fn current_price(&self, symbol: &str, exchange: Exchange) -> Quote {
        let key = cache_key(QUOTE_KIND, exchange, symbol);
        if let Some(quote) = self.quote_cache.get(&key) {
            return quote;
        }

        let price = match self.quotes.fetch_price(symbol, exchange).await {
            Ok(price) if price.is_finite() && price >= 0.0 => price,
            Ok(price) => {
                tracing::warn!(
                    provider = self.quotes.name(),
                    symbol,
                    price,
                    "upstream returned an invalid price, using synthetic fallback"
                );
                synthetic::price(symbol)
            }
            Err(e) => {
                tracing::warn!(
                    provider = self.quotes.name(),
                    symbol,
                    error = %e,
                    "quote fetch failed, using synthetic fallback"
                );
                synthetic::price(symbol)
            }
        };

        let quote = Quote {
            symbol: symbol.to_string(),
            price,
        };
        self.quote_cache.put(key, quote.clone());
        quote
    }

    /// P/E ratio and latest-earnings label for a symbol.
    ///
    /// Partial extraction is allowed: either field may come back absent
    /// without triggering the fallback. Only a transport failure or a
    /// page yielding neither field synthesizes fundamentals.
    pub async fn fundamentals(&self, symbol: &str, exchange: Exchange) -> Fundamentals {
        let key = cache_key(FUNDAMENTALS_KIND, exchange, symbol);
        if let Some(fundamentals) = self.fundamentals_cache.get(&key) {
            return fundamentals;
        }

        let fundamentals = match self.fundamentals.fetch_fundamentals(symbol, exchange).await {
            Ok(fields) if !fields.is_empty() => Fundamentals {
                symbol: symbol.to_string(),
                pe_ratio: fields.pe_ratio,
                latest_earnings: fields
                    .earnings_date
                    .unwrap_or_else(|| EARNINGS_NOT_AVAILABLE.to_string()),
            },
            Ok(_) => {
                tracing::debug!(
                    provider = self.fundamentals.name(),
                    symbol,
                    "no fundamentals fields in markup, using synthetic fallback"
                );
                Self::synthetic_fundamentals(symbol)
            }
            Err(e) => {
                tracing::warn!(
                    provider = self.fundamentals.name(),
                    symbol,
                    error = %e,
                    "fundamentals fetch failed, using synthetic fallback"
                );
                Self::synthetic_fundamentals(symbol)
            }
        };

        self.fundamentals_cache.put(key, fundamentals.clone());
        fundamentals
    }

    fn synthetic_fundamentals(symbol: &str) -> Fundamentals {
        Fundamentals {
            symbol: symbol.to_string(),
            pe_ratio: Some(synthetic::pe_ratio(symbol)),
            latest_earnings: synthetic::earnings_date(),
        }
    }
}
