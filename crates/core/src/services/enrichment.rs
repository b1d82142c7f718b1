use std::sync::Arc;

use tokio::task::JoinSet;

use crate::models::holding::Holding;
use crate::models::snapshot::EnrichedHolding;
use crate::services::market_data::MarketDataService;

/// Fans quote + fundamentals retrieval out across all holdings.
///
/// All holdings are processed concurrently, and within one holding the
/// two adapter calls run concurrently with each other, so the wall-clock
/// bound is roughly one slowest adapter call rather than the sum.
pub struct EnrichmentService {
    market_data: Arc<MarketDataService>,
}

impl EnrichmentService {
    pub fn new(market_data: Arc<MarketDataService>) -> Self {
        Self { market_data }
    }

    /// Enrich every holding with market data.
    ///
    /// Output order always matches input order: each task carries its
    /// input index and results are joined back by index, never appended
    /// in completion order. The adapters already guarantee a value for
    /// every call, so a missing result only happens if a task itself
    /// fails (a programming error); that holding then degrades to its
    /// unenriched base instead of failing the batch.
    pub async fn enrich(&self, holdings: &[Holding]) -> Vec<EnrichedHolding> {
        let mut tasks = JoinSet::new();

        for (index, holding) in holdings.iter().cloned().enumerate() {
            let market_data = Arc::clone(&self.market_data);
            tasks.spawn(async move {
                let (quote, fundamentals) = tokio::join!(
                    market_data.current_price(&holding.symbol, holding.exchange),
                    market_data.fundamentals(&holding.symbol, holding.exchange),
                );

                let enriched = EnrichedHolding {
                    current_price: Some(quote.price),
                    pe_ratio: fundamentals.pe_ratio,
                    latest_earnings: Some(fundamentals.latest_earnings),
                    ..EnrichedHolding::base(holding)
                };
                (index, enriched)
            });
        }

        let mut slots: Vec<Option<EnrichedHolding>> = vec![None; holdings.len()];
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok((index, enriched)) => slots[index] = Some(enriched),
                Err(e) => {
                    tracing::error!(error = %e, "enrichment task failed");
                }
            }
        }

        slots
            .into_iter()
            .zip(holdings.iter())
            .map(|(slot, holding)| slot.unwrap_or_else(|| EnrichedHolding::base(holding.clone())))
            .collect()
    }
}
