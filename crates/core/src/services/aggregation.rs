use std::collections::HashMap;

use crate::models::snapshot::{EnrichedHolding, PortfolioSnapshot, SectorRollup};

/// Sector bucket for holdings with no sector label.
const DEFAULT_SECTOR: &str = "Others";

/// Compute the full portfolio snapshot from enriched holdings.
///
/// Pure, synchronous and deterministic — no I/O, no retries. A failure
/// here would indicate a logic defect, not a runtime condition.
///
/// Derivations:
/// - portfolio share = investment / total investment × 100, or 0 for
///   every holding when total investment is 0 (divide-by-zero guard);
/// - present value = current price × quantity, absent iff no price;
/// - gain/loss = present value − investment, absent under the same
///   condition;
/// - sector rollups sum their constituents and are ordered by
///   descending total investment, stable on ties (input order).
pub fn aggregate(holdings: Vec<EnrichedHolding>) -> PortfolioSnapshot {
    let total_investment: f64 = holdings.iter().map(|h| h.holding.investment).sum();

    let holdings: Vec<EnrichedHolding> = holdings
        .into_iter()
        .map(|mut enriched| {
            enriched.portfolio_percent = if total_investment > 0.0 {
                (enriched.holding.investment / total_investment) * 100.0
            } else {
                0.0
            };
            enriched.present_value = enriched
                .current_price
                .map(|price| price * enriched.holding.quantity);
            enriched.gain_loss = enriched
                .present_value
                .map(|value| value - enriched.holding.investment);
            enriched
        })
        .collect();

    let sectors = rollup_sectors(&holdings);

    let total_present_value: f64 = holdings
        .iter()
        .filter_map(|h| h.present_value)
        .sum();
    let total_gain_loss = total_present_value - total_investment;

    PortfolioSnapshot {
        holdings,
        sectors,
        total_investment,
        total_present_value,
        total_gain_loss,
    }
}

/// Group holdings by sector label, preserving first-seen input order so
/// the final descending sort stays stable on equal totals.
fn rollup_sectors(holdings: &[EnrichedHolding]) -> Vec<SectorRollup> {
    let mut rollups: Vec<SectorRollup> = Vec::new();
    let mut index_by_sector: HashMap<String, usize> = HashMap::new();

    for enriched in holdings {
        let sector = if enriched.holding.sector.trim().is_empty() {
            DEFAULT_SECTOR.to_string()
        } else {
            enriched.holding.sector.clone()
        };

        let idx = *index_by_sector.entry(sector.clone()).or_insert_with(|| {
            rollups.push(SectorRollup {
                sector,
                total_investment: 0.0,
                total_present_value: 0.0,
                gain_loss: 0.0,
                holdings: Vec::new(),
            });
            rollups.len() - 1
        });

        let rollup = &mut rollups[idx];
        rollup.total_investment += enriched.holding.investment;
        rollup.total_present_value += enriched.present_value.unwrap_or(0.0);
        rollup.holdings.push(enriched.clone());
    }

    for rollup in &mut rollups {
        rollup.gain_loss = rollup.total_present_value - rollup.total_investment;
    }

    // Vec::sort_by is stable: equal totals keep first-seen order.
    rollups.sort_by(|a, b| {
        b.total_investment
            .partial_cmp(&a.total_investment)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    rollups
}
