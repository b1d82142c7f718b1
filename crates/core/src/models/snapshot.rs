use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// A holding merged with whatever market data could be obtained for it.
///
/// Invariant: `present_value` and `gain_loss` are `Some` if and only if
/// `current_price` is `Some`. The derived fields are filled in by the
/// aggregation engine, not by enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedHolding {
    #[serde(flatten)]
    pub holding: Holding,

    /// Current market price (real or synthetic); `None` only when the
    /// enrichment task for this holding failed unexpectedly.
    pub current_price: Option<f64>,

    /// Trailing P/E ratio, when extracted.
    pub pe_ratio: Option<f64>,

    /// Latest earnings date label, when fundamentals were obtained.
    pub latest_earnings: Option<String>,

    /// current_price × quantity
    pub present_value: Option<f64>,

    /// present_value − investment
    pub gain_loss: Option<f64>,

    /// This holding's share of total investment, in percent.
    /// 0 for every holding when total investment is 0.
    pub portfolio_percent: f64,
}

impl EnrichedHolding {
    /// A holding with no market data attached — the degraded form used
    /// when an enrichment task fails.
    pub fn base(holding: Holding) -> Self {
        Self {
            holding,
            current_price: None,
            pe_ratio: None,
            latest_earnings: None,
            present_value: None,
            gain_loss: None,
            portfolio_percent: 0.0,
        }
    }
}

/// Aggregated totals across all holdings sharing a sector label.
///
/// Invariant: the totals equal the sums over `holdings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorRollup {
    pub sector: String,
    pub total_investment: f64,
    pub total_present_value: f64,
    pub gain_loss: f64,
    pub holdings: Vec<EnrichedHolding>,
}

/// The full portfolio view computed fresh on every request.
/// Never cached or persisted — caching lives at the quote/fundamentals
/// layer only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    /// All holdings, in the same order as the input holding list.
    pub holdings: Vec<EnrichedHolding>,

    /// Sector rollups, sorted by descending total investment
    /// (ties keep first-seen input order).
    pub sectors: Vec<SectorRollup>,

    pub total_investment: f64,
    pub total_present_value: f64,

    /// total_present_value − total_investment
    pub total_gain_loss: f64,
}
