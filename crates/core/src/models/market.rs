use serde::{Deserialize, Serialize};

/// Sentinel shown when no earnings date could be extracted.
pub const EARNINGS_NOT_AVAILABLE: &str = "N/A";

/// A current market price for one symbol.
///
/// May come straight from the upstream provider, from the freshness
/// cache, or from the synthetic fallback generator — callers cannot
/// tell the difference, and that is intentional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,

    /// Current market price, always finite and non-negative.
    pub price: f64,
}

/// Supplementary valuation data for one symbol.
///
/// Both fields are extracted independently from the upstream markup;
/// either may be missing without the fetch as a whole failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fundamentals {
    pub symbol: String,

    /// Trailing price/earnings ratio. `None` when unavailable — never a
    /// sentinel number, so it can't leak into arithmetic.
    pub pe_ratio: Option<f64>,

    /// Latest earnings date as a display label, `"N/A"` when unknown.
    pub latest_earnings: String,
}

impl Fundamentals {
    pub fn unavailable(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            pe_ratio: None,
            latest_earnings: EARNINGS_NOT_AVAILABLE.to_string(),
        }
    }
}
