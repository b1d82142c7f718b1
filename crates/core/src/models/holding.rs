use serde::{Deserialize, Serialize};

/// Stock exchange a holding is listed on.
/// Determines how a symbol is mapped to each upstream provider's
/// own ticker convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    /// National Stock Exchange of India
    Nse,
    /// Bombay Stock Exchange
    Bse,
}

impl Exchange {
    /// Yahoo Finance ticker for a symbol on this exchange.
    /// Example: `RELIANCE` on NSE → `RELIANCE.NS`, on BSE → `RELIANCE.BO`.
    pub fn yahoo_symbol(&self, symbol: &str) -> String {
        match self {
            Exchange::Nse => format!("{symbol}.NS"),
            Exchange::Bse => format!("{symbol}.BO"),
        }
    }

    /// Google Finance ticker for a symbol on this exchange.
    /// Example: `RELIANCE` on NSE → `NSE:RELIANCE`, on BSE → `BOM:RELIANCE`.
    pub fn google_symbol(&self, symbol: &str) -> String {
        match self {
            Exchange::Nse => format!("NSE:{symbol}"),
            Exchange::Bse => format!("BOM:{symbol}"),
        }
    }
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exchange::Nse => write!(f, "NSE"),
            Exchange::Bse => write!(f, "BSE"),
        }
    }
}

/// A single stock position in the portfolio.
///
/// Immutable reference data: created once at process start from a fixed
/// list, never mutated or deleted for the process lifetime. Everything
/// market-dependent (current price, present value, gain/loss) lives on
/// [`EnrichedHolding`](super::snapshot::EnrichedHolding) instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Ticker symbol, uppercased (e.g., "RELIANCE", "TCS")
    pub symbol: String,

    /// Human-readable company name
    pub name: String,

    /// Price per share paid at purchase
    pub purchase_price: f64,

    /// Number of shares held
    pub quantity: f64,

    /// Total invested amount: purchase_price × quantity
    pub investment: f64,

    /// Exchange the position is listed on
    pub exchange: Exchange,

    /// Sector label used for rollups (e.g., "Financials")
    pub sector: String,
}

impl Holding {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        purchase_price: f64,
        quantity: f64,
        exchange: Exchange,
        sector: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            name: name.into(),
            purchase_price,
            quantity,
            investment: purchase_price * quantity,
            exchange,
            sector: sector.into(),
        }
    }
}

/// The fixed seed portfolio used when no external holding list is supplied.
pub fn default_holdings() -> Vec<Holding> {
    vec![
        Holding::new("RELIANCE", "Reliance Industries Ltd", 2450.50, 100.0, Exchange::Nse, "Energy"),
        Holding::new("TCS", "Tata Consultancy Services", 3850.75, 50.0, Exchange::Nse, "Technology"),
        Holding::new("HDFCBANK", "HDFC Bank Ltd", 1650.25, 150.0, Exchange::Nse, "Financials"),
        Holding::new("INFY", "Infosys Ltd", 1450.00, 100.0, Exchange::Nse, "Technology"),
        Holding::new("ICICIBANK", "ICICI Bank Ltd", 950.50, 200.0, Exchange::Nse, "Financials"),
        Holding::new("HINDUNILVR", "Hindustan Unilever Ltd", 2650.00, 50.0, Exchange::Nse, "Consumer Goods"),
        Holding::new("BHARTIARTL", "Bharti Airtel Ltd", 850.25, 150.0, Exchange::Nse, "Telecommunications"),
        Holding::new("ITC", "ITC Ltd", 450.75, 300.0, Exchange::Nse, "Consumer Goods"),
    ]
}
