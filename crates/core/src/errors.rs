use thiserror::Error;

/// Unified error type for the entire equity-tracker-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Upstream market-data failures never appear here: the adapter layer
/// absorbs them and substitutes synthetic values, so quote/fundamentals
/// retrieval is infallible from the caller's point of view.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    // ── Client input ────────────────────────────────────────────────
    #[error("Symbol must not be empty")]
    InvalidSymbol,

    #[error("No holding found with symbol: {0}")]
    HoldingNotFound(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so that
        // upstream request details don't leak into logs verbatim.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
