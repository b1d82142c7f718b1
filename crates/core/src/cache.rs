use std::time::{Duration, Instant};

use dashmap::DashMap;

/// How long a cached quote/fundamentals entry stays fresh.
pub const CACHE_TTL: Duration = Duration::from_secs(10);

/// Build the composite cache key for one provider fetch.
///
/// The provider kind is part of the key so quote and fundamentals entries
/// for the same symbol can never collide, and neither can the same symbol
/// listed on two exchanges.
pub fn cache_key(provider: &str, exchange: impl std::fmt::Display, symbol: &str) -> String {
    format!("{provider}:{exchange}:{symbol}")
}

struct TimedEntry<T> {
    value: T,
    stored_at: Instant,
}

/// A concurrency-safe key/value store with TTL-aware reads.
///
/// `get` returns the stored value only while it is younger than the TTL;
/// expired entries are not deleted, merely ignored until the next `put`
/// overwrites them (lazy expiry). The working set is bounded by the fixed
/// holding list, so there is no size-based eviction.
///
/// Concurrent `get`/`put` on different keys never interfere; concurrent
/// `put`s to the same key resolve last-write-wins, each carrying its own
/// timestamp.
pub struct FreshnessCache<T> {
    entries: DashMap<String, TimedEntry<T>>,
    ttl: Duration,
}

impl<T: Clone> FreshnessCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Get the cached value for `key` if it is still fresh.
    pub fn get(&self, key: &str) -> Option<T> {
        let entry = self.entries.get(key)?;
        if entry.stored_at.elapsed() < self.ttl {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    /// Store a value under `key`, stamped with the current time.
    pub fn put(&self, key: impl Into<String>, value: T) {
        self.entries.insert(
            key.into(),
            TimedEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Number of entries held, fresh or expired.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Default for FreshnessCache<T> {
    fn default() -> Self {
        Self::new(CACHE_TTL)
    }
}
