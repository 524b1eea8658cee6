//! Time-bounded price history cache.

use crate::api::MarketData;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// Cache key: a symbol together with the requested point count.
type HistoryKey = (String, usize);

/// A cached close series with its fetch time.
#[derive(Debug, Clone)]
struct HistoryEntry {
    fetched_at: Instant,
    closes: Vec<f64>,
}

/// TTL-bounded memoization of recent daily closes per symbol.
///
/// Entries expire `ttl` after their fetch time, evaluated lazily on the
/// next lookup; a stale entry is treated as absent and refetched. There is
/// no background eviction.
#[derive(Debug)]
pub struct PriceHistoryCache {
    ttl: Duration,
    entries: RwLock<HashMap<HistoryKey, HistoryEntry>>,
}

impl PriceHistoryCache {
    /// Create a new cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return the most recent `points` daily closes for `symbol`,
    /// oldest first.
    ///
    /// Served from cache when a fresh entry exists; otherwise fetched from
    /// the provider and cached. Any fetch failure degrades to an empty
    /// series with no cache write.
    pub async fn recent_closes(
        &self,
        provider: &dyn MarketData,
        symbol: &str,
        points: usize,
    ) -> Vec<f64> {
        let key = (symbol.to_string(), points);

        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(&key)
                && entry.fetched_at.elapsed() < self.ttl
            {
                debug!("History cache hit for {} ({} points)", symbol, points);
                return entry.closes.clone();
            }
        }

        let closes = match provider.daily_closes(symbol).await {
            Ok(closes) => closes,
            Err(e) => {
                debug!("History fetch for {} failed, omitting trend: {}", symbol, e);
                return Vec::new();
            }
        };

        let tail = closes[closes.len().saturating_sub(points)..].to_vec();

        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            HistoryEntry {
                fetched_at: Instant::now(),
                closes: tail.clone(),
            },
        );

        tail
    }
}
