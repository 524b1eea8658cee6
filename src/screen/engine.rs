//! Screening engine: criterion dispatch, retry/backoff, fallback masking.

use crate::api::{MarketData, QuoteConverter};
use crate::config::ScreenerConfig;
use crate::error::Result;
use crate::history::PriceHistoryCache;
use crate::state::{InstrumentRecord, ScreenRequest};
use std::time::Duration;
use tracing::{debug, warn};

use super::fallback::{fallback_records, FALLBACK_LABEL};

/// The result of one screening pass.
///
/// `label` is the criterion tag the report is rendered under; it is the
/// literal [`FALLBACK_LABEL`] when the provider could not be reached,
/// regardless of what was requested.
#[derive(Debug, Clone)]
pub struct ScreenOutcome {
    /// Report label (criterion tag or "fallback").
    pub label: String,
    /// Normalized records, in provider order.
    pub records: Vec<InstrumentRecord>,
}

/// Drives screening calls against a market-data provider.
///
/// Owns the retry policy and the price history cache. Never surfaces a
/// provider failure to the caller: exhausted retries degrade to the
/// built-in fallback dataset so a report can always be rendered.
pub struct ScreenEngine<P: MarketData> {
    /// Market-data provider.
    provider: P,
    /// Retry and diagnostic configuration.
    config: ScreenerConfig,
    /// Price history cache for trend glyphs.
    history: PriceHistoryCache,
}

impl<P: MarketData> ScreenEngine<P> {
    /// Create a new engine with its own history cache.
    pub fn new(provider: P, config: ScreenerConfig) -> Self {
        let history = PriceHistoryCache::new(Duration::from_secs(config.history_ttl_secs));
        Self {
            provider,
            config,
            history,
        }
    }

    /// Run one screening pass for `request`.
    ///
    /// Attempts the provider up to `max_retries` times with doubling
    /// backoff; attempts are strictly sequential and each backoff sleeps
    /// for its full delay.
    pub async fn screen(&self, request: &ScreenRequest) -> ScreenOutcome {
        let query = request.criterion.provider_query();
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        for attempt in 1..=self.config.max_retries {
            match self
                .provider
                .screen(query, request.offset, request.size)
                .await
            {
                Ok(batch) => {
                    self.write_diagnostic(&batch.raw);
                    return ScreenOutcome {
                        label: request.criterion.tag().to_string(),
                        records: QuoteConverter::convert_quotes(batch.quotes),
                    };
                }
                Err(e) if attempt < self.config.max_retries => {
                    warn!(
                        "Screen attempt {}/{} failed: {}. Retrying in {:?}",
                        attempt, self.config.max_retries, e, delay
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    warn!(
                        "All {} screen attempts failed: {}. Serving fallback dataset",
                        self.config.max_retries, e
                    );
                }
            }
        }

        ScreenOutcome {
            label: FALLBACK_LABEL.to_string(),
            records: fallback_records(),
        }
    }

    /// Recent daily closes for `symbol`, through the TTL cache.
    pub async fn recent_closes(&self, symbol: &str, points: usize) -> Vec<f64> {
        self.history
            .recent_closes(&self.provider, symbol, points)
            .await
    }

    /// Best-effort dump of the raw provider response for diagnostics.
    fn write_diagnostic(&self, raw: &serde_json::Value) {
        if let Err(e) = self.try_write_diagnostic(raw) {
            debug!(
                "Failed to write diagnostic artifact to {}: {}",
                self.config.diagnostic_path.display(),
                e
            );
        }
    }

    fn try_write_diagnostic(&self, raw: &serde_json::Value) -> Result<()> {
        let payload = serde_json::to_string(raw)?;
        std::fs::write(&self.config.diagnostic_path, payload)?;
        Ok(())
    }
}
