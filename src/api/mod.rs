//! Market-data provider integration.
//!
//! This module owns the provider boundary: the [`MarketData`] trait the
//! pipeline is written against, the raw provider-shaped quote types, and
//! the Yahoo Finance HTTP implementation.

mod client;
mod converter;

pub use client::YahooFinanceClient;
pub use converter::QuoteConverter;

use crate::error::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A quote record as the provider shapes it.
///
/// Only schema-relevant fields are kept; serde drops everything else from
/// the provider payload. `regular_market_volume` is the alternate volume
/// field some screens populate instead of `volume`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawQuote {
    pub symbol: Option<String>,
    pub short_name: Option<String>,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub exchange: Option<String>,
    pub fifty_two_week_high: Option<Decimal>,
    pub fifty_two_week_low: Option<Decimal>,
    pub average_analyst_rating: Option<String>,
    pub dividend_yield: Option<Decimal>,
    pub volume: Option<u64>,
    pub regular_market_volume: Option<u64>,
    pub market_cap: Option<u64>,
}

/// One screen response: the parsed quotes plus the raw payload
/// (kept for the best-effort diagnostic artifact).
#[derive(Debug, Clone)]
pub struct ScreenBatch {
    /// Quotes parsed out of the response.
    pub quotes: Vec<RawQuote>,
    /// The raw provider JSON, verbatim.
    pub raw: serde_json::Value,
}

/// Outbound market-data operations the pipeline depends on.
///
/// Implementations may fail transiently (network, rate limit, malformed
/// payload); callers treat every failure uniformly.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Screen by a provider query id, with pagination.
    async fn screen(&self, query: &str, offset: u32, size: u32) -> Result<ScreenBatch>;

    /// Fetch one month of daily closing prices for a symbol,
    /// time-ordered with the most recent close last.
    async fn daily_closes(&self, symbol: &str) -> Result<Vec<f64>>;
}
