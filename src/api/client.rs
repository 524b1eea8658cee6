//! Yahoo Finance HTTP client.

use crate::config::ProviderConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{MarketData, RawQuote, ScreenBatch};

/// Market-data client for the Yahoo Finance public endpoints.
pub struct YahooFinanceClient {
    /// Configuration.
    config: ProviderConfig,
    /// Shared HTTP client.
    http: reqwest::Client,
}

impl YahooFinanceClient {
    /// Create a new client.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, http })
    }
}

#[async_trait]
impl MarketData for YahooFinanceClient {
    async fn screen(&self, query: &str, offset: u32, size: u32) -> Result<ScreenBatch> {
        let response = self
            .http
            .get(&self.config.screener_url)
            .query(&[
                ("scrIds", query.to_string()),
                ("offset", offset.to_string()),
                ("count", size.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::provider(format!("screener returned HTTP {status}")));
        }

        let raw: serde_json::Value = response.json().await?;
        let quotes = raw
            .pointer("/finance/result/0/quotes")
            .and_then(serde_json::Value::as_array)
            .ok_or_else(|| Error::provider("screener response missing quotes"))?
            .iter()
            .cloned()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<RawQuote>, _>>()?;

        debug!("Screen '{}' returned {} quotes", query, quotes.len());
        Ok(ScreenBatch { quotes, raw })
    }

    async fn daily_closes(&self, symbol: &str) -> Result<Vec<f64>> {
        let url = format!("{}/{}", self.config.chart_url, symbol);
        let response = self
            .http
            .get(&url)
            .query(&[("range", "1mo"), ("interval", "1d")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::provider(format!("chart returned HTTP {status}")));
        }

        let envelope: ChartEnvelope = response.json().await?;
        let series = envelope
            .chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| Error::provider("chart response missing result"))?;

        // Nulls mark non-trading days in the provider series.
        let closes: Vec<f64> = series
            .indicators
            .quote
            .into_iter()
            .next()
            .and_then(|block| block.close)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect();

        debug!("Chart for {} returned {} closes", symbol, closes.len());
        Ok(closes)
    }
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartOuter,
}

#[derive(Debug, Deserialize)]
struct ChartOuter {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct ChartQuoteBlock {
    close: Option<Vec<Option<f64>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_envelope_parses_with_null_closes() {
        let payload = serde_json::json!({
            "chart": {
                "result": [{
                    "indicators": {
                        "quote": [{ "close": [182.5, null, 184.0, 185.25] }]
                    }
                }],
                "error": null
            }
        });

        let envelope: ChartEnvelope = serde_json::from_value(payload).unwrap();
        let closes: Vec<f64> = envelope.chart.result.unwrap().remove(0).indicators.quote[0]
            .close
            .clone()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(closes, vec![182.5, 184.0, 185.25]);
    }

    #[test]
    fn test_chart_envelope_tolerates_missing_result() {
        let payload = serde_json::json!({ "chart": { "result": null, "error": "Not Found" } });
        let envelope: ChartEnvelope = serde_json::from_value(payload).unwrap();
        assert!(envelope.chart.result.is_none());
    }
}
