//! Main application module.
//!
//! Wires the screening engine, history cache, and report formatter into
//! the single inbound operation callers use: criterion tag in, rendered
//! report out.

use crate::api::{MarketData, YahooFinanceClient};
use crate::config::Config;
use crate::error::Result;
use crate::report::{sparkline, ReportFormatter};
use crate::screen::ScreenEngine;
use crate::state::{InstrumentRecord, ScreenCriterion, ScreenRequest};

/// The screening application.
pub struct App<P: MarketData = YahooFinanceClient> {
    /// Configuration.
    config: Config,
    /// Screening engine (provider + retry policy + history cache).
    engine: ScreenEngine<P>,
}

impl App<YahooFinanceClient> {
    /// Create an application backed by the real Yahoo Finance provider.
    pub fn new(config: Config) -> Result<Self> {
        let provider = YahooFinanceClient::new(config.provider.clone())?;
        Ok(Self::with_provider(config, provider))
    }
}

impl<P: MarketData> App<P> {
    /// Create an application with an injected provider.
    pub fn with_provider(config: Config, provider: P) -> Self {
        let engine = ScreenEngine::new(provider, config.screener.clone());
        Self { config, engine }
    }

    /// Screen by a criterion tag and render the report.
    ///
    /// The only failure that reaches the caller is an unknown tag; provider
    /// outages degrade to the fallback dataset and trend-history failures
    /// degrade to blank trend cells.
    pub async fn invoke(
        &self,
        tag: &str,
        offset: u32,
        size: u32,
        include_trend: bool,
    ) -> Result<String> {
        let criterion: ScreenCriterion = tag.parse()?;
        let request = ScreenRequest::new(criterion, offset, size, include_trend);

        let outcome = self.engine.screen(&request).await;

        let trends = if request.include_trend {
            Some(self.trend_glyphs(&outcome.records).await)
        } else {
            None
        };

        Ok(ReportFormatter::render(
            &outcome.records,
            trends.as_deref(),
            &outcome.label,
        ))
    }

    /// One trend glyph per record; blank for records without a symbol.
    async fn trend_glyphs(&self, records: &[InstrumentRecord]) -> Vec<String> {
        let points = self.config.report.sparkline_points;
        let width = self.config.report.sparkline_width;

        let mut glyphs = Vec::with_capacity(records.len());
        for record in records {
            let glyph = match record.symbol.as_deref() {
                Some(symbol) => {
                    let closes = self.engine.recent_closes(symbol, points).await;
                    sparkline::render(&closes, width)
                }
                None => String::new(),
            };
            glyphs.push(glyph);
        }
        glyphs
    }
}
