//! Configuration settings for screenline.

use crate::report::sparkline;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Market-data provider configuration.
    pub provider: ProviderConfig,
    /// Screening pipeline configuration.
    pub screener: ScreenerConfig,
    /// Report rendering configuration.
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration from file, returning default if file doesn't exist or fails.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Market-data provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Predefined-screener endpoint URL.
    pub screener_url: String,
    /// Daily price history (chart) endpoint base URL.
    pub chart_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with provider requests.
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            screener_url: "https://query1.finance.yahoo.com/v1/finance/screener/predefined/saved"
                .to_string(),
            chart_url: "https://query1.finance.yahoo.com/v8/finance/chart".to_string(),
            timeout_secs: 30,
            user_agent: format!("screenline/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Screening pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenerConfig {
    /// Total screen attempts before serving the fallback dataset.
    pub max_retries: u32,
    /// Initial backoff delay in milliseconds; doubles after each failed attempt.
    pub retry_delay_ms: u64,
    /// Path the raw screen response is dumped to after each successful fetch.
    pub diagnostic_path: PathBuf,
    /// Time-to-live for cached price history, in seconds.
    pub history_ttl_secs: u64,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay_ms: 2000,
            diagnostic_path: PathBuf::from("output.json"),
            history_ttl_secs: 300,
        }
    }
}

/// Report rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of closing prices fed into each trend glyph.
    pub sparkline_points: usize,
    /// Maximum trend glyph width in characters.
    pub sparkline_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sparkline_points: 14,
            sparkline_width: sparkline::DEFAULT_WIDTH,
        }
    }
}
