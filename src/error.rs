//! Error types for the screenline pipeline.

use thiserror::Error;

/// The main error type for screenline.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (diagnostic artifact, config file, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport errors talking to the market-data provider
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider-level errors (bad status, malformed payload)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Requested screen tag is not in the fixed criterion set
    #[error("Unknown screen criterion: {0}")]
    UnknownCriterion(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new unknown-criterion error.
    pub fn unknown_criterion(tag: impl Into<String>) -> Self {
        Self::UnknownCriterion(tag.into())
    }
}
