//! Error types for the Shiori core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Shiori.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong.
        message: String,
        /// Underlying parse error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Article index payload could not be decoded.
    #[error("Article index parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Article index request returned a non-success status.
    #[error("Failed to fetch article index: HTTP {status}")]
    Fetch {
        /// HTTP status code of the response.
        status: u16,
    },

    /// Transport-level failure while talking to the host.
    #[error("Network error: {0}")]
    Network(String),

    /// Preference store unavailable or rejected a write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Native share or clipboard call failed.
    #[error("Share error: {0}")]
    Share(String),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a new storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a new share error.
    pub fn share(message: impl Into<String>) -> Self {
        Self::Share(message.into())
    }
}
