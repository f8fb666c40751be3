//! Error type definitions
//!
//! Defines the main error types used throughout the crate.

use thiserror::Error;

/// Main error type for settings resolution
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Plugin identifier is not of the form `module.path.Name`
    #[error("Invalid plugin path: {path}")]
    InvalidPluginPath { path: String },

    /// No factory registered under the plugin identifier
    #[error("Plugin not found: {path}")]
    PluginNotFound { path: String },

    /// Plugin factory failed to build an instance
    #[error("Plugin '{path}' failed to initialize: {reason}")]
    PluginInit { path: String, reason: String },

    /// URL template expanded to something that is not a URL
    #[error("Invalid URL for dataset '{dataset}': {source}")]
    Url {
        dataset: String,
        #[source]
        source: url::ParseError,
    },

    /// TOML deserialization errors
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid plugin path error
    pub fn invalid_plugin_path(path: impl Into<String>) -> Self {
        Self::InvalidPluginPath { path: path.into() }
    }

    /// Create a plugin not found error
    pub fn plugin_not_found(path: impl Into<String>) -> Self {
        Self::PluginNotFound { path: path.into() }
    }

    /// Create a plugin initialization error
    pub fn plugin_init(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PluginInit {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a URL error for the given dataset
    pub fn url(dataset: impl Into<String>, source: url::ParseError) -> Self {
        Self::Url {
            dataset: dataset.into(),
            source,
        }
    }
}
