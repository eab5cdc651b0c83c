//! Error types for the protocol core.
//!
//! Malformed model output is not an error: it is reported through
//! [`TurnOutcome::Malformed`](crate::types::TurnOutcome::Malformed). The types
//! here cover caller mistakes only, such as a template rendered without one of
//! its placeholders or an invalid configuration value.

use thiserror::Error;

/// Errors raised by the prompt composer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// A declared template placeholder had no value at render time.
    #[error("Missing value for prompt placeholder '{key}'")]
    MissingPlaceholder {
        /// Name of the placeholder that was not supplied.
        key: String,
    },
}

/// Errors related to protocol configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration for '{key}': {value}")]
    InvalidConfiguration {
        /// The configuration key.
        key: String,
        /// The invalid value.
        value: String,
    },

    /// The configuration file could not be read.
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for [`ProtocolConfig`](crate::config::ProtocolConfig).
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
