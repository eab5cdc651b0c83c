//! Configuration for the prompt composer and turn parser.
//!
//! Provides a strongly-typed configuration with environment variable
//! support and defaults matching the standard Thought/Action/Observation
//! transcript format.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Protocol configuration settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// Whether to log parsed turns at `info` level.
    #[serde(default = "default_verbose")]
    pub verbose: bool,

    /// Prefix written before each observation in the scratchpad.
    #[serde(default = "default_observation_prefix")]
    pub observation_prefix: String,

    /// Prefix that hands control back to the model after an observation.
    #[serde(default = "default_llm_prefix")]
    pub llm_prefix: String,

    /// Sequences the model should stop generating at.
    #[serde(default = "default_stop_sequences")]
    pub stop_sequences: Vec<String>,
}

impl ProtocolConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from environment variables.
    ///
    /// Environment variables are prefixed with `REACT_PROTOCOL_`.
    /// For example: `REACT_PROTOCOL_VERBOSE=true`
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails validation.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("REACT_PROTOCOL_VERBOSE") {
            config.verbose = parse_bool(&val).ok_or_else(|| ConfigError::InvalidConfiguration {
                key: "verbose".to_string(),
                value: val,
            })?;
        }

        if let Some(val) = lookup("REACT_PROTOCOL_OBSERVATION_PREFIX") {
            config.observation_prefix = val;
        }

        if let Some(val) = lookup("REACT_PROTOCOL_LLM_PREFIX") {
            config.llm_prefix = val;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a prefix is empty or a stop sequence is empty.
    pub fn validate(&self) -> Result<&Self, ConfigError> {
        if self.observation_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                key: "observation_prefix".to_string(),
                value: "empty".to_string(),
            });
        }

        if self.llm_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                key: "llm_prefix".to_string(),
                value: "empty".to_string(),
            });
        }

        if self.stop_sequences.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidConfiguration {
                key: "stop_sequences".to_string(),
                value: "empty sequence".to_string(),
            });
        }

        Ok(self)
    }

    /// Returns a builder for creating configuration.
    #[must_use]
    pub fn builder() -> ProtocolConfigBuilder {
        ProtocolConfigBuilder::default()
    }
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            verbose: default_verbose(),
            observation_prefix: default_observation_prefix(),
            llm_prefix: default_llm_prefix(),
            stop_sequences: default_stop_sequences(),
        }
    }
}

/// Builder for constructing [`ProtocolConfig`].
#[derive(Debug, Default)]
pub struct ProtocolConfigBuilder {
    verbose: Option<bool>,
    observation_prefix: Option<String>,
    llm_prefix: Option<String>,
    stop_sequences: Option<Vec<String>>,
}

impl ProtocolConfigBuilder {
    /// Sets whether to log parsed turns at `info` level.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Sets the observation prefix.
    #[must_use]
    pub fn observation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.observation_prefix = Some(prefix.into());
        self
    }

    /// Sets the prefix that precedes the model's next thought.
    #[must_use]
    pub fn llm_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.llm_prefix = Some(prefix.into());
        self
    }

    /// Sets the stop sequences.
    #[must_use]
    pub fn stop_sequences(mut self, sequences: Vec<String>) -> Self {
        self.stop_sequences = Some(sequences);
        self
    }

    /// Builds the configuration, validating all values.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn build(self) -> Result<ProtocolConfig, ConfigError> {
        let mut config = ProtocolConfig::default();

        if let Some(v) = self.verbose {
            config.verbose = v;
        }
        if let Some(v) = self.observation_prefix {
            config.observation_prefix = v;
        }
        if let Some(v) = self.llm_prefix {
            config.llm_prefix = v;
        }
        if let Some(v) = self.stop_sequences {
            config.stop_sequences = v;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// Default value functions
fn default_verbose() -> bool {
    false
}

fn default_observation_prefix() -> String {
    "Observation: ".to_string()
}

fn default_llm_prefix() -> String {
    "Thought:".to_string()
}

fn default_stop_sequences() -> Vec<String> {
    vec!["\nObservation:".to_string(), "\n\tObservation:".to_string()]
}
