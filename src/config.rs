// config.rs - Server configuration
//
// Values come from the process environment (after `.env` is loaded by the
// binary). Leptos' own site options are read separately from Cargo.toml
// metadata by leptos_config.

use std::env;

use thiserror::Error;

/// Default tracing filter when neither RUST_LOG nor DIRECTORY_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid boolean for {key}: '{value}'")]
    InvalidBool { key: &'static str, value: String },

    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Tracing filter directive used when RUST_LOG is absent
    pub log_filter: String,
    /// Whether log lines include the event target
    pub log_target: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_target: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let log_filter = match lookup("DIRECTORY_LOG") {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::Empty { key: "DIRECTORY_LOG" })
            }
            Some(value) => value.trim().to_string(),
            None => defaults.log_filter,
        };

        let log_target = match lookup("DIRECTORY_LOG_TARGET") {
            Some(value) => parse_bool("DIRECTORY_LOG_TARGET", &value)?,
            None => defaults.log_target,
        };

        Ok(Self { log_filter, log_target })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}
