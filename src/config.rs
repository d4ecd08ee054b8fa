//! Configuration management for the contacts gateway.
//!
//! This module handles loading and validating configuration from environment variables,
//! reading a `.env` file first when one is present.

use crate::domain::CapabilitySet;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Configuration for the contacts gateway.
#[derive(Debug, Clone)]
pub struct Config {
    /// Capabilities the host has granted to this process
    pub capabilities: CapabilitySet,

    /// Upper bound for any single collaborator call in seconds (default: 10)
    pub collaborator_timeout_secs: u64,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `GATEWAY_CAPABILITIES`: comma-separated grants (default: none)
    /// - `COLLABORATOR_TIMEOUT_SECS`: per-call timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is not an error
        let _ = dotenvy::dotenv();

        let capabilities = match env::var("GATEWAY_CAPABILITIES") {
            Ok(list) => {
                CapabilitySet::parse_list(&list).map_err(|reason| ConfigError::InvalidValue {
                    var: "GATEWAY_CAPABILITIES".to_string(),
                    reason,
                })?
            }
            Err(_) => CapabilitySet::none(),
        };

        let collaborator_timeout_secs = Self::parse_env_u64("COLLABORATOR_TIMEOUT_SECS", 10)?;
        if collaborator_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                var: "COLLABORATOR_TIMEOUT_SECS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            capabilities,
            collaborator_timeout_secs,
            log_level,
        })
    }

    /// The collaborator timeout as a `Duration`.
    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_secs(self.collaborator_timeout_secs)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            capabilities: CapabilitySet::none(),
            collaborator_timeout_secs: 10,
            log_level: "error".to_string(),
        }
    }
}
