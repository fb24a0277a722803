//! Configuration Module
//!
//! Handles loading demo configuration from environment variables.
//!
//! The cache itself is configured through its constructor arguments; this
//! module only feeds the demonstration binary.

use std::env;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Demo configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Reserved default expiration handed to the cache constructor
    pub default_expiration_ms: u64,
    /// Fixed delay between janitor sweeps
    pub cleanup_interval_ms: u64,
    /// Initial capacity hint for the store
    pub initial_capacity: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// A variable that is absent falls back to its default; a variable that
    /// is present but unparsable is an error rather than being silently
    /// ignored.
    ///
    /// # Environment Variables
    /// - `DEFAULT_EXPIRATION_MS` - Reserved default expiration (default: 1000)
    /// - `CLEANUP_INTERVAL_MS` - Sweep delay in milliseconds (default: 3000)
    /// - `INITIAL_CAPACITY` - Store capacity hint (default: 10)
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            default_expiration_ms: parse_env("DEFAULT_EXPIRATION_MS", 1000)?,
            cleanup_interval_ms: parse_env("CLEANUP_INTERVAL_MS", 3000)?,
            initial_capacity: parse_env("INITIAL_CAPACITY", 10)?,
        })
    }

    /// Reserved default expiration as a [`Duration`].
    pub fn default_expiration(&self) -> Duration {
        Duration::from_millis(self.default_expiration_ms)
    }

    /// Janitor sweep delay as a [`Duration`].
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_millis(self.cleanup_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_expiration_ms: 1000,
            cleanup_interval_ms: 3000,
            initial_capacity: 10,
        }
    }
}

/// Reads and parses one environment variable, defaulting when absent.
fn parse_env<V: std::str::FromStr>(var: &'static str, default: V) -> Result<V> {
    match env::var(var) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar { var, value: raw }),
        Err(_) => Ok(default),
    }
}
