//! Error types for the cache crate
//!
//! Cache operations themselves are total: `get` reporting absent is a normal
//! result, not an error, and the engine neither bounds memory nor catches
//! allocation failure. The only fallible surface is configuration loading.

use thiserror::Error;

// == Config Error Enum ==
/// Errors raised while loading demo configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable was present but could not be parsed
    #[error("Invalid value for {var}: {value}")]
    InvalidEnvVar {
        /// The offending variable name
        var: &'static str,
        /// The raw value that failed to parse
        value: String,
    },
}

// == Result Type Alias ==
/// Convenience Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
