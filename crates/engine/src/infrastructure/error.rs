//! Configuration error types.
//!
//! Every failure here is fatal: the process refuses to start rather than
//! guess which profile to run with.

use thiserror::Error;

use super::config::env_var_name;

/// Startup configuration failure.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A required setting was not supplied by any source.
    #[error(
        "Required setting `{key}` is missing: set it in application.toml, via {} or with --{}",
        env_var_name(.key),
        .key.replace('.', "-")
    )]
    Missing { key: &'static str },

    /// A setting was supplied but could not be read as the expected type.
    #[error("Invalid value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },

    /// A configuration source could not be read or parsed.
    #[error("Configuration source error: {0}")]
    Source(#[from] config::ConfigError),
}

impl ConfigurationError {
    /// The setting this error refers to, if it is about a single key.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::Missing { key } | Self::Invalid { key, .. } => Some(*key),
            Self::Source(_) => None,
        }
    }
}
