//! Infrastructure layer - configuration sources and their failure modes.

pub mod cli;
pub mod config;
pub mod error;

pub use self::config::{AppConfig, ConfigLoader, ConfigOverrides, ServerConfig};
pub use error::ConfigurationError;
