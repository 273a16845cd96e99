//! Application configuration
//!
//! Settings are layered with the `config` crate, lowest precedence first:
//! built-in defaults, `application.toml` (or `--config <path>`), `NETOLOGY_*`
//! environment variables, then command-line overrides.

use std::collections::HashMap;
use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use profiler_domain::ProfileKind;
use serde::de::DeserializeOwned;

use super::error::ConfigurationError;

/// Prefix for environment variables, e.g. `NETOLOGY_PROFILE_DEV`.
pub const ENV_PREFIX: &str = "NETOLOGY";

/// Base name of the optional configuration file in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "application";

pub const PROFILE_DEV_KEY: &str = "profile.dev";
pub const SERVER_HOST_KEY: &str = "server.host";
pub const SERVER_PORT_KEY: &str = "server.port";

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Environment variable that sets `key`.
pub fn env_var_name(key: &str) -> String {
    format!("{ENV_PREFIX}_{}", key.replace('.', "_").to_uppercase())
}

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Value of the `profile.dev` flag
    pub profile_dev: bool,
    /// HTTP listener settings
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn profile_kind(&self) -> ProfileKind {
        ProfileKind::from_dev_flag(self.profile_dev)
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

impl ServerConfig {
    /// Address string accepted by `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// Values that take precedence over every other source (command-line flags).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub profile_dev: Option<bool>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Builds an [`AppConfig`] from all configuration sources.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_vars: Option<HashMap<String, String>>,
    overrides: ConfigOverrides,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this file instead of the default `application.toml`.
    ///
    /// Unlike the default file, an explicitly named file must exist.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Read environment settings from `vars` instead of the process environment.
    pub fn with_env_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.env_vars = Some(vars);
        self
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Load configuration from all sources.
    ///
    /// Fails if `profile.dev` is absent from every source or is not a boolean.
    pub fn load(&self) -> Result<AppConfig, ConfigurationError> {
        let mut builder = Config::builder()
            .set_default(SERVER_HOST_KEY, DEFAULT_SERVER_HOST)?
            .set_default(SERVER_PORT_KEY, i64::from(DEFAULT_SERVER_PORT))?;

        builder = match &self.config_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Using configuration file");
                builder.add_source(File::from(path.as_path()).required(true))
            }
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let mut environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("_");
        if let Some(vars) = &self.env_vars {
            environment = environment.source(Some(vars.clone().into_iter().collect()));
        }
        builder = builder.add_source(environment);

        builder = builder
            .set_override_option(PROFILE_DEV_KEY, self.overrides.profile_dev)?
            .set_override_option(SERVER_HOST_KEY, self.overrides.host.clone())?
            .set_override_option(SERVER_PORT_KEY, self.overrides.port.map(i64::from))?;

        let config = builder.build()?;

        Ok(AppConfig {
            profile_dev: read(&config, PROFILE_DEV_KEY)?,
            server: ServerConfig {
                host: read(&config, SERVER_HOST_KEY)?,
                port: read(&config, SERVER_PORT_KEY)?,
            },
        })
    }
}

fn read<T: DeserializeOwned>(config: &Config, key: &'static str) -> Result<T, ConfigurationError> {
    config.get::<T>(key).map_err(|e| match e {
        ConfigError::NotFound(_) => ConfigurationError::Missing { key },
        other => ConfigurationError::Invalid {
            key,
            reason: other.to_string(),
        },
    })
}
