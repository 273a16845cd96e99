//! Command-line flags.

use std::path::PathBuf;

use clap::{builder::BoolishValueParser, ArgAction, Parser};

use super::config::{ConfigLoader, ConfigOverrides};

/// Serves the active system profile over HTTP.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "profiler-engine", version, about)]
pub struct Cli {
    /// Configuration file to read instead of ./application.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Select the dev profile (true) or the production profile (false)
    #[arg(
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub profile_dev: Option<bool>,

    /// Address to listen on
    #[arg(long, value_name = "ADDR")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            profile_dev: self.profile_dev,
            host: self.host.clone(),
            port: self.port,
        }
    }

    /// Configuration loader honoring these flags.
    pub fn loader(&self) -> ConfigLoader {
        let loader = ConfigLoader::new().with_overrides(self.overrides());
        match &self.config {
            Some(path) => loader.with_config_path(path),
            None => loader,
        }
    }
}
