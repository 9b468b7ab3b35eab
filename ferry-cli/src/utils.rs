//! Utility functions for CLI operations.

use crate::error::CliError;
use ferry::config::{Config, ConfigBuilder};
use ferry::{Application, CloudMapper, OsaScriptRunner, Resolver};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Verbosity fields are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Override the cloud storage container directory.
    pub cloud_container: Option<PathBuf>,
    /// Override the configuration directory location.
    pub config_dir: Option<PathBuf>,
}

/// Load configuration with CLI overrides.
///
/// Configuration is loaded according to the standard precedence:
/// CLI flags > environment variables > configuration file > defaults.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let overrides = Config {
        cloud_container: global.cloud_container.clone(),
        ..Config::default()
    };

    let mut builder = ConfigBuilder::new().with_config(overrides);

    if let Some(dir) = &global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Build the cloud mapper described by a merged configuration.
pub fn build_mapper(config: &Config) -> CloudMapper {
    match &config.cloud_container {
        Some(container) => CloudMapper::with_container(container.clone()),
        None => CloudMapper::new(),
    }
}

/// Build a resolver that runs scripts against live applications.
pub fn build_resolver(config: &Config) -> Resolver<OsaScriptRunner> {
    Resolver::with_mapper(OsaScriptRunner::new(), build_mapper(config))
}

/// Look up an application by name, tolerating case and separators.
pub fn parse_app(name: &str) -> Result<Application, CliError> {
    Application::from_name(name).ok_or_else(|| {
        CliError::InvalidArguments(format!(
            "unknown application '{name}' (run 'ferry apps' for the supported list)"
        ))
    })
}
