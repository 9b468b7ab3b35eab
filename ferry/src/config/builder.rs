//! Configuration assembly with layered precedence.

use std::path::PathBuf;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Assembles the effective configuration from all sources.
///
/// Precedence, lowest to highest: built-in defaults, the user
/// configuration file, FERRY_* environment variables, programmatic
/// overrides.
///
/// # Examples
///
/// Programmatic configuration, isolated from files and environment:
///
/// ```
/// use ferry::config::{Config, ConfigBuilder};
///
/// let custom = Config {
///     log_level: Some("verbose".to_string()),
///     ..Default::default()
/// };
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(custom)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.log_level, Some("verbose".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the user configuration from this directory instead of
    /// `~/.ferry`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    /// Skip configuration files entirely.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skip environment variable overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Assemble and validate the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be
    /// read or parsed, if an environment override is invalid, or if the
    /// assembled configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(file_config) = ConfigLoader::load_user_config(self.config_dir.as_deref())?
            {
                config.merge_from(file_config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            config.merge_from(overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Check the assembled configuration for invalid values.
    fn validate(config: &Config) -> Result<()> {
        if let Some(level) = &config.log_level {
            LogLevel::parse(level).map_err(|message| Error::Validation {
                field: "log_level".into(),
                message,
            })?;
        }
        Ok(())
    }
}
