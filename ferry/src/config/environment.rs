//! Environment variable handling for configuration overrides.
//!
//! FERRY_* environment variables override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Environment variable overriding the log level.
pub const LOG_MODE_VAR: &str = "FERRY_LOG_MODE";

/// Environment variable overriding the cloud container directory.
pub const CLOUD_CONTAINER_VAR: &str = "FERRY_CLOUD_CONTAINER";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use ferry::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads the FERRY_* variables and applies them with higher
    /// precedence than file-based values.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(value) = env::var(LOG_MODE_VAR) {
            config.log_level = Some(Self::parse_log_level(LOG_MODE_VAR, &value)?);
        }

        if let Ok(value) = env::var(CLOUD_CONTAINER_VAR) {
            config.cloud_container = Some(Self::parse_container(CLOUD_CONTAINER_VAR, &value)?);
        }

        Ok(())
    }

    /// Parse and validate a log level value.
    fn parse_log_level(field: &str, value: &str) -> Result<String> {
        let level = LogLevel::parse(value).map_err(|message| Error::Validation {
            field: field.into(),
            message,
        })?;
        Ok(level.to_string())
    }

    /// Parse a container directory value.
    fn parse_container(field: &str, value: &str) -> Result<PathBuf> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Must not be empty".into(),
            });
        }
        Ok(PathBuf::from(value))
    }
}
