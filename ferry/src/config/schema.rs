//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Complete configuration structure.
///
/// Every field is optional. The effective configuration is assembled by
/// overlaying sources on the defaults, later sources winning field by
/// field.
///
/// # Examples
///
/// ```
/// use ferry::config::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     log_level: Some("verbose".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.cloud_container, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging level: `quiet`, `normal` or `verbose`.
    pub log_level: Option<String>,

    /// Directory scanned for cloud sync roots, replacing the per-user
    /// cloud-storage container.
    pub cloud_container: Option<PathBuf>,
}

impl Config {
    /// Overlay another configuration on this one.
    ///
    /// Fields set in `other` replace the corresponding fields here;
    /// unset fields leave this configuration untouched.
    pub fn merge_from(&mut self, other: Self) {
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
        if other.cloud_container.is_some() {
            self.cloud_container = other.cloud_container;
        }
    }
}
