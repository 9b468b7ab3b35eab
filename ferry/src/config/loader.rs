//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the configuration file inside the config directory.
const CONFIG_FILE: &str = "config.yaml";

/// Loads configuration from the user's config file.
///
/// # Examples
///
/// ```no_run
/// use ferry::config::ConfigLoader;
///
/// if let Some(config) = ConfigLoader::load_user_config(None).unwrap() {
///     println!("log level: {:?}", config.log_level);
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user configuration file, if one exists.
    ///
    /// Reads `{config_dir}/config.yaml` when a directory is given,
    /// otherwise `~/.ferry/config.yaml`. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if no config directory was given and the home directory cannot
    /// be determined.
    pub fn load_user_config(config_dir: Option<&Path>) -> Result<Option<Config>> {
        let path = match config_dir {
            Some(dir) => dir.join(CONFIG_FILE),
            None => Self::user_config_path()?,
        };

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(Self::load_file(&path)?))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML does not
    /// match the configuration schema.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Default location of the user configuration file.
    fn user_config_path() -> Result<PathBuf> {
        home::home_dir()
            .map(|dir| dir.join(".ferry").join(CONFIG_FILE))
            .ok_or_else(|| Error::Validation {
                field: "config".into(),
                message: "Cannot determine home directory".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file_is_error() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_yaml_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "log_level: [unclosed\n").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "log_level: verbose\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.log_level, Some("verbose".to_string()));
    }

    #[test]
    fn test_user_config_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = ConfigLoader::load_user_config(Some(temp_dir.path())).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_user_config_reads_from_given_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("config.yaml"),
            "cloud_container: /tmp/roots\n",
        )
        .unwrap();

        let loaded = ConfigLoader::load_user_config(Some(temp_dir.path()))
            .unwrap()
            .unwrap();
        assert_eq!(
            loaded.cloud_container,
            Some(PathBuf::from("/tmp/roots"))
        );
    }
}
