//! Error types for the ferry library.
//!
//! This module provides the error hierarchy for all resolution operations,
//! using `thiserror` for ergonomic error handling. Script and automation
//! failures carry their original text untouched so callers can surface the
//! message an application produced.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a ferry error.
///
/// # Examples
///
/// ```
/// use ferry::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok(String::from("/Users/me/Documents"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the ferry library.
///
/// This enum encompasses all possible error conditions that can occur
/// while resolving an application's current location.
#[derive(Debug, Error)]
pub enum Error {
    /// The automation run failed, either in the scripting engine or inside
    /// the script itself. The message is the stderr text, verbatim.
    #[error("{message}")]
    Script {
        /// The error text reported by the automation run.
        message: String,
    },

    /// An application resolved successfully but produced no usable path.
    #[error("{app} returned an empty path")]
    EmptyPath {
        /// Display name of the application that produced no path.
        app: String,
    },

    /// Script execution was requested on a platform without the
    /// automation runtime.
    #[error("automation is only supported on macOS")]
    UnsupportedPlatform,

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a script failure from any error text.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferry::Error;
    ///
    /// let err = Error::script("Finder is not running");
    /// assert_eq!(err.to_string(), "Finder is not running");
    /// ```
    #[must_use]
    pub fn script(message: impl Into<String>) -> Self {
        Self::Script {
            message: message.into(),
        }
    }

    /// Check if error came from a script or automation run.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferry::Error;
    ///
    /// let err = Error::script("No Finder window found");
    /// assert!(err.is_script_failure());
    /// ```
    #[must_use]
    pub fn is_script_failure(&self) -> bool {
        matches!(self, Self::Script { .. })
    }

    /// Check if error indicates the host platform cannot run automation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferry::Error;
    ///
    /// assert!(Error::UnsupportedPlatform.is_unsupported_platform());
    /// ```
    #[must_use]
    pub fn is_unsupported_platform(&self) -> bool {
        matches!(self, Self::UnsupportedPlatform)
    }
}
