//! CLI-specific error types with exit codes.

use ferry::Error as FerryError;
use std::fmt;

/// CLI error with associated exit code.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Ferry(FerryError),
    /// Automation is unavailable on this platform.
    UnsupportedPlatform,
    /// Invalid command-line arguments.
    InvalidArguments(String),
    /// I/O error.
    Io(std::io::Error),
    /// Configuration error.
    Config(String),
    /// The command ran but found nothing to report.
    NoMatch(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: No result (no local match, no open document, empty output)
    /// - 2: Automation unavailable on this platform
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NoMatch(_) => 1,
            CliError::Ferry(ferry_err) => match ferry_err {
                // Script refusals and empty output mean the application had
                // nothing to report, not that the tool itself failed.
                FerryError::Script { .. } | FerryError::EmptyPath { .. } => 1,
                _ => 6,
            },
            CliError::UnsupportedPlatform => 2,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Ferry(e) => write!(f, "{e}"),
            CliError::UnsupportedPlatform => {
                write!(f, "automation is only supported on macOS")
            }
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::NoMatch(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Ferry(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FerryError> for CliError {
    fn from(err: FerryError) -> Self {
        match err {
            FerryError::UnsupportedPlatform => CliError::UnsupportedPlatform,
            other => CliError::Ferry(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}
