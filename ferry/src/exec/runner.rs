//! The transport seam between script generation and script execution.

use std::sync::Mutex;

use crate::error::{Error, Result};

/// Synchronous automation transport.
///
/// Given a script body, an implementation returns the script's raw textual
/// output or fails with the engine's error text. The trait is deliberately
/// minimal: the resolver composes everything else (generation,
/// normalization, mapping) around this single blocking call, and callers
/// must not issue two calls concurrently from the same resolution request.
pub trait ScriptRunner: Send + Sync {
    /// Execute `script` and return its raw, untrimmed standard output.
    ///
    /// # Errors
    ///
    /// Fails with the engine's error text when the script signals an
    /// error, or with an unsupported-platform error when the host has no
    /// automation runtime. Error text produced inside the script (the
    /// precondition messages) is indistinguishable from engine errors
    /// here and propagates unmodified.
    fn run(&self, script: &str) -> Result<String>;
}

impl<R: ScriptRunner> ScriptRunner for &R {
    fn run(&self, script: &str) -> Result<String> {
        (**self).run(script)
    }
}

/// Mock implementation for testing with a scripted outcome.
///
/// Every call to [`ScriptRunner::run`] returns the configured output or
/// error, and the scripts it was handed are recorded for assertions.
/// This lets tests drive the whole resolution pipeline without a desktop
/// session.
///
/// # Examples
///
/// ```
/// use ferry::exec::{MockScriptRunner, ScriptRunner};
///
/// let runner = MockScriptRunner::with_output("/Users/pat/Desktop\n");
/// assert_eq!(runner.run("return 1").unwrap(), "/Users/pat/Desktop\n");
///
/// let failing = MockScriptRunner::with_error("Finder is not running");
/// assert!(failing.run("return 1").is_err());
/// ```
#[derive(Debug)]
pub struct MockScriptRunner {
    outcome: std::result::Result<String, String>,
    seen: Mutex<Vec<String>>,
}

impl MockScriptRunner {
    /// Create a mock whose every run succeeds with the given output.
    #[must_use]
    pub fn with_output(output: impl Into<String>) -> Self {
        Self {
            outcome: Ok(output.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock whose every run fails with the given error text.
    #[must_use]
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// The scripts handed to [`ScriptRunner::run`] so far, oldest first.
    #[must_use]
    pub fn seen_scripts(&self) -> Vec<String> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }
}

impl ScriptRunner for MockScriptRunner {
    fn run(&self, script: &str) -> Result<String> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(script.to_string());
        }
        match &self.outcome {
            Ok(output) => Ok(output.clone()),
            Err(message) => Err(Error::script(message.clone())),
        }
    }
}
