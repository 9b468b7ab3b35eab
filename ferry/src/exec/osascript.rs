//! Production script execution through the system `osascript` runner.

#[cfg(target_os = "macos")]
use std::process::Command;

#[cfg(target_os = "macos")]
use super::locale::LocaleGuard;
use super::runner::ScriptRunner;
#[cfg(target_os = "macos")]
use crate::error::Error;
use crate::error::Result;

/// Runs scripts by spawning `osascript -e`.
///
/// The runner is stateless. Each call spawns one process and blocks until
/// it exits; no timeout is imposed here, so callers needing bounded
/// latency wrap the call externally. On platforms without the automation
/// runtime every call fails immediately, before anything is spawned.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsaScriptRunner;

impl OsaScriptRunner {
    /// Create a runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ScriptRunner for OsaScriptRunner {
    #[cfg(target_os = "macos")]
    fn run(&self, script: &str) -> Result<String> {
        // The engine localizes messages through the locale variable; keep
        // it cleared for the duration of the call and restore it after.
        let _locale = LocaleGuard::clear();

        let output = Command::new("osascript").arg("-e").arg(script).output()?;

        // Script `error` statements land on stderr. Error text can arrive
        // even with a zero exit status, and it must win: the text is the
        // failure, verbatim.
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if !stderr.is_empty() {
            return Err(Error::script(stderr));
        }
        if !output.status.success() {
            return Err(Error::script(format!(
                "script runner exited with {}",
                output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    #[cfg(not(target_os = "macos"))]
    fn run(&self, _script: &str) -> Result<String> {
        Err(crate::error::Error::UnsupportedPlatform)
    }
}
