//! Locale isolation for script execution.
//!
//! The scripting engine formats its output and error text according to the
//! locale environment variable. A resolution call must see stable engine
//! messages, and it must not leave the variable in a different state than
//! it found it: the variable is snapshotted and cleared on entry and
//! restored when the guard drops, on success and failure alike.

use std::env;
use std::ffi::OsString;

/// The environment variable the scripting engine localizes by.
const LOCALE_VAR: &str = "LANG";

/// RAII guard that clears the locale variable for the duration of a script
/// run and restores the previous value on drop.
#[derive(Debug)]
pub(crate) struct LocaleGuard {
    saved: Option<OsString>,
}

impl LocaleGuard {
    /// Snapshot the current locale variable and clear it.
    pub(crate) fn clear() -> Self {
        let saved = env::var_os(LOCALE_VAR);
        env::remove_var(LOCALE_VAR);
        Self { saved }
    }
}

impl Drop for LocaleGuard {
    fn drop(&mut self) {
        match self.saved.take() {
            Some(value) => env::set_var(LOCALE_VAR, value),
            None => env::remove_var(LOCALE_VAR),
        }
    }
}
