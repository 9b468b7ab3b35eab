//! Automation script generation.
//!
//! For every known application this module produces the AppleScript text
//! that asks the application for its current path-like state: the selected
//! folder in a file manager, the working directory of a terminal session,
//! or the file backing the frontmost document. Scripts are plain strings,
//! rebuilt on every call; they embed nothing but the application's names,
//! so there is no cache to invalidate.
//!
//! Every script follows the same shape:
//! 1. fail with `"<App> is not running"` when the process is absent,
//! 2. fail with a window/document count message when nothing is open,
//! 3. read the application-specific path property (document file, window
//!    target, session variable, accessibility attribute, or window title),
//! 4. fail with `"No active document"` / `"Document not saved"` when that
//!    property is the `missing value` sentinel,
//! 5. return the result as a POSIX-style path where the property is not
//!    already one.
//!
//! Some applications can only be read through their window title; those
//! strategies are best-effort by nature and documented on the builders.

mod documents;
mod file_managers;
mod terminals;

use crate::app::Application;

/// Build the resolution script for an application.
///
/// Total over the closed application set: every identity has exactly one
/// branch, and the match below refuses to compile if a family is missed.
///
/// # Examples
///
/// ```
/// use ferry::app::{Application, FileManager};
/// use ferry::script::build_script;
///
/// let script = build_script(Application::FileManager(FileManager::Finder));
/// assert!(script.contains("Finder"));
/// ```
#[must_use]
pub fn build_script(app: Application) -> String {
    match app {
        Application::FileManager(fm) => file_managers::build(fm),
        Application::Terminal(term) => terminals::build(term),
        Application::Document(doc) => documents::build(doc),
    }
}

/// The standard "is it running" precondition, shared by every script.
pub(crate) fn running_guard(app_name: &str) -> String {
    format!(
        r#"if application "{app_name}" is not running then error "{app_name} is not running""#
    )
}

/// A System Events fragment that reads one property of the front window of
/// a process into a script variable, failing when no window exists.
///
/// The caller supplies the process name (which may differ from the
/// application name), the error text for the no-window case, the property
/// expression, and the variable to bind.
pub(crate) fn window_property_fragment(
    process: &str,
    no_window_error: &str,
    property: &str,
    var: &str,
) -> String {
    format!(
        r#"tell application "System Events"
    tell process "{process}"
        if (count of windows) is 0 then error "{no_window_error}"
        set {var} to {property} of window 1
    end tell
end tell"#
    )
}
