//! Scripts for terminal emulators.
//!
//! Terminals resolve to the working directory of the active session.
//! Terminal.app exposes the session tty, from which the shell's working
//! directory is read via `lsof`; iTerm publishes it as a session variable.
//! The remaining emulators expose no scripting interface for it at all, so
//! their scripts return the front window title, which these terminals set
//! to the working directory by convention. The title strategies are
//! best-effort: a customized title format yields whatever text is there.

use super::{running_guard, window_property_fragment};
use crate::app::Terminal;

/// Build the resolution script for a terminal emulator.
pub(super) fn build(app: Terminal) -> String {
    let guard = running_guard(app.display_name());
    match app {
        Terminal::Terminal => format!(
            r#"{guard}
tell application "Terminal"
    if (count of windows) is 0 then error "No Terminal window found"
    set ttyName to tty of selected tab of front window
end tell
set shellPid to do shell script "lsof -t " & ttyName & " | head -1"
if shellPid is "" then error "No active session in Terminal"
return do shell script "lsof -a -p " & shellPid & " -d cwd -Fn | tail -1 | sed 's/^n//'""#
        ),
        Terminal::Iterm => format!(
            r#"{guard}
tell application "iTerm"
    if (count of windows) is 0 then error "No iTerm window found"
    tell current session of current window
        set sessionPath to variable named "session.path"
    end tell
end tell
if sessionPath is missing value or sessionPath is "" then error "No active session in iTerm"
return sessionPath"#
        ),
        Terminal::Warp | Terminal::WezTerm | Terminal::Ghostty | Terminal::Kitty => {
            build_title_script(app)
        }
    }
}

/// Read the front window title through System Events and return it as the
/// working directory.
fn build_title_script(app: Terminal) -> String {
    let name = app.display_name();
    let fragment = window_property_fragment(
        app.process_name(),
        &format!("No {name} window found"),
        "name",
        "winTitle",
    );
    format!(
        r#"{guard}
{fragment}
if winTitle is missing value or winTitle is "" then error "No active session in {name}"
return winTitle"#,
        guard = running_guard(name),
    )
}
