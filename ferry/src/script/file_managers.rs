//! Scripts for file manager applications.
//!
//! File managers resolve to a folder: the selected item for Finder, or the
//! folder shown in the front window otherwise.

use super::running_guard;
use crate::app::FileManager;

/// Build the resolution script for a file manager.
pub(super) fn build(app: FileManager) -> String {
    let guard = running_guard(app.display_name());
    match app {
        // Selection wins over the window target so that a file selected on
        // the desktop resolves even with no window open.
        FileManager::Finder => format!(
            r#"{guard}
tell application "Finder"
    set sel to selection
    if (count of sel) > 0 then
        return POSIX path of (item 1 of sel as alias)
    end if
    if (count of windows) is 0 then error "No Finder window found"
    return POSIX path of (target of front window as alias)
end tell"#
        ),
        FileManager::QSpacePro => format!(
            r#"{guard}
tell application "QSpace Pro"
    if (count of windows) is 0 then error "No QSpace Pro window found"
    return path of current folder of front window
end tell"#
        ),
        FileManager::Bloom => format!(
            r#"{guard}
tell application "Bloom"
    if (count of windows) is 0 then error "No Bloom window found"
    return POSIX path of (folder of front window as alias)
end tell"#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finder_prefers_selection() {
        let script = build(FileManager::Finder);
        let selection = script.find("selection").unwrap();
        let target = script.find("target of front window").unwrap();
        assert!(selection < target);
    }

    #[test]
    fn test_finder_window_guard() {
        let script = build(FileManager::Finder);
        assert!(script.contains("No Finder window found"));
        assert!(script.contains("POSIX path"));
    }

    #[test]
    fn test_qspace_reads_current_folder() {
        let script = build(FileManager::QSpacePro);
        assert!(script.contains(r#"tell application "QSpace Pro""#));
        assert!(script.contains("path of current folder of front window"));
        assert!(script.contains("No QSpace Pro window found"));
    }

    #[test]
    fn test_bloom_reads_window_folder() {
        let script = build(FileManager::Bloom);
        assert!(script.contains(r#"tell application "Bloom""#));
        assert!(script.contains("folder of front window"));
        assert!(script.contains("No Bloom window found"));
    }
}
