//! Discovery of locally mounted cloud sync roots.

use std::path::{Path, PathBuf};

/// Name prefix a container entry must carry to count as a sync root.
const PROVIDER_PREFIX: &str = "OneDrive";

/// List the sync roots mounted under the given container directory.
///
/// A root is a directory entry whose name starts with the provider
/// prefix. Roots are recomputed on every call so the result always
/// reflects the current mount state, and they are returned sorted so
/// that candidate probing is deterministic. A missing or unreadable
/// container yields an empty list, never an error.
pub(crate) fn sync_roots(container: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(container) else {
        log::debug!("cloud container {} is not readable", container.display());
        return Vec::new();
    };

    let mut roots: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(PROVIDER_PREFIX))
        })
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    roots.sort();
    roots
}
