//! Best-effort mapping of sharing URLs onto local files.

use std::path::{Path, PathBuf};

use url::Url;

use super::roots::sync_roots;
use super::segments::{decode_segment, relative_segments, segment_variants};

/// Host fragment that identifies a recognized cloud-document host.
const HOST_MARKER: &str = "sharepoint";

/// Per-user directory under which providers mount their sync roots.
const CONTAINER_SUBDIR: &str = "Library/CloudStorage";

/// Standard library folder probed first inside every sync root.
const LIBRARY_DIR: &str = "Documents";

/// Maps cloud sharing URLs onto files under local sync roots.
///
/// Document applications backed by a cloud drive report `https://`
/// sharing URLs instead of filesystem paths. The mapper re-derives the
/// local file by decoding the URL's path segments and probing them
/// against every sync root found under the per-user cloud-storage
/// container.
///
/// Mapping is a narrow special case, not a general URL resolver: it
/// only proceeds for a recognized host and a path containing a
/// `"documents"` library marker, and every failure along the way is a
/// decline (`None`) rather than an error.
///
/// # Examples
///
/// ```
/// use ferry::cloud::CloudMapper;
///
/// let mapper = CloudMapper::new();
/// // Not a recognized cloud-document host, so the mapper declines.
/// assert_eq!(
///     mapper.map_to_local("https://example.com/sites/Team/Documents/Q1.docx"),
///     None,
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CloudMapper {
    container: Option<PathBuf>,
}

impl CloudMapper {
    /// Create a mapper using the per-user cloud-storage container.
    #[must_use]
    pub const fn new() -> Self {
        Self { container: None }
    }

    /// Create a mapper probing roots under the given container instead.
    #[must_use]
    pub fn with_container(container: impl Into<PathBuf>) -> Self {
        Self {
            container: Some(container.into()),
        }
    }

    /// Map a sharing URL to an existing local file, if one can be found.
    ///
    /// Returns `None` when the input is not a URL, the host is not a
    /// recognized cloud-document host, the path carries no `"documents"`
    /// marker, no sync roots are mounted, or no candidate path names an
    /// existing regular file. Filesystem errors while probing candidates
    /// are treated as "candidate absent".
    #[must_use]
    pub fn map_to_local(&self, url: &str) -> Option<PathBuf> {
        let parsed = Url::parse(url).ok()?;
        let host = parsed.host_str()?;
        if !host.contains(HOST_MARKER) {
            log::debug!("declining {host}: not a recognized cloud document host");
            return None;
        }

        let segments: Vec<String> = parsed
            .path_segments()?
            .map(decode_segment)
            .filter(|segment| !segment.is_empty())
            .collect();
        let Some(relative) = relative_segments(&segments) else {
            log::debug!("declining {url}: no document library marker in path");
            return None;
        };

        let container = self.container_dir()?;
        let roots = sync_roots(&container);
        if roots.is_empty() {
            log::debug!("declining {url}: no sync roots under {}", container.display());
            return None;
        }

        let variants = segment_variants(&relative);
        for root in &roots {
            for variant in &variants {
                for candidate in candidate_paths(root, variant) {
                    if candidate.is_file() {
                        return Some(candidate);
                    }
                }
            }
        }
        log::debug!("no local match for {url}");
        None
    }

    fn container_dir(&self) -> Option<PathBuf> {
        if let Some(container) = &self.container {
            return Some(container.clone());
        }
        home::home_dir().map(|dir| dir.join(CONTAINER_SUBDIR))
    }
}

/// Candidate absolute paths for one root and one segment variant.
///
/// The library `Documents` folder is probed before the root itself,
/// since sharing URLs address the library while some roots sync it
/// directly at their top level.
fn candidate_paths(root: &Path, segments: &[String]) -> [PathBuf; 2] {
    let mut in_library = root.join(LIBRARY_DIR);
    let mut in_root = root.to_path_buf();
    for segment in segments {
        in_library.push(segment);
        in_root.push(segment);
    }
    [in_library, in_root]
}
