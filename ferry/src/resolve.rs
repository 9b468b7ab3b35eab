//! Resolution of an application's current location.
//!
//! The resolver ties the other modules together: it builds the script
//! for an application, hands it to a [`ScriptRunner`], normalizes the
//! raw output, and for document applications maps cloud sharing URLs
//! onto local files. Each resolution is a fresh, stateless request; no
//! state survives from one call to the next.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::{Application, DocumentApp, FileManager, Terminal};
use crate::cloud::CloudMapper;
use crate::error::{Error, Result};
use crate::exec::ScriptRunner;
use crate::normalize::normalize_result;
use crate::script::build_script;

/// Where a document application's frontmost document lives.
///
/// The two fields are deliberately separate. `document_path` is what the
/// application reported and is always non-empty; `resolved_path` is the
/// best local path for it and may be empty when the document lives on a
/// cloud drive with no synced copy. Callers can then still present the
/// cloud location even though there is nothing local to open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLocation {
    /// The normalized path the application reported. May be a cloud
    /// sharing URL rather than a filesystem path.
    pub document_path: String,
    /// The best local path for the document: `document_path` itself when
    /// that was already local, the synced copy for a cloud URL, or empty
    /// when a cloud URL had no local match.
    pub resolved_path: String,
}

impl DocumentLocation {
    /// Whether a usable local path was found.
    #[must_use]
    pub fn has_local_path(&self) -> bool {
        !self.resolved_path.is_empty()
    }
}

/// Resolves the current location of known applications.
///
/// The runner is the only collaborator with side effects, so tests
/// substitute a [`MockScriptRunner`](crate::exec::MockScriptRunner) and
/// drive the whole pipeline with canned script output.
///
/// # Examples
///
/// ```
/// use ferry::app::FileManager;
/// use ferry::exec::MockScriptRunner;
/// use ferry::resolve::Resolver;
///
/// let runner = MockScriptRunner::with_output("/Users/pat/Desktop\n");
/// let resolver = Resolver::new(runner);
/// let path = resolver.file_manager_path(FileManager::Finder).unwrap();
/// assert_eq!(path, "/Users/pat/Desktop");
/// ```
#[derive(Debug)]
pub struct Resolver<R: ScriptRunner> {
    runner: R,
    mapper: CloudMapper,
}

impl<R: ScriptRunner> Resolver<R> {
    /// Create a resolver using the default cloud mapper.
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            mapper: CloudMapper::new(),
        }
    }

    /// Create a resolver with an explicitly configured cloud mapper.
    #[must_use]
    pub fn with_mapper(runner: R, mapper: CloudMapper) -> Self {
        Self { runner, mapper }
    }

    /// Resolve the folder a file manager is showing.
    ///
    /// # Errors
    ///
    /// Fails with the script's own error text when a precondition inside
    /// the script is not met, or with an empty-path error when the script
    /// succeeded but yielded nothing usable.
    pub fn file_manager_path(&self, app: FileManager) -> Result<String> {
        self.run_and_normalize(Application::FileManager(app))
    }

    /// Resolve the working directory of a terminal's active session.
    ///
    /// For terminals without a scripting interface this is the front
    /// window title, which usually carries the directory but is not
    /// guaranteed to be a plain path.
    ///
    /// # Errors
    ///
    /// Fails with the script's own error text when a precondition inside
    /// the script is not met, or with an empty-path error when the script
    /// succeeded but yielded nothing usable.
    pub fn terminal_path(&self, app: Terminal) -> Result<String> {
        self.run_and_normalize(Application::Terminal(app))
    }

    /// Resolve where a document application's frontmost document lives.
    ///
    /// When the reported path is URL-shaped, the cloud mapper looks for a
    /// locally synced copy. A cloud path without a local match is not an
    /// error; the returned location then has an empty `resolved_path`.
    ///
    /// # Errors
    ///
    /// Fails with the script's own error text when a precondition inside
    /// the script is not met, or with an empty-path error when the script
    /// succeeded but yielded nothing usable.
    pub fn document_location(&self, app: DocumentApp) -> Result<DocumentLocation> {
        let document_path = self.run_and_normalize(Application::Document(app))?;
        let resolved_path = if is_url_shaped(&document_path) {
            self.mapper
                .map_to_local(&document_path)
                .map(|path| path.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            document_path.clone()
        };
        Ok(DocumentLocation {
            document_path,
            resolved_path,
        })
    }

    /// Resolve the best local path for any application.
    ///
    /// Dispatches on the application's family. Document applications fall
    /// back to the raw document path when a cloud URL has no local match,
    /// so the result is always non-empty.
    ///
    /// # Errors
    ///
    /// Fails with the script's own error text when a precondition inside
    /// the script is not met, or with an empty-path error when the script
    /// succeeded but yielded nothing usable.
    pub fn source_path(&self, app: Application) -> Result<String> {
        match app {
            Application::FileManager(app) => self.file_manager_path(app),
            Application::Terminal(app) => self.terminal_path(app),
            Application::Document(app) => {
                let location = self.document_location(app)?;
                if location.has_local_path() {
                    Ok(location.resolved_path)
                } else {
                    Ok(location.document_path)
                }
            }
        }
    }

    fn run_and_normalize(&self, app: Application) -> Result<String> {
        let script = build_script(app);
        let raw = self.runner.run(&script)?;
        let path = normalize_result(&raw);
        if path.is_empty() {
            return Err(Error::EmptyPath {
                app: app.display_name().to_string(),
            });
        }
        log::debug!("{} reports {path}", app.display_name());
        Ok(path)
    }
}

/// Whether a normalized path is really a URL.
///
/// A scheme marker anywhere in the string counts, so paths that merely
/// mention `http` without a scheme do not.
fn is_url_shaped(path: &str) -> bool {
    path.contains("http://") || path.contains("https://")
}

/// The directory an "open" action should target for a resolved path.
///
/// An existing regular file opens into its containing directory. A
/// directory, a path that does not exist, or a path that cannot be
/// inspected is returned unchanged; a failure to open surfaces
/// downstream, not here.
#[must_use]
pub fn resolve_open_target(path: &Path) -> PathBuf {
    if path.is_file() {
        if let Some(parent) = path.parent() {
            return parent.to_path_buf();
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::MockScriptRunner;
    use std::fs;
    use tempfile::TempDir;

    fn cloud_resolver(
        runner: MockScriptRunner,
        container: &Path,
    ) -> Resolver<MockScriptRunner> {
        Resolver::with_mapper(runner, CloudMapper::with_container(container))
    }

    #[test]
    fn test_file_manager_path_trims_output() {
        let runner = MockScriptRunner::with_output("/Users/pat/Desktop\n");
        let resolver = Resolver::new(runner);
        assert_eq!(
            resolver.file_manager_path(FileManager::Finder).unwrap(),
            "/Users/pat/Desktop"
        );
    }

    #[test]
    fn test_file_manager_path_decodes_file_url() {
        let runner = MockScriptRunner::with_output("file:///Users/pat/My%20Folder\n");
        let resolver = Resolver::new(runner);
        assert_eq!(
            resolver.file_manager_path(FileManager::Finder).unwrap(),
            "/Users/pat/My Folder"
        );
    }

    #[test]
    fn test_runs_the_script_for_the_requested_app() {
        let runner = MockScriptRunner::with_output("/tmp\n");
        let resolver = Resolver::new(&runner);
        resolver.file_manager_path(FileManager::QSpacePro).unwrap();

        let seen = runner.seen_scripts();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains("QSpace Pro"));
    }

    #[test]
    fn test_empty_result_becomes_descriptive_error() {
        let runner = MockScriptRunner::with_output("missing value\n");
        let resolver = Resolver::new(runner);
        let err = resolver.file_manager_path(FileManager::Finder).unwrap_err();
        assert_eq!(err.to_string(), "Finder returned an empty path");
    }

    #[test]
    fn test_script_error_text_passes_through_verbatim() {
        let runner = MockScriptRunner::with_error("No document open in Preview");
        let resolver = Resolver::new(runner);
        let err = resolver
            .document_location(DocumentApp::Preview)
            .unwrap_err();
        assert!(err.is_script_failure());
        assert_eq!(err.to_string(), "No document open in Preview");
    }

    #[test]
    fn test_terminal_path_returns_title_text() {
        // Title terminals report whatever the window title holds.
        let runner = MockScriptRunner::with_output("~/project\n");
        let resolver = Resolver::new(runner);
        assert_eq!(
            resolver.terminal_path(Terminal::Ghostty).unwrap(),
            "~/project"
        );
    }

    #[test]
    fn test_document_location_for_local_path() {
        let runner = MockScriptRunner::with_output("/Users/pat/Documents/Q1.docx\n");
        let resolver = Resolver::new(runner);
        let location = resolver.document_location(DocumentApp::Word).unwrap();
        assert_eq!(location.document_path, "/Users/pat/Documents/Q1.docx");
        assert_eq!(location.resolved_path, "/Users/pat/Documents/Q1.docx");
        assert!(location.has_local_path());
    }

    #[test]
    fn test_document_location_cloud_url_without_local_match() {
        let dir = TempDir::new().unwrap();
        let url = "https://contoso.sharepoint.com/sites/Team/Documents/Reports/Q1.docx";
        let resolver = cloud_resolver(
            MockScriptRunner::with_output(format!("{url}\n")),
            dir.path(),
        );

        let location = resolver.document_location(DocumentApp::Word).unwrap();
        assert_eq!(location.document_path, url);
        assert_eq!(location.resolved_path, "");
        assert!(!location.has_local_path());
    }

    #[test]
    fn test_document_location_cloud_url_with_local_match() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("OneDrive-Contoso/Documents/Reports/Q1.docx");
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, b"q1").unwrap();

        let resolver = cloud_resolver(
            MockScriptRunner::with_output(
                "https://contoso.sharepoint.com/sites/Team/Documents/Reports/Q1.docx\n",
            ),
            dir.path(),
        );

        let location = resolver.document_location(DocumentApp::Word).unwrap();
        assert_eq!(location.resolved_path, target.to_string_lossy());
        assert!(location.has_local_path());
    }

    #[test]
    fn test_source_path_dispatches_by_family() {
        let runner = MockScriptRunner::with_output("/Users/pat/src\n");
        let resolver = Resolver::new(&runner);
        assert_eq!(
            resolver
                .source_path(Application::Terminal(Terminal::Iterm))
                .unwrap(),
            "/Users/pat/src"
        );
        assert_eq!(
            resolver
                .source_path(Application::FileManager(FileManager::Bloom))
                .unwrap(),
            "/Users/pat/src"
        );
    }

    #[test]
    fn test_source_path_prefers_mapped_local_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("OneDrive-Contoso/Documents/Q1.docx");
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, b"q1").unwrap();

        let resolver = cloud_resolver(
            MockScriptRunner::with_output(
                "https://contoso.sharepoint.com/sites/Team/Documents/Q1.docx\n",
            ),
            dir.path(),
        );

        let path = resolver
            .source_path(Application::Document(DocumentApp::Word))
            .unwrap();
        assert_eq!(path, target.to_string_lossy());
    }

    #[test]
    fn test_source_path_falls_back_to_document_path() {
        let dir = TempDir::new().unwrap();
        let url = "https://contoso.sharepoint.com/sites/Team/Documents/Q1.docx";
        let resolver = cloud_resolver(
            MockScriptRunner::with_output(format!("{url}\n")),
            dir.path(),
        );

        let path = resolver
            .source_path(Application::Document(DocumentApp::Word))
            .unwrap();
        assert_eq!(path, url);
    }

    #[test]
    fn test_url_shaped_detection() {
        assert!(is_url_shaped("https://contoso.sharepoint.com/x"));
        assert!(is_url_shaped("http://example.com/x"));
        // A scheme marker anywhere in the string counts.
        assert!(is_url_shaped("see https://example.com/x"));
        assert!(!is_url_shaped("/Users/pat/http-notes.txt"));
        assert!(!is_url_shaped(""));
    }

    #[test]
    fn test_open_target_for_file_is_parent() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("Q1.docx");
        fs::write(&file, b"q1").unwrap();
        assert_eq!(resolve_open_target(&file), dir.path());
    }

    #[test]
    fn test_open_target_for_directory_is_itself() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_open_target(dir.path()), dir.path());
    }

    #[test]
    fn test_open_target_for_missing_path_is_unchanged() {
        let missing = Path::new("/no/such/path/Q1.docx");
        assert_eq!(resolve_open_target(missing), missing);
    }

    #[test]
    fn test_document_location_serializes_to_json() {
        let location = DocumentLocation {
            document_path: "https://contoso.sharepoint.com/sites/Team/Documents/Q1.docx"
                .to_string(),
            resolved_path: String::new(),
        };
        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(
            json["document_path"],
            "https://contoso.sharepoint.com/sites/Team/Documents/Q1.docx"
        );
        assert_eq!(json["resolved_path"], "");
    }
}
