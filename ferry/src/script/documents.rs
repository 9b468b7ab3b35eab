//! Scripts for document-based applications.
//!
//! Document applications resolve to the file backing the frontmost
//! document. The path-like property differs per application family:
//!
//! - scriptable editors and the iWork suite expose a document `file`
//!   (an alias) or `path` (text) property,
//! - the Office suite exposes `full name`, which for a cloud-synced
//!   document is an `https://` URL string rather than a path on disk,
//! - Preview-style PDF viewers expose nothing through scripting, but the
//!   front window carries an `AXDocument` accessibility attribute holding
//!   a `file://` URL,
//! - IDE-style applications expose no path property at all; for those the
//!   window title is parsed instead.
//!
//! The title parse splits on `" - "`, takes the second-to-last piece when
//! the title has several, and strips a trailing `" [...]"` marker. Titles
//! that legitimately contain `" - "` in the document name defeat it; no
//! better signal is available from those applications, so the heuristic is
//! kept as-is.

use super::{running_guard, window_property_fragment};
use crate::app::DocumentApp;

/// Build the resolution script for a document application.
pub(super) fn build(app: DocumentApp) -> String {
    use DocumentApp as D;
    match app {
        D::Preview | D::PdfExpert | D::AdobeAcrobatReader => build_ax_document_script(app),
        D::AdobeAcrobat => build_acrobat_script(),
        D::Pages | D::Numbers | D::Keynote | D::Skim | D::BBEdit | D::CotEditor => {
            build_file_property_script(app)
        }
        D::TextEdit | D::TextMate | D::Xcode => build_path_property_script(app),
        D::Word => build_office_script(app, "document"),
        D::Excel => build_office_script(app, "workbook"),
        D::PowerPoint => build_office_script(app, "presentation"),
        D::Typora
        | D::SublimeText
        | D::VsCode
        | D::VsCodium
        | D::Cursor
        | D::Windsurf
        | D::Zed
        | D::Nova
        | D::IntelliJIdea
        | D::PyCharm
        | D::WebStorm
        | D::Obsidian => build_title_script(app),
    }
}

/// Read the `AXDocument` attribute of the front window. The value is a
/// `file://` URL; decoding it is the normalizer's job.
fn build_ax_document_script(app: DocumentApp) -> String {
    let name = app.display_name();
    let no_document = format!("No document open in {name}");
    let fragment = window_property_fragment(
        app.process_name(),
        &no_document,
        r#"value of attribute "AXDocument""#,
        "docUrl",
    );
    format!(
        r#"{guard}
{fragment}
if docUrl is missing value then error "{no_document}"
return docUrl"#,
        guard = running_guard(name),
    )
}

/// Adobe Acrobat has a real scripting dictionary; the active document
/// exposes its file alias directly.
fn build_acrobat_script() -> String {
    let guard = running_guard("Adobe Acrobat");
    format!(
        r#"{guard}
tell application "Adobe Acrobat"
    if (count of documents) is 0 then error "No document open in Adobe Acrobat"
    return POSIX path of (file alias of active doc as alias)
end tell"#
    )
}

/// Read the document's `file` property (an alias) and convert it to a
/// POSIX path. Unsaved documents report `missing value`.
fn build_file_property_script(app: DocumentApp) -> String {
    let name = app.display_name();
    format!(
        r#"{guard}
tell application "{name}"
    if (count of documents) is 0 then error "No document open in {name}"
    set theFile to file of front document
    if theFile is missing value then error "Document not saved"
    return POSIX path of (theFile as alias)
end tell"#,
        guard = running_guard(name),
    )
}

/// Read the document's `path` property, which is already POSIX text.
fn build_path_property_script(app: DocumentApp) -> String {
    let name = app.display_name();
    format!(
        r#"{guard}
tell application "{name}"
    if (count of documents) is 0 then error "No document open in {name}"
    set docPath to path of front document
    if docPath is missing value or docPath is "" then error "Document not saved"
    return docPath
end tell"#,
        guard = running_guard(name),
    )
}

/// Office applications report `full name`, which is a local path for
/// on-disk documents and an `https://` URL for cloud-synced ones. The raw
/// value is returned either way; classification happens downstream.
fn build_office_script(app: DocumentApp, noun: &str) -> String {
    let name = app.display_name();
    format!(
        r#"{guard}
tell application "{name}"
    if (count of {noun}s) is 0 then error "No active {noun}"
    set docPath to full name of active {noun}
    if docPath is missing value or docPath is "" then error "Document not saved"
    return docPath
end tell"#,
        guard = running_guard(name),
    )
}

/// Parse the front window title. Best-effort: yields the second-to-last
/// `" - "`-separated piece with any trailing `" [...]"` marker removed.
fn build_title_script(app: DocumentApp) -> String {
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
if winTitle is missing value or winTitle is "" then error "No active document"
set AppleScript's text item delimiters to " - "
set titleParts to text items of winTitle
set AppleScript's text item delimiters to ""
if (count of titleParts) > 1 then
    set docName to item ((count of titleParts) - 1) of titleParts
else
    set docName to item 1 of titleParts
end if
set bracketPos to offset of " [" in docName
if bracketPos > 0 then set docName to text 1 thru (bracketPos - 1) of docName
return docName"#,
        guard = running_guard(name),
    )
}
