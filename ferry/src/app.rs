//! Application identities known to the resolver.
//!
//! Every application this library can interrogate belongs to one of three
//! closed families: file managers, terminals, and document-based
//! applications. There is no dynamic registration. Adding an application
//! means adding an enum variant and its script branch, and exhaustive
//! matching then forces every dispatch site to handle it.

use std::fmt;

/// File manager applications. These resolve to the folder shown in the
/// front window (or the selected item, for Finder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileManager {
    /// The system Finder.
    Finder,
    /// QSpace Pro, a multi-pane file manager.
    QSpacePro,
    /// Bloom file manager.
    Bloom,
}

impl FileManager {
    /// All file managers, in display order.
    pub const ALL: [Self; 3] = [Self::Finder, Self::QSpacePro, Self::Bloom];

    /// Human-readable application name, as used in scripts and error
    /// messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Finder => "Finder",
            Self::QSpacePro => "QSpace Pro",
            Self::Bloom => "Bloom",
        }
    }
}

impl fmt::Display for FileManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Terminal emulators. These resolve to the working directory of the
/// active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    /// The system Terminal.
    Terminal,
    /// iTerm2.
    Iterm,
    /// Warp.
    Warp,
    /// WezTerm.
    WezTerm,
    /// Ghostty.
    Ghostty,
    /// kitty.
    Kitty,
}

impl Terminal {
    /// All terminals, in display order.
    pub const ALL: [Self; 6] = [
        Self::Terminal,
        Self::Iterm,
        Self::Warp,
        Self::WezTerm,
        Self::Ghostty,
        Self::Kitty,
    ];

    /// Human-readable application name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Terminal => "Terminal",
            Self::Iterm => "iTerm",
            Self::Warp => "Warp",
            Self::WezTerm => "WezTerm",
            Self::Ghostty => "Ghostty",
            Self::Kitty => "kitty",
        }
    }

    /// The process name System Events sees, where it differs from the
    /// display name.
    #[must_use]
    pub const fn process_name(self) -> &'static str {
        match self {
            Self::Iterm => "iTerm2",
            Self::WezTerm => "wezterm-gui",
            other => other.display_name(),
        }
    }

    /// Whether this terminal exposes no scripting interface for the
    /// session path, so the working directory must be read from the front
    /// window title.
    #[must_use]
    pub const fn reads_window_title(self) -> bool {
        matches!(self, Self::Warp | Self::WezTerm | Self::Ghostty | Self::Kitty)
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Document-based applications. These resolve to the file backing the
/// frontmost document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentApp {
    /// Preview.
    Preview,
    /// Skim PDF reader.
    Skim,
    /// PDF Expert.
    PdfExpert,
    /// Adobe Acrobat.
    AdobeAcrobat,
    /// Adobe Acrobat Reader DC.
    AdobeAcrobatReader,
    /// Pages.
    Pages,
    /// Numbers.
    Numbers,
    /// Keynote.
    Keynote,
    /// Microsoft Word.
    Word,
    /// Microsoft Excel.
    Excel,
    /// Microsoft PowerPoint.
    PowerPoint,
    /// TextEdit.
    TextEdit,
    /// BBEdit.
    BBEdit,
    /// TextMate.
    TextMate,
    /// CotEditor.
    CotEditor,
    /// Typora.
    Typora,
    /// Sublime Text.
    SublimeText,
    /// Xcode.
    Xcode,
    /// Visual Studio Code.
    VsCode,
    /// VSCodium.
    VsCodium,
    /// Cursor.
    Cursor,
    /// Windsurf.
    Windsurf,
    /// Zed.
    Zed,
    /// Nova.
    Nova,
    /// IntelliJ IDEA.
    IntelliJIdea,
    /// PyCharm.
    PyCharm,
    /// WebStorm.
    WebStorm,
    /// Obsidian.
    Obsidian,
}

impl DocumentApp {
    /// All document applications, in display order.
    pub const ALL: [Self; 28] = [
        Self::Preview,
        Self::Skim,
        Self::PdfExpert,
        Self::AdobeAcrobat,
        Self::AdobeAcrobatReader,
        Self::Pages,
        Self::Numbers,
        Self::Keynote,
        Self::Word,
        Self::Excel,
        Self::PowerPoint,
        Self::TextEdit,
        Self::BBEdit,
        Self::TextMate,
        Self::CotEditor,
        Self::Typora,
        Self::SublimeText,
        Self::Xcode,
        Self::VsCode,
        Self::VsCodium,
        Self::Cursor,
        Self::Windsurf,
        Self::Zed,
        Self::Nova,
        Self::IntelliJIdea,
        Self::PyCharm,
        Self::WebStorm,
        Self::Obsidian,
    ];

    /// Document applications that can also act as the destination of a
    /// move, not only the source. These are the PDF viewers a document is
    /// commonly handed between.
    pub const DOCUMENT_TARGETS: [Self; 5] = [
        Self::Preview,
        Self::Skim,
        Self::PdfExpert,
        Self::AdobeAcrobat,
        Self::AdobeAcrobatReader,
    ];

    /// Human-readable application name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Preview => "Preview",
            Self::Skim => "Skim",
            Self::PdfExpert => "PDF Expert",
            Self::AdobeAcrobat => "Adobe Acrobat",
            Self::AdobeAcrobatReader => "Adobe Acrobat Reader DC",
            Self::Pages => "Pages",
            Self::Numbers => "Numbers",
            Self::Keynote => "Keynote",
            Self::Word => "Microsoft Word",
            Self::Excel => "Microsoft Excel",
            Self::PowerPoint => "Microsoft PowerPoint",
            Self::TextEdit => "TextEdit",
            Self::BBEdit => "BBEdit",
            Self::TextMate => "TextMate",
            Self::CotEditor => "CotEditor",
            Self::Typora => "Typora",
            Self::SublimeText => "Sublime Text",
            Self::Xcode => "Xcode",
            Self::VsCode => "Visual Studio Code",
            Self::VsCodium => "VSCodium",
            Self::Cursor => "Cursor",
            Self::Windsurf => "Windsurf",
            Self::Zed => "Zed",
            Self::Nova => "Nova",
            Self::IntelliJIdea => "IntelliJ IDEA",
            Self::PyCharm => "PyCharm",
            Self::WebStorm => "WebStorm",
            Self::Obsidian => "Obsidian",
        }
    }

    /// The process name System Events sees, where it differs from the
    /// display name. Window-title strategies address the process, not the
    /// application.
    #[must_use]
    pub const fn process_name(self) -> &'static str {
        match self {
            Self::VsCode => "Code",
            Self::IntelliJIdea => "idea",
            other => other.display_name(),
        }
    }

    /// Whether this application can also be a move destination.
    #[must_use]
    pub fn is_document_target(self) -> bool {
        Self::DOCUMENT_TARGETS.contains(&self)
    }
}

impl fmt::Display for DocumentApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The family an application belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// File manager applications.
    FileManager,
    /// Terminal emulators.
    Terminal,
    /// Document-based applications.
    Document,
}

impl Family {
    /// All families, in display order.
    pub const ALL: [Self; 3] = [Self::FileManager, Self::Terminal, Self::Document];

    /// Lowercase family label used in listings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileManager => "file-manager",
            Self::Terminal => "terminal",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any application the resolver knows about.
///
/// # Examples
///
/// ```
/// use ferry::app::{Application, FileManager};
///
/// let app = Application::FileManager(FileManager::Finder);
/// assert_eq!(app.display_name(), "Finder");
/// assert_eq!(Application::from_name("finder"), Some(app));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Application {
    /// A file manager.
    FileManager(FileManager),
    /// A terminal emulator.
    Terminal(Terminal),
    /// A document-based application.
    Document(DocumentApp),
}

impl Application {
    /// Iterate every known application, file managers first, then
    /// terminals, then document applications.
    pub fn all() -> impl Iterator<Item = Self> {
        FileManager::ALL
            .iter()
            .copied()
            .map(Self::FileManager)
            .chain(Terminal::ALL.iter().copied().map(Self::Terminal))
            .chain(DocumentApp::ALL.iter().copied().map(Self::Document))
    }

    /// The family this application belongs to.
    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::FileManager(_) => Family::FileManager,
            Self::Terminal(_) => Family::Terminal,
            Self::Document(_) => Family::Document,
        }
    }

    /// Returns true for file managers.
    #[must_use]
    pub const fn is_file_manager(self) -> bool {
        matches!(self, Self::FileManager(_))
    }

    /// Returns true for terminal emulators.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Terminal(_))
    }

    /// Returns true for document-based applications.
    #[must_use]
    pub const fn is_document(self) -> bool {
        matches!(self, Self::Document(_))
    }

    /// Human-readable application name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FileManager(app) => app.display_name(),
            Self::Terminal(app) => app.display_name(),
            Self::Document(app) => app.display_name(),
        }
    }

    /// The process name System Events sees for this application.
    #[must_use]
    pub const fn process_name(self) -> &'static str {
        match self {
            Self::FileManager(app) => app.display_name(),
            Self::Terminal(app) => app.process_name(),
            Self::Document(app) => app.process_name(),
        }
    }

    /// Look up an application by name, ignoring case, spaces, hyphens and
    /// underscores, so `"qspace-pro"` and `"QSpace Pro"` both resolve.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferry::app::{Application, DocumentApp};
    ///
    /// let code = Application::from_name("visual-studio-code");
    /// assert_eq!(code, Some(Application::Document(DocumentApp::VsCode)));
    /// assert_eq!(Application::from_name("no such app"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = squash(name);
        Self::all().find(|app| squash(app.display_name()) == wanted)
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Case-fold a name and drop separators for lenient lookup.
fn squash(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
