//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Broad file category used to pick a row icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Torrent,
    Video,
    Audio,
    Image,
    Document,
    Archive,
    Other,
}

impl FileKind {
    /// Guess the category from a file name. Torrent containers are always [`FileKind::Torrent`].
    #[must_use]
    pub fn from_name(name: &str, is_bitorrent: bool) -> Self {
        if is_bitorrent {
            return Self::Torrent;
        }

        let Some(mime) = mime_guess::from_path(name).first() else {
            return Self::Other;
        };

        match (mime.type_().as_str(), mime.subtype().as_str()) {
            ("video", _) => Self::Video,
            ("audio", _) => Self::Audio,
            ("image", _) => Self::Image,
            ("text", _) | ("application", "pdf") | ("application", "msword") => Self::Document,
            ("application", "zip")
            | ("application", "x-7z-compressed")
            | ("application", "vnd.rar")
            | ("application", "x-rar-compressed")
            | ("application", "x-tar")
            | ("application", "gzip") => Self::Archive,
            ("application", "x-bittorrent") => Self::Torrent,
            _ => Self::Other,
        }
    }
}

/// File category icons
#[derive(Debug, Clone)]
pub struct FileIcons {
    pub torrent: &'static str,
    pub video: &'static str,
    pub audio: &'static str,
    pub image: &'static str,
    pub document: &'static str,
    pub archive: &'static str,
    pub other: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub tasks_title: &'static str,
    pub add_title: &'static str,
    pub filter: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

/// Tree and selection markers
#[derive(Debug, Clone)]
pub struct TreeIcons {
    pub expanded: &'static str,
    pub collapsed: &'static str,
    pub selected: &'static str,
    pub unselected: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub files: FileIcons,
    pub ui: UiIcons,
    pub tree: TreeIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            files: FileIcons {
                torrent: "🧲",
                video: "🎬",
                audio: "🎵",
                image: "🖼️",
                document: "📄",
                archive: "📦",
                other: "📁",
            },
            ui: UiIcons {
                tasks_title: "☁️",
                add_title: "➕",
                filter: "🔎",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
            },
            tree: TreeIcons {
                expanded: "🔽",
                collapsed: "▶️",
                selected: "☑️",
                unselected: "⬜",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            files: FileIcons {
                torrent: "⇵",
                video: "▶",
                audio: "♪",
                image: "▣",
                document: "≡",
                archive: "▤",
                other: "◇",
            },
            ui: UiIcons {
                tasks_title: "☁",
                add_title: "✚",
                filter: "⌕",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
            },
            tree: TreeIcons {
                expanded: "▾",
                collapsed: "▸",
                selected: "■",
                unselected: "□",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            files: FileIcons {
                torrent: "T",
                video: "V",
                audio: "A",
                image: "I",
                document: "D",
                archive: "Z",
                other: "-",
            },
            ui: UiIcons {
                tasks_title: ">",
                add_title: "+",
                filter: "/",
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
            },
            tree: TreeIcons {
                expanded: "v",
                collapsed: ">",
                selected: "[x]",
                unselected: "[ ]",
            },
        }
    }

    /// Icon for a file category
    #[must_use]
    pub fn file(&self, kind: FileKind) -> &'static str {
        let files = self.icons().files;
        match kind {
            FileKind::Torrent => files.torrent,
            FileKind::Video => files.video,
            FileKind::Audio => files.audio,
            FileKind::Image => files.image,
            FileKind::Document => files.document,
            FileKind::Archive => files.archive,
            FileKind::Other => files.other,
        }
    }

    #[must_use]
    pub fn tasks_title(&self) -> &'static str {
        self.icons().ui.tasks_title
    }

    #[must_use]
    pub fn add_title(&self) -> &'static str {
        self.icons().ui.add_title
    }

    #[must_use]
    pub fn filter(&self) -> &'static str {
        self.icons().ui.filter
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    #[must_use]
    pub fn tree_marker(&self, expanded: bool) -> &'static str {
        let tree = self.icons().tree;
        if expanded {
            tree.expanded
        } else {
            tree.collapsed
        }
    }

    #[must_use]
    pub fn selection_marker(&self, selected: bool) -> &'static str {
        let tree = self.icons().tree;
        if selected {
            tree.selected
        } else {
            tree.unselected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_switching() {
        let mut service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.set_theme(IconTheme::Ascii);
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_ascii_file_icons() {
        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.file(FileKind::Torrent), "T");
        assert_eq!(service.file(FileKind::Video), "V");
        assert_eq!(service.file(FileKind::Other), "-");
    }

    #[test]
    fn test_file_kind_from_name() {
        assert_eq!(FileKind::from_name("movie.mkv", false), FileKind::Video);
        assert_eq!(FileKind::from_name("cover.JPG", false), FileKind::Image);
        assert_eq!(FileKind::from_name("notes.txt", false), FileKind::Document);
        assert_eq!(FileKind::from_name("bundle.zip", false), FileKind::Archive);
        assert_eq!(FileKind::from_name("movie.mkv", true), FileKind::Torrent);
        assert_eq!(FileKind::from_name("no_extension", false), FileKind::Other);
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.theme(), IconTheme::Ascii);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }
}
