//! Core record types for indexed workspace files.
//!
//! These are the result types handed to a presentation layer. The UI only
//! borrows names and paths; nothing here is mutated after a scan.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of an indexed file, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Markdown,
    Document,
    Image,
}

impl FileKind {
    /// Classifies a path by its extension (ASCII case-insensitive).
    ///
    /// Returns `None` for files outside the three indexed categories;
    /// those are never indexed and never an error.
    pub fn classify(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "md" => Some(Self::Markdown),
            "pdf" => Some(Self::Document),
            "png" | "jpg" | "jpeg" | "gif" => Some(Self::Image),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Document => "document",
            Self::Image => "image",
        }
    }
}

/// One indexed file.
///
/// Created during a scan pass and never mutated; a re-scan replaces the
/// whole collection rather than editing entries in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the workspace root; the unique key within a bucket.
    pub relative_id: String,
    /// Base file name with extension, the human-facing lookup key.
    pub name: String,
    /// Fully resolved path for opening the file.
    pub absolute_path: PathBuf,
    /// File size in bytes.
    pub size: u64,
    /// Last-modified time of the file.
    pub modified_at: DateTime<Utc>,
}

/// Counters accumulated over one scan pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Regular files visited, indexed or not.
    pub scanned_files: usize,
    /// Subdirectories entered during the walk.
    pub scanned_dirs: usize,
    /// Entries skipped because they could not be read.
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_known_extensions() {
        assert_eq!(
            FileKind::classify(Path::new("notes/intro.md")),
            Some(FileKind::Markdown)
        );
        assert_eq!(
            FileKind::classify(Path::new("papers/a.pdf")),
            Some(FileKind::Document)
        );
        for image in ["fig.png", "fig.jpg", "fig.jpeg", "fig.gif"] {
            assert_eq!(FileKind::classify(Path::new(image)), Some(FileKind::Image));
        }
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(
            FileKind::classify(Path::new("papers/b.PDF")),
            Some(FileKind::Document)
        );
        assert_eq!(
            FileKind::classify(Path::new("README.MD")),
            Some(FileKind::Markdown)
        );
        assert_eq!(
            FileKind::classify(Path::new("img/fig1.Png")),
            Some(FileKind::Image)
        );
    }

    #[test]
    fn classify_rejects_everything_else() {
        assert_eq!(FileKind::classify(Path::new("a.txt")), None);
        assert_eq!(FileKind::classify(Path::new("archive.tar.gz")), None);
        assert_eq!(FileKind::classify(Path::new("no_extension")), None);
        // Dotfiles have no extension, so the manifest itself is never indexed
        assert_eq!(FileKind::classify(Path::new(".quilt")), None);
    }
}
