//! Recursive workspace walking and file classification.
//!
//! The walk is exhaustive and sequential: every entry under the root is
//! visited exactly once, and sibling order is an implementation detail
//! callers must not rely on. Unreadable entries are skipped with a
//! warning; they never abort the scan.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use super::snapshot::WorkspaceSnapshot;
use crate::types::{FileEntry, FileKind, ScanSummary};

/// Buckets and counters accumulated while walking.
#[derive(Debug, Default)]
struct ScanState {
    markdown: BTreeMap<String, FileEntry>,
    documents: BTreeMap<String, FileEntry>,
    images: BTreeMap<String, FileEntry>,
    summary: ScanSummary,
}

impl ScanState {
    fn bucket_mut(&mut self, kind: FileKind) -> &mut BTreeMap<String, FileEntry> {
        match kind {
            FileKind::Markdown => &mut self.markdown,
            FileKind::Document => &mut self.documents,
            FileKind::Image => &mut self.images,
        }
    }
}

/// Walks the workspace tree once and builds a fresh snapshot.
///
/// Classification follows the extension rule in [`FileKind::classify`].
/// A matched file whose metadata cannot be read (permissions, deleted
/// mid-walk) is skipped and counted; files outside the three categories
/// are skipped silently. Scanning an unchanged tree again yields an
/// equivalent snapshot.
pub fn scan_workspace(root: &Path) -> WorkspaceSnapshot {
    let mut state = ScanState::default();
    walk(root, root, &mut state);

    log::debug!(
        "scanned {} files under {}: {} markdown, {} documents, {} images, {} skipped",
        state.summary.scanned_files,
        root.display(),
        state.markdown.len(),
        state.documents.len(),
        state.images.len(),
        state.summary.skipped,
    );

    WorkspaceSnapshot::new(state.markdown, state.documents, state.images, state.summary)
}

fn walk(root: &Path, dir: &Path, state: &mut ScanState) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("cannot read directory {}: {err}", dir.display());
            state.summary.skipped += 1;
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("cannot read entry in {}: {err}", dir.display());
                state.summary.skipped += 1;
                continue;
            }
        };

        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                log::warn!("cannot stat {}: {err}", path.display());
                state.summary.skipped += 1;
                continue;
            }
        };

        if file_type.is_dir() {
            state.summary.scanned_dirs += 1;
            walk(root, &path, state);
        } else if file_type.is_file() {
            state.summary.scanned_files += 1;
            let Some(kind) = FileKind::classify(&path) else {
                continue;
            };
            match read_entry(root, &entry, &path) {
                Ok(file_entry) => {
                    state
                        .bucket_mut(kind)
                        .insert(file_entry.relative_id.clone(), file_entry);
                }
                Err(err) => {
                    log::warn!("skipping {}: {err}", path.display());
                    state.summary.skipped += 1;
                }
            }
        }
        // Symlinks and other entry types are not regular files; not indexed
    }
}

fn read_entry(root: &Path, entry: &fs::DirEntry, path: &Path) -> std::io::Result<FileEntry> {
    let metadata = entry.metadata()?;
    let modified_at: DateTime<Utc> = metadata.modified()?.into();

    let relative = path.strip_prefix(root).unwrap_or(path);
    let relative_id = relative.to_string_lossy().into_owned();
    let name = entry.file_name().to_string_lossy().into_owned();

    Ok(FileEntry {
        relative_id,
        name,
        absolute_path: path.to_path_buf(),
        size: metadata.len(),
        modified_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn scan_empty_directory() {
        let temp = TempDir::new().unwrap();
        let snapshot = scan_workspace(temp.path());

        assert!(snapshot.is_empty());
        assert_eq!(snapshot.summary().scanned_files, 0);
    }

    #[test]
    fn scan_classifies_by_extension() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("notes")).unwrap();
        fs::create_dir_all(temp.path().join("papers")).unwrap();
        fs::create_dir_all(temp.path().join("img")).unwrap();
        File::create(temp.path().join("notes/intro.md")).unwrap();
        File::create(temp.path().join("papers/a.pdf")).unwrap();
        File::create(temp.path().join("img/fig1.png")).unwrap();
        File::create(temp.path().join("todo.txt")).unwrap();

        let snapshot = scan_workspace(temp.path());

        assert_eq!(snapshot.entries(FileKind::Markdown).count(), 1);
        assert_eq!(snapshot.entries(FileKind::Document).count(), 1);
        assert_eq!(snapshot.entries(FileKind::Image).count(), 1);
        // The .txt file was visited but not indexed
        assert_eq!(snapshot.summary().scanned_files, 4);
        assert_eq!(snapshot.len(), 3);
    }

    #[test]
    fn scan_matches_uppercase_extensions() {
        let temp = TempDir::new().unwrap();
        File::create(temp.path().join("a.pdf")).unwrap();
        File::create(temp.path().join("b.PDF")).unwrap();

        let snapshot = scan_workspace(temp.path());

        assert_eq!(snapshot.entries(FileKind::Document).count(), 2);
    }

    #[test]
    fn scan_records_metadata() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("papers")).unwrap();
        fs::write(temp.path().join("papers/a.pdf"), b"%PDF-1.4").unwrap();

        let snapshot = scan_workspace(temp.path());
        let entry = snapshot
            .get(FileKind::Document, &join_id("papers", "a.pdf"))
            .unwrap();

        assert_eq!(entry.name, "a.pdf");
        assert_eq!(entry.size, 8);
        assert!(entry.absolute_path.ends_with(Path::new("papers").join("a.pdf")));
    }

    #[test]
    fn scan_is_exhaustive_across_nesting() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/b/c")).unwrap();
        File::create(temp.path().join("top.md")).unwrap();
        File::create(temp.path().join("a/mid.pdf")).unwrap();
        File::create(temp.path().join("a/b/c/deep.png")).unwrap();

        let snapshot = scan_workspace(temp.path());

        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.summary().scanned_dirs, 3);
    }

    #[test]
    fn rescan_of_unchanged_tree_is_equivalent() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("notes")).unwrap();
        fs::write(temp.path().join("notes/intro.md"), "# intro").unwrap();
        fs::write(temp.path().join("paper.pdf"), b"x").unwrap();

        let first = scan_workspace(temp.path());
        let second = scan_workspace(temp.path());

        for kind in [FileKind::Markdown, FileKind::Document, FileKind::Image] {
            let a: Vec<_> = first.entries(kind).collect();
            let b: Vec<_> = second.entries(kind).collect();
            assert_eq!(a, b);
        }
        assert_eq!(first.summary(), second.summary());
    }

    #[cfg(unix)]
    #[test]
    fn scan_survives_unreadable_subdirectory() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        File::create(locked.join("hidden.pdf")).unwrap();
        File::create(temp.path().join("visible.pdf")).unwrap();

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        let snapshot = scan_workspace(temp.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // The locked subtree is skipped, the rest of the scan completes
        assert_eq!(snapshot.entries(FileKind::Document).count(), 1);
        assert_eq!(snapshot.summary().skipped, 1);
    }

    fn join_id(dir: &str, file: &str) -> String {
        Path::new(dir).join(file).to_string_lossy().into_owned()
    }
}
