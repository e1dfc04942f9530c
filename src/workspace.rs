//! Opening a workspace and serving lookups against its snapshot.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Result, WorkspaceError};
use crate::index::{scan_workspace, WorkspaceSnapshot};
use crate::manifest::WorkspaceManifest;
use crate::types::{FileEntry, FileKind};

/// An opened Quilt workspace.
///
/// Construction is all-or-nothing: the manifest must load before any
/// scanning happens, and no partial workspace is ever exposed. The value
/// is meant to be passed explicitly to whatever presents it; there is no
/// ambient singleton.
///
/// The current snapshot is handed out as an `Arc`, so an interactive
/// thread can keep querying a consistent view while [`Workspace::rescan`]
/// swaps in a replacement.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    manifest: WorkspaceManifest,
    snapshot: RwLock<Arc<WorkspaceSnapshot>>,
}

impl Workspace {
    /// Opens the workspace rooted at `root`: loads `<root>/.quilt`, then
    /// eagerly scans the whole tree.
    ///
    /// Fails if `root` is not an existing directory, if the manifest is
    /// missing, or if it does not parse. Per-file problems during the
    /// scan are logged and tolerated instead.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(WorkspaceError::NotADirectory(root.to_path_buf()));
        }
        let root = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());

        let manifest = WorkspaceManifest::load(&root)?;
        let snapshot = Arc::new(scan_workspace(&root));
        log::info!(
            "opened workspace {:?} at {} ({} entries)",
            manifest.name(),
            root.display(),
            snapshot.len(),
        );

        Ok(Self {
            root,
            manifest,
            snapshot: RwLock::new(snapshot),
        })
    }

    /// Workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The parsed `.quilt` manifest.
    pub fn manifest(&self) -> &WorkspaceManifest {
        &self.manifest
    }

    /// Human-readable workspace name from the manifest.
    pub fn manifest_name(&self) -> &str {
        self.manifest.name()
    }

    /// Current snapshot handle. Cloning the `Arc` is cheap; queries on it
    /// need no locking because snapshots are immutable.
    pub fn snapshot(&self) -> Arc<WorkspaceSnapshot> {
        self.snapshot.read().clone()
    }

    /// Re-walks the tree and atomically replaces the published snapshot.
    ///
    /// Published snapshots are never edited in place; readers holding the
    /// previous `Arc` keep the view they had. Returns the new snapshot.
    pub fn rescan(&self) -> Arc<WorkspaceSnapshot> {
        let fresh = Arc::new(scan_workspace(&self.root));
        *self.snapshot.write() = Arc::clone(&fresh);
        log::debug!(
            "rescanned {} ({} entries)",
            self.root.display(),
            fresh.len(),
        );
        fresh
    }

    /// Resolves a document display name against the current snapshot.
    ///
    /// This backs a navigation view's selection events; see
    /// [`WorkspaceSnapshot::find_document_by_name`] for the duplicate-name
    /// policy. For repeated queries, hold [`Workspace::snapshot`] instead.
    pub fn find_document_by_name(&self, name: &str) -> Option<FileEntry> {
        self.snapshot.read().find_document_by_name(name).cloned()
    }

    /// Entries of one category from the current snapshot, in ascending
    /// `relative_id` order.
    pub fn entries(&self, kind: FileKind) -> Vec<FileEntry> {
        self.snapshot.read().entries(kind).cloned().collect()
    }
}
