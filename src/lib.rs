//! Workspace indexing and lookup for Quilt document workspaces.
//!
//! A workspace is a directory tree rooted at a folder that carries a
//! `.quilt` manifest. This crate is the engine behind a workspace UI:
//! - Manifest loading (`.quilt`, YAML)
//! - A one-pass scanner that classifies files into typed category buckets
//! - Read-only lookups against the immutable snapshot a scan produces

pub mod error;
pub mod index;
pub mod manifest;
pub mod types;
pub mod workspace;

// Re-export main types
pub use error::{Result, WorkspaceError};
pub use index::{scan_workspace, WorkspaceSnapshot};
pub use manifest::{WorkspaceManifest, DEFAULT_WORKSPACE_NAME, MANIFEST_FILE_NAME};
pub use types::{FileEntry, FileKind, ScanSummary};
pub use workspace::Workspace;
