//! Workspace scanning and the snapshot it produces.
//!
//! Indexing is a single synchronous pass:
//! 1. **Scan** (`scan`): walk the workspace tree once, classifying files
//!    by extension into category buckets
//! 2. **Snapshot** (`snapshot`): the immutable result served to lookups
//!
//! A snapshot is never edited in place. Re-scanning builds a brand-new
//! snapshot, so readers are free to keep querying an old one.

mod scan;
mod snapshot;

// Re-export main types
pub use scan::scan_workspace;
pub use snapshot::WorkspaceSnapshot;
