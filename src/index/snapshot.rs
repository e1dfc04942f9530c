//! The immutable result of one scan pass.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::types::{FileEntry, FileKind, ScanSummary};

/// Index of one scan pass over the workspace tree.
///
/// The three buckets are disjoint by construction (a file name has one
/// extension) and keyed by `relative_id`, so iteration order is
/// deterministic regardless of directory traversal order. A snapshot is
/// never mutated after construction; re-scanning replaces it wholesale.
#[derive(Debug, Clone)]
pub struct WorkspaceSnapshot {
    markdown: BTreeMap<String, FileEntry>,
    documents: BTreeMap<String, FileEntry>,
    images: BTreeMap<String, FileEntry>,
    summary: ScanSummary,
    generated_at: DateTime<Utc>,
}

impl WorkspaceSnapshot {
    pub(crate) fn new(
        markdown: BTreeMap<String, FileEntry>,
        documents: BTreeMap<String, FileEntry>,
        images: BTreeMap<String, FileEntry>,
        summary: ScanSummary,
    ) -> Self {
        Self {
            markdown,
            documents,
            images,
            summary,
            generated_at: Utc::now(),
        }
    }

    fn bucket(&self, kind: FileKind) -> &BTreeMap<String, FileEntry> {
        match kind {
            FileKind::Markdown => &self.markdown,
            FileKind::Document => &self.documents,
            FileKind::Image => &self.images,
        }
    }

    /// Entries of one category, in ascending `relative_id` order.
    pub fn entries(&self, kind: FileKind) -> impl Iterator<Item = &FileEntry> {
        self.bucket(kind).values()
    }

    /// Looks up a single entry by its relative path.
    pub fn get(&self, kind: FileKind, relative_id: &str) -> Option<&FileEntry> {
        self.bucket(kind).get(relative_id)
    }

    /// Finds a document by its display name (exact, case-sensitive match
    /// on [`FileEntry::name`]).
    ///
    /// Display names are not unique across subdirectories. When several
    /// documents share a name, the entry with the lexicographically
    /// smallest `relative_id` wins, which bucket ordering makes
    /// deterministic.
    pub fn find_document_by_name(&self, name: &str) -> Option<&FileEntry> {
        self.documents.values().find(|entry| entry.name == name)
    }

    /// Total number of indexed entries across all buckets.
    pub fn len(&self) -> usize {
        self.markdown.len() + self.documents.len() + self.images.len()
    }

    /// Returns true if no files were indexed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counters from the scan that produced this snapshot.
    pub fn summary(&self) -> ScanSummary {
        self.summary
    }

    /// When this snapshot was built.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}
