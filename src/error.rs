use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("not a Quilt workspace (no .quilt manifest in {0})")]
    ManifestNotFound(PathBuf),

    #[error("malformed .quilt manifest: {0}")]
    ManifestParse(String),
}

pub type Result<T> = std::result::Result<T, WorkspaceError>;
