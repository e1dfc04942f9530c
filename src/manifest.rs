//! Loading and parsing of the `.quilt` workspace manifest.
//!
//! The manifest is a YAML mapping located directly inside the workspace
//! root. Only `name` is recognized today; everything else is preserved
//! verbatim so future fields round-trip through older builds.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{Result, WorkspaceError};

/// File name of the workspace manifest, located directly inside the root.
pub const MANIFEST_FILE_NAME: &str = ".quilt";

/// Name reported when the manifest has no `name` field.
pub const DEFAULT_WORKSPACE_NAME: &str = "Untitled Workspace";

/// Parsed `.quilt` manifest. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceManifest {
    name: String,
    raw: Mapping,
}

impl WorkspaceManifest {
    /// Loads the manifest from `<root>/.quilt`.
    ///
    /// A missing file is [`WorkspaceError::ManifestNotFound`]; any other
    /// read failure is an IO error. Both are fatal to opening the
    /// workspace.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(MANIFEST_FILE_NAME);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(WorkspaceError::ManifestNotFound(root.to_path_buf()))
            }
            Err(err) => return Err(WorkspaceError::Io(err)),
        };
        Self::parse(&text)
    }

    /// Parses manifest text. An empty document is a valid manifest.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(text)
            .map_err(|err| WorkspaceError::ManifestParse(err.to_string()))?;
        let raw = match value {
            Value::Null => Mapping::new(),
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(WorkspaceError::ManifestParse(format!(
                    "expected a mapping at the document root, got {}",
                    value_kind(&other)
                )))
            }
        };
        let name = match raw.get("name") {
            None | Some(Value::Null) => DEFAULT_WORKSPACE_NAME.to_string(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(WorkspaceError::ManifestParse(format!(
                    "`name` must be a string, got {}",
                    value_kind(other)
                )))
            }
        };
        Ok(Self { name, raw })
    }

    /// Human-readable workspace name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full parsed manifest, unrecognized fields included.
    pub fn raw(&self) -> &Mapping {
        &self.raw
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
