//! # Parsed Documents
//!
//! A [`JsonDocument`] is a parsed JSON value tied to its source path and
//! parent directory. The directory is what relative path references inside
//! the document resolve against, so it travels with the value.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::diagnostic::Diagnostic;

/// A parsed JSON document, immutable after load.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    path: PathBuf,
    dir: PathBuf,
    value: Value,
}

impl JsonDocument {
    /// Read and parse a JSON file.
    ///
    /// A file that cannot be read or is not valid JSON is a per-document
    /// [`Diagnostic`], not a run-level error; the caller records it and
    /// moves on to the next document.
    pub fn load(path: &Path) -> Result<Self, Diagnostic> {
        let text = fs::read_to_string(path)
            .map_err(|e| Diagnostic::load_failure(path, format!("read error: {e}")))?;
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| Diagnostic::load_failure(path, format!("JSON parse error: {e}")))?;
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        Ok(Self { path: path.to_path_buf(), dir, value })
    }

    /// Path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the document; base for relative references.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The parsed JSON value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}
