//! # Path References
//!
//! Extraction and resolution of declared path-valued fields. Endpoint
//! documents reference other files through a fixed key set (`cache`,
//! `comm`, `pdu_def_path`) plus one nested level: each entry of an
//! `endpoints` array may carry a `config_path`. Documents come as a single
//! object or as an array of objects; array elements contribute their index
//! to the pointer path.
//!
//! Resolution is lexical: relative values are joined onto the owning
//! document's directory and normalized without touching the filesystem,
//! so a missing target still has a concrete absolute path to report.
//! Absolute values pass through unchanged.

use std::path::{Component, Path, PathBuf};

use serde_json::{Map, Value};

use crate::diagnostic::Diagnostic;
use crate::document::JsonDocument;
use crate::rationale::RationaleTable;

/// Path-valued fields extracted directly from a document object.
const REF_KEYS: [&str; 3] = ["cache", "comm", "pdu_def_path"];

/// A declared path reference inside a document.
#[derive(Debug, Clone)]
pub struct Reference {
    /// JSON Pointer to the field holding the reference.
    pub pointer: String,
    /// Field key the reference was extracted from.
    pub key: &'static str,
    /// Raw field value; anything but a string is itself invalid.
    pub value: Value,
}

/// A reference resolved against its document's directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Absolute path the reference denotes.
    pub path: PathBuf,
    /// Whether the path exists on the filesystem.
    pub exists: bool,
}

/// Extract every declared path reference from a document value.
///
/// Top-level keys are emitted only when present and non-null; a null
/// `comm` is the legal cache-only form. `config_path` entries are emitted
/// even when null so the type check can flag them.
pub fn extract_references(value: &Value) -> Vec<Reference> {
    let mut refs = Vec::new();
    match value {
        Value::Object(obj) => collect_object(obj, "", &mut refs),
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                if let Value::Object(obj) = item {
                    collect_object(obj, &format!("/{idx}"), &mut refs);
                }
            }
        }
        _ => {}
    }
    refs
}

fn collect_object(obj: &Map<String, Value>, prefix: &str, out: &mut Vec<Reference>) {
    for key in REF_KEYS {
        if let Some(value) = obj.get(key) {
            if !value.is_null() {
                out.push(Reference {
                    pointer: format!("{prefix}/{key}"),
                    key,
                    value: value.clone(),
                });
            }
        }
    }
    if let Some(Value::Array(endpoints)) = obj.get("endpoints") {
        for (idx, entry) in endpoints.iter().enumerate() {
            if let Some(value) = entry.get("config_path") {
                out.push(Reference {
                    pointer: format!("{prefix}/endpoints/{idx}/config_path"),
                    key: "config_path",
                    value: value.clone(),
                });
            }
        }
    }
}

/// Resolve a raw reference value against a document directory.
pub fn resolve(base_dir: &Path, raw: &str) -> ResolvedPath {
    let raw_path = Path::new(raw);
    let path = if raw_path.is_absolute() {
        raw_path.to_path_buf()
    } else {
        let joined = base_dir.join(raw_path);
        let absolute = if joined.is_absolute() {
            joined
        } else {
            match std::env::current_dir() {
                Ok(cwd) => cwd.join(joined),
                Err(_) => joined,
            }
        };
        normalize(&absolute)
    };
    let exists = path.exists();
    ResolvedPath { path, exists }
}

/// Remove `.` and `..` components lexically.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Check every declared reference in a document.
///
/// Non-string values are `type` diagnostics; strings resolving to a
/// missing file are `exists` diagnostics carrying the resolved absolute
/// path and a suggested remedy.
pub fn check_references(doc: &JsonDocument, table: &RationaleTable) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for reference in extract_references(doc.value()) {
        let Some(raw) = reference.value.as_str() else {
            diagnostics.push(Diagnostic::rule_finding(
                doc.path(),
                reference.pointer,
                "type",
                "invalid path reference (not string).".to_string(),
                table.explain(reference.key),
            ));
            continue;
        };
        let resolved = resolve(doc.dir(), raw);
        if !resolved.exists {
            diagnostics.push(
                Diagnostic::rule_finding(
                    doc.path(),
                    reference.pointer,
                    "exists",
                    format!(
                        "missing referenced file '{raw}' (resolved: '{}').",
                        resolved.path.display()
                    ),
                    table.explain(reference.key),
                )
                .with_remedy(format!(
                    "update '{}' or create the file at the resolved path.",
                    reference.key
                )),
            );
        }
    }
    diagnostics
}
