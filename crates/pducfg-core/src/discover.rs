//! # Document Discovery
//!
//! Expands a list of input paths into a deterministic sequence of
//! candidate documents. Files named explicitly pass through untouched;
//! directories are walked recursively for `.json` files and sorted
//! lexicographically by full path so repeated runs over the same tree
//! report in the same order regardless of filesystem enumeration order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Filename markers identifying PDU-definition documents.
const PDUDEF_MARKERS: [&str; 2] = ["pdudef", "pdu_def"];

/// Suffix identifying schema files, never treated as PDU definitions.
const SCHEMA_SUFFIX: &str = ".schema.json";

/// Which document family a discovery pass is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoverKind {
    /// Any JSON document (endpoint/comm configs).
    Config,
    /// PDU-definition documents, selected by filename heuristic.
    PduDefinition,
}

/// Expand files and directories into an ordered list of candidate documents.
pub fn discover(paths: &[PathBuf], kind: DiscoverKind) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for input in paths {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| entry.into_path())
                .filter(|path| path.extension().map_or(false, |ext| ext == "json"))
                .filter(|path| matches_kind(path, kind))
                .collect();
            found.sort();
            out.extend(found);
        } else {
            // Explicit files are the caller's choice; the heuristic only
            // applies when scanning directories.
            out.push(input.clone());
        }
    }
    out
}

fn matches_kind(path: &Path, kind: DiscoverKind) -> bool {
    match kind {
        DiscoverKind::Config => true,
        DiscoverKind::PduDefinition => {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                return false;
            };
            if name.ends_with(SCHEMA_SUFFIX) {
                return false;
            }
            let lower = name.to_lowercase();
            PDUDEF_MARKERS.iter().any(|marker| lower.contains(marker))
        }
    }
}
