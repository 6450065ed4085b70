//! # Pdudef Subcommand
//!
//! Validates PDU-definition documents. Every document gets a schema pass;
//! documents in the compact shape (top-level `paths` table) additionally
//! get cross-file checks:
//!
//! 1. each `paths` entry must be an object with non-empty string `id` and
//!    `path` fields,
//! 2. duplicate ids are flagged; the first entry for an id stays
//!    authoritative,
//! 3. each referenced type-set file must exist and is validated against
//!    the PDU-type-set schema (violations reported against that file),
//! 4. every robot's `pdutypes_id` must name an entry of the index.
//!
//! Legacy (inline) documents skip the cross-file checks entirely and are
//! only schema-validated. Whether they should receive equivalent semantic
//! checks is undecided; the shape-gated behavior is kept as-is.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Args;
use serde_json::Value;

use pducfg_core::{discover, rationale, refs, report, Diagnostic, DiscoverKind, JsonDocument};
use pducfg_schema::SchemaEngine;

use crate::find_schemas_dir;

/// Arguments for the pdudef subcommand.
#[derive(Args, Debug)]
pub struct PdudefArgs {
    /// pdudef.json file(s) or directory paths (dirs scanned for
    /// *pdudef*.json, excluding schema files).
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Path to the pdudef schema. Defaults to pdudef.schema.json in the
    /// nearest schemas/ directory at or above the working directory.
    #[arg(long)]
    pub schema_pdudef: Option<PathBuf>,

    /// Path to the pdutypes schema. Resolved like --schema-pdudef.
    #[arg(long)]
    pub schema_pdutypes: Option<PathBuf>,
}

/// Execute the pdudef subcommand. Returns the process exit code.
pub fn run_pdudef(args: &PdudefArgs) -> Result<u8> {
    let pdudef_schema = schema_path(&args.schema_pdudef, "pdudef.schema.json")?;
    let pdutypes_schema = schema_path(&args.schema_pdutypes, "pdutypes.schema.json")?;
    let pdudef_engine = SchemaEngine::load(&pdudef_schema)?;
    let pdutypes_engine = SchemaEngine::load(&pdutypes_schema)?;

    let files = discover(&args.paths, DiscoverKind::PduDefinition);
    tracing::debug!(count = files.len(), "validating PDU definitions");

    let mut failed = false;
    for file in &files {
        let diagnostics = validate_pdudef_file(&pdudef_engine, &pdutypes_engine, file);
        if diagnostics.is_empty() {
            println!("{}: OK", file.display());
        } else {
            failed = true;
            for diagnostic in &diagnostics {
                eprintln!("{diagnostic}");
            }
        }
    }
    Ok(if failed { 1 } else { 0 })
}

fn schema_path(explicit: &Option<PathBuf>, filename: &str) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.clone());
    }
    match find_schemas_dir() {
        Some(dir) => Ok(dir.join(filename)),
        None => bail!(
            "no schemas/ directory found at or above the working directory; \
             pass --schema-pdudef and --schema-pdutypes explicitly"
        ),
    }
}

/// Validate one PDU-definition document.
pub fn validate_pdudef_file(
    pdudef_engine: &SchemaEngine,
    pdutypes_engine: &SchemaEngine,
    path: &Path,
) -> Vec<Diagnostic> {
    let doc = match JsonDocument::load(path) {
        Ok(doc) => doc,
        Err(diagnostic) => return vec![diagnostic],
    };
    let mut diagnostics = report::diagnostics_from_violations(
        path,
        pdudef_engine.evaluate(doc.value()),
        &rationale::PDU_FIELDS,
    );
    // Compact shape is signaled by the presence of a top-level "paths"
    // field; legacy documents get no cross-file checks.
    if doc.value().get("paths").is_some() {
        diagnostics.extend(cross_validate(&doc, pdutypes_engine));
    }
    diagnostics
}

/// Cross-file checks for a compact PDU-definition document.
fn cross_validate(doc: &JsonDocument, pdutypes_engine: &SchemaEngine) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut index: HashMap<String, PathBuf> = HashMap::new();

    let entries = doc.value().get("paths").and_then(Value::as_array);
    for (idx, entry) in entries.into_iter().flatten().enumerate() {
        let entry_pointer = format!("/paths/{idx}");
        let Some(obj) = entry.as_object() else {
            diagnostics.push(Diagnostic::rule_finding(
                doc.path(),
                entry_pointer,
                "type",
                "entry is not an object.".to_string(),
                rationale::PDU_FIELDS.explain("paths"),
            ));
            continue;
        };

        let id = non_empty_str(obj.get("id"));
        let rel_path = non_empty_str(obj.get("path"));
        if id.is_none() {
            diagnostics.push(Diagnostic::rule_finding(
                doc.path(),
                entry_pointer.clone(),
                "required",
                "paths entry missing id.".to_string(),
                rationale::PDU_FIELDS.explain("paths"),
            ));
        }
        if rel_path.is_none() {
            let message = match id {
                Some(id) => format!("missing path for id '{id}'."),
                None => "paths entry missing path.".to_string(),
            };
            diagnostics.push(Diagnostic::rule_finding(
                doc.path(),
                entry_pointer.clone(),
                "required",
                message,
                rationale::PDU_FIELDS.explain("paths"),
            ));
        }
        let (Some(id), Some(rel_path)) = (id, rel_path) else {
            continue;
        };

        if index.contains_key(id) {
            // First entry for an id stays authoritative; later duplicates
            // are flagged and skipped entirely.
            diagnostics.push(Diagnostic::rule_finding(
                doc.path(),
                entry_pointer,
                "unique",
                format!("duplicate paths id '{id}'."),
                rationale::PDU_FIELDS.explain("paths"),
            ));
            continue;
        }

        let resolved = refs::resolve(doc.dir(), rel_path);
        if !resolved.exists {
            diagnostics.push(
                Diagnostic::rule_finding(
                    doc.path(),
                    entry_pointer,
                    "exists",
                    format!(
                        "missing pdutypes file '{rel_path}' (resolved: '{}').",
                        resolved.path.display()
                    ),
                    rationale::PDU_FIELDS.explain("paths"),
                )
                .with_remedy("update the path or create the file.".to_string()),
            );
            continue;
        }

        index.insert(id.to_string(), resolved.path.clone());
        diagnostics.extend(validate_typeset_file(pdutypes_engine, &resolved.path));
    }

    let robots = doc.value().get("robots").and_then(Value::as_array);
    for (idx, robot) in robots.into_iter().flatten().enumerate() {
        // Robot entries are best-effort here; malformed ones are the
        // schema pass's problem.
        let Some(obj) = robot.as_object() else { continue };
        let Some(robot_id) = non_empty_str(obj.get("pdutypes_id")) else { continue };
        if !index.contains_key(robot_id) {
            diagnostics.push(
                Diagnostic::rule_finding(
                    doc.path(),
                    format!("/robots/{idx}/pdutypes_id"),
                    "enum",
                    format!("pdutypes_id '{robot_id}' not found in paths."),
                    rationale::PDU_FIELDS.explain("pdutypes_id"),
                )
                .with_remedy("add the id to paths or correct pdutypes_id.".to_string()),
            );
        }
    }

    diagnostics
}

/// Schema-validate a referenced type-set file. Violations are reported
/// against that file, not the parent document.
fn validate_typeset_file(engine: &SchemaEngine, path: &Path) -> Vec<Diagnostic> {
    let doc = match JsonDocument::load(path) {
        Ok(doc) => doc,
        Err(diagnostic) => return vec![diagnostic],
    };
    report::diagnostics_from_violations(path, engine.evaluate(doc.value()), &rationale::PDU_FIELDS)
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
