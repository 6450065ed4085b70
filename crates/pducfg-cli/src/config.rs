//! # Config Subcommand
//!
//! Validates endpoint/comm documents against a JSON Schema. With
//! `--check-paths`, declared path references (`cache`, `comm`,
//! `pdu_def_path`, `endpoints[].config_path`) are additionally resolved
//! against each document's directory and checked for existence.
//!
//! The schema pass and the reference pass run independently per document
//! so one failure category never suppresses the other's diagnostics.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use pducfg_core::{discover, rationale, refs, report, Diagnostic, DiscoverKind, JsonDocument};
use pducfg_schema::SchemaEngine;

/// Arguments for the config subcommand.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Path to the JSON Schema to validate against.
    #[arg(long)]
    pub schema: PathBuf,

    /// JSON file(s) or directory paths (directories are scanned recursively).
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Check existence of referenced JSON files
    /// (cache/comm/pdu_def_path/config_path).
    #[arg(long)]
    pub check_paths: bool,
}

/// Execute the config subcommand. Returns the process exit code.
pub fn run_config(args: &ConfigArgs) -> Result<u8> {
    let engine = SchemaEngine::load(&args.schema)?;
    let files = discover(&args.paths, DiscoverKind::Config);
    tracing::debug!(count = files.len(), schema = %engine.path().display(), "validating documents");

    let mut failed = false;
    for file in &files {
        let diagnostics = validate_config_file(&engine, file, args.check_paths);
        if diagnostics.is_empty() {
            println!("{}: OK ({})", file.display(), engine.path().display());
        } else {
            failed = true;
            for diagnostic in &diagnostics {
                eprintln!("{diagnostic}");
            }
        }
    }
    Ok(if failed { 1 } else { 0 })
}

/// Validate one document: schema pass plus optional reference pass.
pub fn validate_config_file(
    engine: &SchemaEngine,
    path: &Path,
    check_paths: bool,
) -> Vec<Diagnostic> {
    let doc = match JsonDocument::load(path) {
        Ok(doc) => doc,
        Err(diagnostic) => return vec![diagnostic],
    };
    let mut diagnostics = report::diagnostics_from_violations(
        path,
        engine.evaluate(doc.value()),
        &rationale::CONFIG_FIELDS,
    );
    if check_paths {
        diagnostics.extend(refs::check_references(&doc, &rationale::CONFIG_FIELDS));
    }
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn write(dir: &Path, name: &str, value: &serde_json::Value) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
        path
    }

    fn endpoint_engine() -> SchemaEngine {
        let schema = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "required": ["name", "cache", "comm"],
            "properties": {
                "name": {"type": "string"},
                "cache": {"type": "string"},
                "comm": {"type": ["string", "null"]}
            }
        });
        SchemaEngine::from_value(Path::new("endpoint.schema.json"), &schema).unwrap()
    }

    #[test]
    fn schema_legal_null_comm_with_existing_cache_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cache.json"), "{}").unwrap();
        let doc = write(
            dir.path(),
            "endpoint.json",
            &json!({"name": "E", "cache": "cache.json", "comm": null}),
        );
        let diagnostics = validate_config_file(&endpoint_engine(), &doc, true);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
    }

    #[test]
    fn missing_cache_reports_required_at_child_pointer() {
        let dir = tempfile::tempdir().unwrap();
        let doc = write(dir.path(), "endpoint.json", &json!({"name": "E", "comm": null}));
        let diagnostics = validate_config_file(&endpoint_engine(), &doc, false);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].pointer.as_deref(), Some("/cache"));
        assert_eq!(diagnostics[0].rule.as_deref(), Some("required"));
        assert_eq!(
            diagnostics[0].rationale,
            Some(
                "Cache is required because data lifetime and overwrite semantics \
                 must be explicit."
            )
        );
    }

    #[test]
    fn schema_and_reference_failures_both_surface() {
        // An endpoint that is schema-invalid (missing name) and whose cache
        // reference is dangling must produce both diagnostics.
        let dir = tempfile::tempdir().unwrap();
        let doc = write(
            dir.path(),
            "endpoint.json",
            &json!({"cache": "absent.json", "comm": null}),
        );
        let diagnostics = validate_config_file(&endpoint_engine(), &doc, true);
        let rules: Vec<_> =
            diagnostics.iter().filter_map(|d| d.rule.as_deref()).collect();
        assert!(rules.contains(&"required"), "{diagnostics:?}");
        assert!(rules.contains(&"exists"), "{diagnostics:?}");
    }

    #[test]
    fn unreadable_document_is_one_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{").unwrap();
        let diagnostics = validate_config_file(&endpoint_engine(), &path, true);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.starts_with("JSON parse error:"));
    }

    #[test]
    fn run_config_aggregates_failures_across_documents() {
        let dir = tempfile::tempdir().unwrap();
        let schema_path = write(
            dir.path(),
            "endpoint.schema.json",
            &json!({
                "type": "object",
                "required": ["name", "cache", "comm"],
                "properties": {
                    "name": {"type": "string"},
                    "cache": {"type": "string"},
                    "comm": {"type": ["string", "null"]}
                }
            }),
        );
        fs::write(dir.path().join("cache.json"), "{}").unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir(&docs).unwrap();
        write(&docs, "good.json", &json!({"name": "A", "cache": "../cache.json", "comm": null}));
        write(&docs, "bad.json", &json!({"name": "B", "comm": null}));

        let args = ConfigArgs {
            schema: schema_path.clone(),
            paths: vec![docs.clone()],
            check_paths: true,
        };
        assert_eq!(run_config(&args).unwrap(), 1);

        let args_good_only = ConfigArgs {
            schema: schema_path,
            paths: vec![docs.join("good.json")],
            check_paths: true,
        };
        assert_eq!(run_config(&args_good_only).unwrap(), 0);
    }

    #[test]
    fn run_config_missing_schema_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let args = ConfigArgs {
            schema: dir.path().join("absent.schema.json"),
            paths: vec![dir.path().to_path_buf()],
            check_paths: false,
        };
        let err = run_config(&args).unwrap_err();
        assert!(err.to_string().contains("schema read error"));
    }
}
