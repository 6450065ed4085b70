//! # Schema Loading & Evaluation
//!
//! [`SchemaEngine`] owns one compiled schema for the lifetime of a run and
//! evaluates parsed documents against it. Violations come back sorted by
//! instance pointer so diagnostics are reproducible across runs.

use std::fs;
use std::path::{Path, PathBuf};

use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, ValidationError, Validator};
use serde_json::Value;
use thiserror::Error;

use pducfg_core::RuleViolation;

/// Fatal setup failure: the schema itself is unusable.
///
/// Rendered messages match the validator's stderr contract
/// (`<schema-path>: schema read error: …`).
#[derive(Error, Debug)]
pub enum SetupError {
    /// The schema file could not be read.
    #[error("{}: schema read error: {}", .path.display(), .reason)]
    SchemaRead {
        /// Path of the schema file.
        path: PathBuf,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The schema file is not valid JSON.
    #[error("{}: schema JSON parse error: {}", .path.display(), .reason)]
    SchemaParse {
        /// Path of the schema file.
        path: PathBuf,
        /// Underlying parse failure.
        reason: String,
    },

    /// The schema did not compile into a validator under any dialect.
    #[error("{}: schema compile error: {}", .path.display(), .reason)]
    SchemaCompile {
        /// Path of the schema file.
        path: PathBuf,
        /// Compilation failure, including the Draft 7 fallback attempt.
        reason: String,
    },
}

/// A compiled schema bound to its source path.
pub struct SchemaEngine {
    path: PathBuf,
    validator: Validator,
}

impl SchemaEngine {
    /// Load and compile a schema file.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] when the file cannot be read, is not valid
    /// JSON, or fails to compile under both the declared dialect and the
    /// Draft 7 fallback. Callers abort the run on any of these.
    pub fn load(path: &Path) -> Result<Self, SetupError> {
        let text = fs::read_to_string(path).map_err(|e| SetupError::SchemaRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let schema: Value = serde_json::from_str(&text).map_err(|e| SetupError::SchemaParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let validator = build_validator(&schema).map_err(|reason| SetupError::SchemaCompile {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(Self { path: path.to_path_buf(), validator })
    }

    /// Compile an in-memory schema value; the path only labels diagnostics.
    pub fn from_value(path: &Path, schema: &Value) -> Result<Self, SetupError> {
        let validator = build_validator(schema).map_err(|reason| SetupError::SchemaCompile {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(Self { path: path.to_path_buf(), validator })
    }

    /// Path the schema was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Evaluate a document against the schema.
    ///
    /// All violations are collected (never fail-fast) and sorted by
    /// instance pointer, then rule name, for deterministic output.
    pub fn evaluate(&self, instance: &Value) -> Vec<RuleViolation> {
        let mut violations: Vec<RuleViolation> =
            self.validator.iter_errors(instance).map(violation_from_error).collect();
        violations.sort_by(|a, b| {
            a.pointer
                .cmp(&b.pointer)
                .then_with(|| a.rule.cmp(&b.rule))
                .then_with(|| a.message.cmp(&b.message))
        });
        violations
    }
}

impl std::fmt::Debug for SchemaEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaEngine").field("path", &self.path).finish_non_exhaustive()
    }
}

/// Compile under the declared dialect, retrying under Draft 7.
fn build_validator(schema: &Value) -> Result<Validator, String> {
    match jsonschema::validator_for(schema) {
        Ok(validator) => Ok(validator),
        Err(declared) => jsonschema::options()
            .with_draft(Draft::Draft7)
            .build(schema)
            .map_err(|fallback| format!("{declared} (draft-7 fallback: {fallback})")),
    }
}

fn violation_from_error(error: ValidationError<'_>) -> RuleViolation {
    let missing_key = match &error.kind {
        ValidationErrorKind::Required { property } => {
            property.as_str().map(str::to_string)
        }
        _ => None,
    };
    RuleViolation {
        pointer: error.instance_path.to_string(),
        rule: rule_name(&error),
        message: error.to_string(),
        missing_key,
    }
}

/// Rule keyword that produced the violation.
///
/// `required` is recognized structurally; everything else takes the last
/// non-index segment of the schema path, which is the violated keyword
/// (e.g. `/properties/comm/type` → `type`, `/allOf/1/then/required` →
/// `required`). "validation" when no keyword can be named.
fn rule_name(error: &ValidationError<'_>) -> String {
    if matches!(error.kind, ValidationErrorKind::Required { .. }) {
        return "required".to_string();
    }
    let schema_path = error.schema_path.to_string();
    schema_path
        .rsplit('/')
        .find(|segment| !segment.is_empty() && !segment.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or("validation")
        .to_string()
}
