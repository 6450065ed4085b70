//! # Diagnostic Types
//!
//! Structured validation findings. A [`RuleViolation`] is the raw output of
//! a schema evaluation pass; a [`Diagnostic`] is a fully reported problem
//! bound to its document, enriched with a per-field rationale and, where
//! one is known, a suggested remedy.
//!
//! The rendered line format is stable output consumed by CI pipelines:
//!
//! ```text
//! <file>: <pointer>: rule=<rule>: <message> Reason: <rationale> Suggested fix: <remedy>
//! ```
//!
//! Read/parse failures render without pointer, rule, and rationale
//! (`<file>: JSON parse error: …`).

use std::fmt;
use std::path::{Path, PathBuf};

/// A single schema rule violation produced by a schema engine pass.
///
/// Violations carry the instance pointer, the violated rule keyword, and
/// the evaluator's message. For `required` violations the missing property
/// name is captured structurally so reporting does not have to parse it
/// back out of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleViolation {
    /// JSON Pointer to the violating location in the instance
    /// (empty string for the document root).
    pub pointer: String,
    /// Violated rule keyword (e.g. "required", "type", "enum").
    pub rule: String,
    /// Human-readable evaluator message.
    pub message: String,
    /// For `required` violations, the name of the missing property.
    pub missing_key: Option<String>,
}

/// A reported problem in one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Path of the document the diagnostic belongs to.
    pub document: PathBuf,
    /// JSON Pointer addressing the offending location, when one exists.
    pub pointer: Option<String>,
    /// Violated rule name, when the finding maps to a rule.
    pub rule: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// Fixed per-field rationale explaining why the field matters.
    pub rationale: Option<&'static str>,
    /// Suggested remedy, when one is known.
    pub remedy: Option<String>,
}

impl Diagnostic {
    /// Diagnostic for a document that could not be read or parsed.
    pub fn load_failure(document: &Path, message: String) -> Self {
        Self {
            document: document.to_path_buf(),
            pointer: None,
            rule: None,
            message,
            rationale: None,
            remedy: None,
        }
    }

    /// Diagnostic for a rule finding at a known location.
    pub fn rule_finding(
        document: &Path,
        pointer: String,
        rule: &str,
        message: String,
        rationale: &'static str,
    ) -> Self {
        Self {
            document: document.to_path_buf(),
            pointer: Some(pointer),
            rule: Some(rule.to_string()),
            message,
            rationale: Some(rationale),
            remedy: None,
        }
    }

    /// Attach a suggested remedy.
    pub fn with_remedy(mut self, remedy: String) -> Self {
        self.remedy = Some(remedy);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.document.display())?;
        if let Some(pointer) = &self.pointer {
            write!(f, ": {pointer}")?;
        }
        if let Some(rule) = &self.rule {
            write!(f, ": rule={rule}")?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(rationale) = self.rationale {
            write!(f, " Reason: {rationale}")?;
        }
        if let Some(remedy) = &self.remedy {
            write!(f, " Suggested fix: {remedy}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_full_finding() {
        let diag = Diagnostic::rule_finding(
            Path::new("endpoint.json"),
            "/cache".to_string(),
            "exists",
            "missing referenced file 'cache.json' (resolved: '/cfg/cache.json').".to_string(),
            "Cache is required because data lifetime and overwrite semantics must be explicit.",
        )
        .with_remedy("update 'cache' or create the file at the resolved path.".to_string());

        assert_eq!(
            diag.to_string(),
            "endpoint.json: /cache: rule=exists: missing referenced file 'cache.json' \
             (resolved: '/cfg/cache.json'). Reason: Cache is required because data lifetime \
             and overwrite semantics must be explicit. Suggested fix: update 'cache' or \
             create the file at the resolved path."
        );
    }

    #[test]
    fn display_load_failure_has_no_pointer_or_rule() {
        let diag = Diagnostic::load_failure(
            Path::new("broken.json"),
            "JSON parse error: expected value at line 1 column 1".to_string(),
        );
        assert_eq!(
            diag.to_string(),
            "broken.json: JSON parse error: expected value at line 1 column 1"
        );
    }

    #[test]
    fn display_without_remedy_omits_suggested_fix() {
        let diag = Diagnostic::rule_finding(
            Path::new("a.json"),
            "/comm".to_string(),
            "type",
            "invalid path reference (not string).".to_string(),
            "fixed text",
        );
        let line = diag.to_string();
        assert!(line.ends_with("Reason: fixed text"));
        assert!(!line.contains("Suggested fix"));
    }
}
