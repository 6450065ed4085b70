//! # Violation Reporting
//!
//! Turns raw schema rule violations into reported diagnostics. Two rules
//! govern the conversion:
//!
//! - A `required` violation is re-pointed at the missing child key
//!   (parent pointer plus the key), and the rationale is looked up for
//!   the missing key itself, since that is the field the user must add.
//! - Every other violation keeps its own pointer; the rationale is looked
//!   up for the last pointer token, falling back to the table's generic
//!   entry for array indices and root-level violations.

use std::path::Path;

use crate::diagnostic::{Diagnostic, RuleViolation};
use crate::pointer;
use crate::rationale::RationaleTable;

/// Convert schema violations into diagnostics for one document.
pub fn diagnostics_from_violations(
    document: &Path,
    violations: Vec<RuleViolation>,
    table: &RationaleTable,
) -> Vec<Diagnostic> {
    violations
        .into_iter()
        .map(|violation| diagnostic_from_violation(document, violation, table))
        .collect()
}

fn diagnostic_from_violation(
    document: &Path,
    violation: RuleViolation,
    table: &RationaleTable,
) -> Diagnostic {
    if violation.rule == "required" {
        if let Some(missing_key) = &violation.missing_key {
            return Diagnostic::rule_finding(
                document,
                pointer::child(&violation.pointer, missing_key),
                &violation.rule,
                violation.message,
                table.explain(missing_key),
            );
        }
    }

    let rationale = match pointer::last_token(&violation.pointer) {
        Some(token) => table.explain(&token),
        None => table.fallback(),
    };
    let rendered = if violation.pointer.is_empty() {
        pointer::root()
    } else {
        violation.pointer
    };
    Diagnostic::rule_finding(document, rendered, &violation.rule, violation.message, rationale)
}
