//! # pducfg-cli — Validator CLI
//!
//! Provides the `pducfg` command-line interface.
//!
//! ## Subcommands
//!
//! - `pducfg config` — Validate endpoint/comm documents against a JSON
//!   Schema, optionally checking that referenced files exist.
//! - `pducfg pdudef` — Validate PDU-definition documents and, for the
//!   compact format, the PDU-type-set files they reference.
//!
//! ## Exit Codes
//!
//! - `0` — every document validated clean.
//! - `1` — at least one diagnostic was produced.
//! - `2` — fatal setup error (schema unreadable, unparseable, or
//!   uncompilable); nothing was validated.

pub mod config;
pub mod pdudef;

use std::path::PathBuf;

/// Locate the nearest `schemas/` directory at or above the current
/// working directory.
///
/// Used to resolve default schema paths for `pducfg pdudef` when the
/// caller does not pass them explicitly.
pub fn find_schemas_dir() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut dir = cwd.as_path();
    loop {
        let candidate = dir.join("schemas");
        if candidate.is_dir() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}
