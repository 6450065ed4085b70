//! # pducfg-schema — Schema Engine
//!
//! Wraps the `jsonschema` crate behind the small surface the validator
//! needs: load a schema file once, pick a dialect, evaluate documents into
//! pointer-ordered [`RuleViolation`](pducfg_core::RuleViolation) lists.
//!
//! ## Fatal Boundary
//!
//! An unusable schema is the only fatal condition in the system: a schema
//! file that cannot be read, is not valid JSON, or does not compile into a
//! validator aborts the run before any document is processed (exit 2).
//! Everything downstream is a per-document diagnostic.
//!
//! ## Dialect Selection
//!
//! The schema's own `$schema` declaration picks the dialect. If the schema
//! does not compile under the declared dialect, compilation is retried
//! under Draft 7 before giving up.

pub mod engine;

pub use engine::{SchemaEngine, SetupError};
