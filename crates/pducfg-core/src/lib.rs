//! # pducfg-core — Document Model & Diagnostics
//!
//! Foundational types for the pducfg validator: parsed JSON documents with
//! their source locations, structured diagnostics with per-field rationale,
//! deterministic document discovery, and path-reference resolution.
//!
//! ## Diagnostics Are Values
//!
//! Nothing in this crate is a Rust error except I/O at the very edges.
//! A document that cannot be read, fails its schema, or points at a file
//! that does not exist produces [`Diagnostic`] values that accumulate per
//! document; the run continues to the next document regardless. The only
//! fatal condition in the whole system lives in `pducfg-schema` (an
//! unusable schema file).
//!
//! ## Crate Policy
//!
//! - No shared mutable state: validation of one document is a pure
//!   function of the document and the filesystem, so the per-document
//!   loop stays trivially parallelizable.
//! - Diagnostic pointers always address a location that exists in the
//!   originating document, or would exist if the missing required field
//!   were added.

pub mod diagnostic;
pub mod discover;
pub mod document;
pub mod pointer;
pub mod rationale;
pub mod refs;
pub mod report;

pub use diagnostic::{Diagnostic, RuleViolation};
pub use discover::{discover, DiscoverKind};
pub use document::JsonDocument;
pub use rationale::RationaleTable;
pub use refs::{Reference, ResolvedPath};
