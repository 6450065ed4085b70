//! # Per-Field Rationale Tables
//!
//! Every diagnostic carries a short justification for why the offending
//! field must be explicit. The explanation policy is a fixed key → text
//! mapping with a guaranteed fallback, kept in one place so it stays
//! auditable and trivially extensible.

/// A fixed field → explanation table with a guaranteed fallback entry.
#[derive(Debug, Clone, Copy)]
pub struct RationaleTable {
    entries: &'static [(&'static str, &'static str)],
    fallback: &'static str,
}

impl RationaleTable {
    /// Explanation registered for a field, or the table's fallback.
    pub fn explain(&self, key: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
            .unwrap_or(self.fallback)
    }

    /// The fallback explanation used for unregistered fields.
    pub fn fallback(&self) -> &'static str {
        self.fallback
    }
}

/// Rationale for endpoint and comm configuration fields.
pub static CONFIG_FIELDS: RationaleTable = RationaleTable {
    entries: &[
        (
            "cache",
            "Cache is required because data lifetime and overwrite semantics must be explicit.",
        ),
        (
            "comm",
            "Comm is required because delivery semantics and failure modes must be explicit. \
             Use null for cache-only endpoints.",
        ),
        (
            "pdu_def_path",
            "PDU definitions provide shared meaning of bytes (name → channel_id/size).",
        ),
        (
            "config_path",
            "Container entries must point to a concrete endpoint config to keep semantics explicit.",
        ),
        ("direction", "Direction defines data flow semantics and must be explicit."),
        ("role", "Role defines client/server behavior and connection responsibility."),
        ("local", "Local binding makes the listening side explicit."),
        ("remote", "Remote address defines the target side explicitly."),
        ("pdu_key", "UDP framing requires an explicit PDU key to identify data."),
        (
            "expected_clients",
            "Expected clients gates readiness and makes connection semantics explicit.",
        ),
    ],
    fallback: "This field is part of explicit simulation semantics and must not be implicit.",
};

/// Rationale for PDU-definition and PDU-type-set fields.
pub static PDU_FIELDS: RationaleTable = RationaleTable {
    entries: &[
        (
            "robots",
            "Robots define the ownership boundary for PDU definitions and must be explicit.",
        ),
        ("name", "Names bind PDU definitions to concrete channels and must be explicit."),
        (
            "paths",
            "Paths map PDU type sets to files so byte layouts are shared and explicit.",
        ),
        ("pdutypes_id", "pdutypes_id links a robot to a concrete PDU type set."),
        ("channel_id", "channel_id fixes the on-wire identity of a PDU."),
        ("pdu_size", "pdu_size fixes the byte length for deterministic exchange."),
        ("type", "type binds a PDU to its schema/type name for shared meaning."),
    ],
    fallback: "This field is part of explicit PDU semantics and must not be implicit.",
};
