//! # JSON Pointer Helpers
//!
//! RFC 6901 token escaping plus the two pointer operations the reporter
//! needs: appending a child token and reading the last token back. The
//! document root is written as `/` in rendered output.

/// Escape a single reference token (`~` → `~0`, `/` → `~1`).
pub fn escape_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

/// Reverse of [`escape_token`].
pub fn unescape_token(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

/// Pointer form used when a violation addresses the document root.
pub fn root() -> String {
    "/".to_string()
}

/// Append a child token to a parent pointer.
///
/// The parent may be the rendered root (`/`) or the engine's empty root
/// pointer; both yield `/<token>`.
pub fn child(parent: &str, token: &str) -> String {
    format!("{}/{}", parent.trim_end_matches('/'), escape_token(token))
}

/// Last reference token of a pointer, unescaped. `None` for the root.
pub fn last_token(pointer: &str) -> Option<String> {
    let trimmed = pointer.trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    trimmed.rsplit('/').next().map(unescape_token)
}
