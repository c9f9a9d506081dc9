//! Security utilities shared by the SugarCRM crates.
//!
//! ## Filter values
//!
//! SugarCRM `get_entry_list` / `get_entries_count` accept a raw SQL
//! `WHERE` fragment. Values interpolated into it are not escaped by the
//! server; use [`sql::escape_string`] on anything user-provided:
//!
//! ```rust
//! use sugarcrm_client::security::sql;
//!
//! let name = sql::escape_string("O'Brien");
//! let query = format!("contacts.last_name='{}'", name);
//! assert_eq!(query, "contacts.last_name='O\\'Brien'");
//! ```
//!
//! ## Redaction
//!
//! Passwords, digests and session ids must never reach Debug output or log
//! lines. [`redact`] holds the placeholder and the heuristic used to scrub
//! error messages.

/// SQL string escaping for SugarCRM filter expressions.
pub mod sql {
    /// Escape a value for use inside a single-quoted SQL string literal.
    ///
    /// - Single quotes (`'`) become (`\'`)
    /// - Backslashes (`\`) become (`\\`)
    /// - Newlines, carriage returns and tabs become `\n`, `\r`, `\t`
    ///
    /// `%` and `_` are left alone so that `LIKE` patterns keep working.
    ///
    /// ```rust
    /// use sugarcrm_client::security::sql;
    ///
    /// assert_eq!(sql::escape_string("Jo%"), "Jo%");
    /// assert_eq!(sql::escape_string("it's"), "it\\'s");
    /// ```
    #[must_use]
    pub fn escape_string(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 8);
        for ch in value.chars() {
            match ch {
                '\'' => escaped.push_str("\\'"),
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }
}

/// Redaction helpers for credentials and session ids.
pub mod redact {
    /// Placeholder printed instead of secret values.
    pub const REDACTED: &str = "[REDACTED]";

    const SENSITIVE_MARKERS: [&str; 4] = ["password", "session", "user_auth", "rest_data"];

    /// Returns true if a message looks like it may carry credentials.
    ///
    /// ```rust
    /// use sugarcrm_client::security::redact;
    ///
    /// assert!(redact::looks_sensitive("bad rest_data=%5B%7B..."));
    /// assert!(!redact::looks_sensitive("connection refused"));
    /// ```
    #[must_use]
    pub fn looks_sensitive(message: &str) -> bool {
        let lower = message.to_ascii_lowercase();
        SENSITIVE_MARKERS.iter().any(|m| lower.contains(m))
    }
}
