//! Session token returned by `login`.

use sugarcrm_client::security::redact::REDACTED;

/// Opaque session id sent as the first argument of every authenticated RPC.
///
/// Redacted in Debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a session id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw session id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SessionToken").field(&REDACTED).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_id() {
        let token = SessionToken::new("k2f9a8s7d6");
        assert_eq!(token.as_str(), "k2f9a8s7d6");
        assert!(!format!("{:?}", token).contains("k2f9a8s7d6"));
    }
}
