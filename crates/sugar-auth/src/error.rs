//! Error types for sugar-auth.
//!
//! Error messages are designed to avoid exposing credential data.

use sugarcrm_client::security::redact;

/// Result type alias for sugar-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sugar-auth operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The server rejected the login.
    #[error("Login failed: {name} - {description}")]
    LoginFailed { name: String, description: String },

    /// Invalid credentials configuration.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Transport or decode failure from the underlying client.
    #[error("{0}")]
    Client(sugarcrm_client::ErrorKind),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<sugarcrm_client::Error> for Error {
    fn from(err: sugarcrm_client::Error) -> Self {
        let sugarcrm_client::Error { kind, source } = err;
        let kind = match kind {
            sugarcrm_client::ErrorKind::Other(message) if redact::looks_sensitive(&message) => {
                ErrorKind::Other("Client error (details redacted for security)".to_string())
            }
            kind => ErrorKind::Client(kind),
        };
        Error { kind, source }
    }
}
