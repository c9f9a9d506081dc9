//! Error types for sugar-rest.

/// Result type alias for sugar-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sugar-rest operations.
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

    /// HTTP status code, if the server answered with a non-200 status.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for RPCs this crate names but does not implement.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self.kind, ErrorKind::NotImplemented { .. })
    }

    pub(crate) fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidResponse(message.into()))
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput(message.into()))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The server answered with a status other than 200.
    #[error("SugarCRM API request returned status code {status} ({message})")]
    Http { status: u16, message: String },

    /// The reply body was not valid JSON.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The RPC exists in the SugarCRM vocabulary but has no implementation here.
    #[error("Method not implemented yet: {method}")]
    NotImplemented { method: &'static str },

    /// The reply decoded but lacked the structure the RPC returns.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A record or argument cannot be sent as given.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Login failed.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Reading an attachment failed.
    #[error("IO error: {0}")]
    Io(String),

    /// Other transport error (timeout, connection, configuration).
    #[error("Client error: {0}")]
    Client(String),
}

impl From<sugarcrm_client::Error> for Error {
    fn from(err: sugarcrm_client::Error) -> Self {
        let sugarcrm_client::Error { kind, source } = err;
        let kind = match kind {
            sugarcrm_client::ErrorKind::Http { status, message } => {
                ErrorKind::Http { status, message }
            }
            sugarcrm_client::ErrorKind::Json(message) => ErrorKind::Decode(message),
            other => ErrorKind::Client(other.to_string()),
        };
        Error { kind, source }
    }
}

impl From<sugarcrm_auth::Error> for Error {
    fn from(err: sugarcrm_auth::Error) -> Self {
        let sugarcrm_auth::Error { kind, source } = err;
        let kind = match kind {
            sugarcrm_auth::ErrorKind::Client(sugarcrm_client::ErrorKind::Http {
                status,
                message,
            }) => ErrorKind::Http { status, message },
            sugarcrm_auth::ErrorKind::Client(sugarcrm_client::ErrorKind::Json(message)) => {
                ErrorKind::Decode(message)
            }
            other => ErrorKind::Auth(other.to_string()),
        };
        Error { kind, source }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::with_source(ErrorKind::Io(err.to_string()), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_display() {
        let err = Error::new(ErrorKind::NotImplemented {
            method: "get_server_info",
        });
        assert!(err.is_not_implemented());
        assert_eq!(err.to_string(), "Method not implemented yet: get_server_info");
    }

    #[test]
    fn test_http_status_survives_conversion() {
        let client_err = sugarcrm_client::Error::new(sugarcrm_client::ErrorKind::Http {
            status: 404,
            message: "Not Found".to_string(),
        });
        let err: Error = client_err.into();
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            "SugarCRM API request returned status code 404 (Not Found)"
        );
    }

    #[test]
    fn test_json_failure_becomes_decode() {
        let client_err =
            sugarcrm_client::Error::new(sugarcrm_client::ErrorKind::Json("EOF".to_string()));
        let err: Error = client_err.into();
        assert!(matches!(err.kind, ErrorKind::Decode(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_auth_errors_keep_http_status() {
        let auth_err = sugarcrm_auth::Error::new(sugarcrm_auth::ErrorKind::Client(
            sugarcrm_client::ErrorKind::Http {
                status: 503,
                message: "Service Unavailable".to_string(),
            },
        ));
        let err: Error = auth_err.into();
        assert_eq!(err.status(), Some(503));

        let rejected = sugarcrm_auth::Error::new(sugarcrm_auth::ErrorKind::LoginFailed {
            name: "Invalid Login".to_string(),
            description: "bad password".to_string(),
        });
        let err: Error = rejected.into();
        assert!(matches!(err.kind, ErrorKind::Auth(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io.into();
        assert!(matches!(err.kind, ErrorKind::Io(_)));
        assert!(err.source.is_some());
    }
}
