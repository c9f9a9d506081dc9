//! Login credentials.
//!
//! The password is redacted in Debug output.

use md5::{Digest, Md5};
use serde_json::{json, Value};
use sugarcrm_client::security::redact::REDACTED;
use sugarcrm_client::{DEFAULT_APPLICATION, DEFAULT_LANGUAGE};

use crate::error::{Error, ErrorKind, Result};

/// Everything needed to open a SugarCRM session.
#[derive(Clone)]
pub struct Credentials {
    url: String,
    username: String,
    password: String,
    application: String,
    language: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &REDACTED)
            .field("application", &self.application)
            .field("language", &self.language)
            .finish()
    }
}

impl Credentials {
    /// Create credentials for the given REST endpoint.
    ///
    /// Application defaults to `"Rust"` and language to `"en_us"`.
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
            application: DEFAULT_APPLICATION.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Set the application tag reported at login.
    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = application.into();
        self
    }

    /// Set the language tag reported at login.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Load credentials from environment variables.
    ///
    /// Required:
    /// - `SUGARCRM_URL`
    /// - `SUGARCRM_USERNAME`
    /// - `SUGARCRM_PASSWORD`
    ///
    /// Optional:
    /// - `SUGARCRM_APPLICATION` (default: "Rust")
    /// - `SUGARCRM_LANGUAGE` (default: "en_us")
    pub fn from_env() -> Result<Self> {
        let required = |name: &str| {
            std::env::var(name).map_err(|_| Error::new(ErrorKind::EnvVar(name.to_string())))
        };

        let mut creds = Self::new(
            required("SUGARCRM_URL")?,
            required("SUGARCRM_USERNAME")?,
            required("SUGARCRM_PASSWORD")?,
        );
        if let Ok(application) = std::env::var("SUGARCRM_APPLICATION") {
            creds = creds.with_application(application);
        }
        if let Ok(language) = std::env::var("SUGARCRM_LANGUAGE") {
            creds = creds.with_language(language);
        }
        Ok(creds)
    }

    /// Get the REST endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the user name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the application tag.
    pub fn application(&self) -> &str {
        &self.application
    }

    /// Get the language tag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns an error unless URL and user name are set.
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(Error::new(ErrorKind::InvalidCredentials(
                "endpoint URL is empty".to_string(),
            )));
        }
        if self.username.is_empty() {
            return Err(Error::new(ErrorKind::InvalidCredentials(
                "user name is empty".to_string(),
            )));
        }
        Ok(())
    }

    /// Hex-encoded MD5 digest of the UTF-8 password, as the server expects.
    pub fn password_digest(&self) -> String {
        format!("{:x}", Md5::digest(self.password.as_bytes()))
    }

    /// The `login` argument array:
    /// `[{user_name, password}, application, [{name: "language", value}]]`.
    pub(crate) fn login_args(&self) -> Vec<Value> {
        vec![
            json!({
                "user_name": self.username,
                "password": self.password_digest(),
            }),
            json!(self.application),
            json!([{"name": "language", "value": self.language}]),
        ]
    }
}
