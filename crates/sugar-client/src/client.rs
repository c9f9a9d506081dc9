//! Core HTTP client for the SugarCRM REST endpoint.

use tracing::{debug, info, instrument};

use crate::codec::RestRequest;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};

/// HTTP client that posts encoded REST calls and returns the raw reply body.
///
/// One call is one `POST`; nothing is retried.
#[derive(Debug, Clone)]
pub struct SugarHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl SugarHttpClient {
    /// Create a new HTTP client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent);

        if !config.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Post an encoded call to `url` and return the reply body as text.
    ///
    /// Any status other than 200 is a transport error carrying the status
    /// code and reason phrase.
    #[instrument(skip(self, request), fields(method = %request.method))]
    pub async fn post(&self, url: &str, request: &RestRequest) -> Result<String> {
        let body = request.to_form()?;

        if self.config.enable_tracing {
            debug!(url = %url, rpc = %request.method, "Sending request");
        }

        let response = self
            .inner
            .post(url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if self.config.enable_tracing {
            let content_length = response.content_length();
            if status.is_success() {
                debug!(status = status.as_u16(), content_length, "Response received");
            } else {
                info!(status = status.as_u16(), content_length, "Non-success response");
            }
        }

        if status != reqwest::StatusCode::OK {
            return Err(Error::new(ErrorKind::Http {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            }));
        }

        Ok(response.text().await?)
    }
}
