//! High-level SugarCRM client bound to one REST endpoint.

use serde_json::Value;
use tracing::instrument;

use crate::client::SugarHttpClient;
use crate::codec;
use crate::config::ClientConfig;
use crate::error::Result;

/// SugarCRM client for a single REST endpoint.
///
/// Combines the endpoint URL with the HTTP transport and exposes the
/// encode → POST → decode round trip used by every RPC. It carries no
/// session state; the login token is added by the higher-level crates.
#[derive(Debug, Clone)]
pub struct SugarClient {
    http: SugarHttpClient,
    url: String,
}

impl SugarClient {
    /// Create a client for the given endpoint URL with default configuration.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_config(url, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    ///
    /// The URL must be absolute (`https://host/service/v4_1/rest.php`).
    pub fn with_config(url: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let url = url.into();
        url::Url::parse(&url)?;
        let http = SugarHttpClient::new(config)?;
        Ok(Self { http, url })
    }

    /// Get the endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the underlying HTTP client.
    pub fn http(&self) -> &SugarHttpClient {
        &self.http
    }

    /// Issue one RPC and return the decoded reply.
    #[instrument(skip(self, args), fields(url = %self.url))]
    pub async fn call(&self, method: &str, args: Vec<Value>) -> Result<Value> {
        let request = codec::encode(method, &args)?;
        let body = self.http.post(&self.url, &request).await?;
        codec::decode(&body)
    }
}
