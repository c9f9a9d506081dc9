//! Authenticated SugarCRM session.
//!
//! A [`Session`] can only be obtained by logging in, so every RPC method on
//! it runs with a valid session token. The RPCs are split by concern:
//! reads of entries, module metadata, writes, relationships, file uploads,
//! and the named-but-unimplemented remainder of the vocabulary.

use serde_json::Value;
use sugarcrm_auth::{Credentials, LoginResult, SessionToken};
use sugarcrm_client::{ClientConfig, SugarClient};
use tracing::{debug, info, instrument};

use crate::error::{Error, ErrorKind, Result};

mod attachments;
mod entries;
mod modules;
mod relationships;
mod unimplemented;
mod writes;

/// A logged-in connection to one SugarCRM REST endpoint.
///
/// # Example
///
/// ```rust,ignore
/// use sugarcrm_rest::{Credentials, Record, Session};
///
/// let credentials = Credentials::from_env()?;
/// let session = Session::login(&credentials).await?;
///
/// let probe = Record::for_module("Leads").with("last_name", "Lovelace");
/// let count = session.get_entries_count(&probe, false).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    client: SugarClient,
    login: LoginResult,
    application: String,
    language: String,
}

impl Session {
    /// Log in with default HTTP settings.
    pub async fn login(credentials: &Credentials) -> Result<Self> {
        Self::login_with_config(credentials, ClientConfig::default()).await
    }

    /// Log in with custom HTTP settings.
    #[instrument(skip(credentials, config), fields(url = %credentials.url()))]
    pub async fn login_with_config(credentials: &Credentials, config: ClientConfig) -> Result<Self> {
        let client = SugarClient::with_config(credentials.url(), config)?;
        let login = sugarcrm_auth::login(&client, credentials).await?;
        info!(user_id = ?login.user_id(), "Logged in to SugarCRM");

        Ok(Self {
            client,
            login,
            application: credentials.application().to_string(),
            language: credentials.language().to_string(),
        })
    }

    /// The REST endpoint URL.
    pub fn url(&self) -> &str {
        self.client.url()
    }

    /// Application tag sent at login.
    pub fn application(&self) -> &str {
        &self.application
    }

    /// Language tag sent at login.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The session token.
    pub fn token(&self) -> &SessionToken {
        self.login.token()
    }

    /// Everything the server reported at login.
    pub fn login_result(&self) -> &LoginResult {
        &self.login
    }

    /// Call any RPC by name. The session token is prepended to `args`.
    ///
    /// This is the escape hatch for methods without a typed wrapper.
    #[instrument(skip(self, args), fields(args = args.len()))]
    pub async fn call(&self, method: &str, args: Vec<Value>) -> Result<Value> {
        let mut full = Vec::with_capacity(args.len() + 1);
        full.push(Value::String(self.login.token().as_str().to_string()));
        full.extend(args);

        debug!("Dispatching authenticated RPC");
        self.client.call(method, full).await.map_err(Into::into)
    }

    fn not_implemented(method: &'static str) -> Error {
        Error::new(ErrorKind::NotImplemented { method })
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use serde_json::json;
    use wiremock::{MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_login_builds_session() {
        let server = MockServer::start().await;
        let session = logged_in(&server).await;

        assert_eq!(session.token().as_str(), TOKEN);
        assert_eq!(session.url(), server.uri());
        assert_eq!(session.application(), "Rust");
        assert_eq!(session.language(), "en_us");
        assert_eq!(session.login_result().user_id(), Some("1"));
    }

    #[tokio::test]
    async fn test_rejected_login_is_auth_error() {
        let server = MockServer::start().await;
        rpc("login")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Invalid Login",
                "number": 10,
                "description": "Login attempt failed please check the username and password"
            })))
            .mount(&server)
            .await;

        let credentials = Credentials::new(server.uri(), "admin", "wrong");
        let err = Session::login(&credentials).await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Auth(_)));
    }

    #[tokio::test]
    async fn test_call_prepends_token() {
        let server = MockServer::start().await;
        let session = logged_in(&server).await;
        rpc("get_server_info")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"flavor": "CE"})))
            .expect(1)
            .mount(&server)
            .await;

        let reply = session
            .call("get_server_info", vec![json!("extra")])
            .await
            .unwrap();
        assert_eq!(reply["flavor"], "CE");

        let args = last_args(&server, "get_server_info").await;
        assert_eq!(args, vec![json!(TOKEN), json!("extra")]);
    }

    #[tokio::test]
    async fn test_non_200_reply_is_http_error() {
        let server = MockServer::start().await;
        let session = logged_in(&server).await;
        rpc("get_server_info")
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = session.call("get_server_info", vec![]).await.unwrap_err();
        assert_eq!(err.status(), Some(502));
    }

    #[tokio::test]
    async fn test_undecodable_reply_is_decode_error() {
        let server = MockServer::start().await;
        let session = logged_in(&server).await;
        rpc("get_server_info")
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = session.call("get_server_info", vec![]).await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Decode(_)));
    }
}
