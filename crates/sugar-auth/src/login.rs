//! The `login` RPC.

use serde::Deserialize;
use serde_json::{Map, Value};
use sugarcrm_client::{codec, SugarClient};
use tracing::{instrument, warn};

use crate::credentials::Credentials;
use crate::error::{Error, ErrorKind, Result};
use crate::token::SessionToken;

/// Successful login: the session token plus what the server reported about
/// the user.
#[derive(Debug, Clone)]
pub struct LoginResult {
    token: SessionToken,
    module_name: Option<String>,
    details: Map<String, Value>,
}

impl LoginResult {
    /// The session token for subsequent calls.
    pub fn token(&self) -> &SessionToken {
        &self.token
    }

    /// Module the session belongs to (normally `Users`).
    pub fn module_name(&self) -> Option<&str> {
        self.module_name.as_deref()
    }

    /// A detail from the reply's `name_value_list`, already unwrapped.
    pub fn detail(&self, name: &str) -> Option<&Value> {
        self.details.get(name)
    }

    /// Id of the logged-in user.
    pub fn user_id(&self) -> Option<&str> {
        self.detail("user_id").and_then(Value::as_str)
    }

    /// Name of the logged-in user.
    pub fn user_name(&self) -> Option<&str> {
        self.detail("user_name").and_then(Value::as_str)
    }

    /// Language of the logged-in user.
    pub fn user_language(&self) -> Option<&str> {
        self.detail("user_language").and_then(Value::as_str)
    }

    /// Consume the result, keeping only the token.
    pub fn into_token(self) -> SessionToken {
        self.token
    }
}

/// Error body the server sends (with status 200) for a rejected login.
#[derive(Debug, Default, Deserialize)]
struct LoginFault {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
}

/// Log in and obtain a session token.
///
/// The password is sent as the MD5 hex digest the server requires.
#[instrument(skip(client, credentials), fields(user = %credentials.username()))]
pub async fn login(client: &SugarClient, credentials: &Credentials) -> Result<LoginResult> {
    credentials.validate()?;
    warn!("SugarCRM login sends an unsalted MD5 password digest; use a TLS endpoint");

    let reply = client.call("login", credentials.login_args()).await?;
    parse_login_reply(reply)
}

fn parse_login_reply(reply: Value) -> Result<LoginResult> {
    let Some(id) = reply.get("id").and_then(Value::as_str).filter(|id| !id.is_empty()) else {
        let fault: LoginFault = serde_json::from_value(reply).unwrap_or_default();
        let name = if fault.name.is_empty() {
            "Invalid Login".to_string()
        } else {
            fault.name
        };
        return Err(Error::new(ErrorKind::LoginFailed {
            name,
            description: fault.description,
        }));
    };

    let details: Map<String, Value> = reply
        .get("name_value_list")
        .and_then(Value::as_object)
        .map(|fields| {
            fields
                .iter()
                .filter_map(|(k, v)| codec::unwrap_field(v).map(|v| (k.clone(), v.clone())))
                .collect()
        })
        .unwrap_or_default();

    Ok(LoginResult {
        token: SessionToken::new(id),
        module_name: reply
            .get("module_name")
            .and_then(Value::as_str)
            .map(str::to_string),
        details,
    })
}
