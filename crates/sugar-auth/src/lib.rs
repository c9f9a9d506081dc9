//! # sugar-auth
//!
//! SugarCRM authentication for the v4.1 REST API.
//!
//! ## Security
//!
//! - Passwords and session ids are redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Error messages that look like they carry credentials are scrubbed
//!
//! The SugarCRM `login` call expects the password as an unsalted, hex-encoded
//! MD5 digest. That is a wire-compatibility requirement of the server, not a
//! security property: always talk to SugarCRM over TLS.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sugarcrm_auth::{login, Credentials};
//! use sugarcrm_client::SugarClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sugarcrm_auth::Error> {
//!     let creds = Credentials::from_env()?;
//!     let client = SugarClient::new(creds.url())?;
//!     let result = login(&client, &creds).await?;
//!     println!("logged in as {:?}", result.user_name());
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod login;
mod token;

pub use credentials::Credentials;
pub use error::{Error, ErrorKind, Result};
pub use login::{login, LoginResult};
pub use token::SessionToken;
