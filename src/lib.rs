//! # sugarcrm-api
//!
//! A SugarCRM REST (v4.1) client library for Rust.
//!
//! Records are plain attribute maps tagged with a module kind; the session
//! turns them into RPC calls and decodes replies back into records.
//!
//! ## Security
//!
//! - Passwords, digests and session ids are redacted in Debug output
//! - Tracing spans skip credential and token parameters
//! - Login uses the unsalted MD5 digest the server requires, so always
//!   point the client at a TLS endpoint
//!
//! ## Crates
//!
//! - **sugarcrm-client** - Wire codec, HTTP transport, client configuration
//! - **sugarcrm-auth** - Credentials and the `login` RPC
//! - **sugarcrm-rest** - Records, the kind registry and the session RPCs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sugarcrm_api::{Credentials, Record, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::from_env()?;
//!     let session = Session::login(&credentials).await?;
//!
//!     let probe = Record::for_module("Leads").with("status", "New");
//!     let count = session.get_entries_count(&probe, false).await?;
//!     println!("{count} new leads");
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use sugarcrm_auth as auth;
#[cfg(feature = "client")]
pub use sugarcrm_client as client;
#[cfg(feature = "rest")]
pub use sugarcrm_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use sugarcrm_auth::{Credentials, SessionToken};
#[cfg(feature = "client")]
pub use sugarcrm_client::{ClientConfig, SugarClient};
#[cfg(feature = "rest")]
pub use sugarcrm_rest::{
    Attachment, EntryListOptions, FieldValue, LinkRequest, Record, RecordKind, RelationshipBatch,
    Session, SmartWrite,
};
