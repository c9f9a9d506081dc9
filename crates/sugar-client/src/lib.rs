//! # sugar-client
//!
//! Core HTTP transport and wire codec for the SugarCRM REST API.
//!
//! Every SugarCRM v4.1 call is a single form-encoded `POST` to one endpoint
//! (`.../service/v4_1/rest.php`) carrying a method name and a JSON argument
//! array. This crate provides:
//! - The wire codec that builds that form and decodes the JSON reply
//! - An HTTP client that posts it and maps non-200 replies to errors
//! - Client configuration (timeouts, user agent, TLS verification)
//! - Security helpers shared by the higher-level crates
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (sugar-auth login, sugar-rest Session)                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      SugarClient                            │
//! │  - Holds the endpoint URL + HTTP client                     │
//! │  - call(method, args): encode → POST → decode               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SugarHttpClient                          │
//! │  - Raw form POST, status handling, tracing                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use sugarcrm_client::SugarClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sugarcrm_client::Error> {
//!     let client = SugarClient::new("https://crm.example.com/service/v4_1/rest.php")?;
//!     let reply = client
//!         .call("get_server_info", vec![])
//!         .await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```

mod client;
pub mod codec;
mod config;
mod error;
pub mod security;
mod sugar_client;

pub use client::SugarHttpClient;
pub use codec::RestRequest;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use sugar_client::SugarClient;

/// Default application tag sent at login.
pub const DEFAULT_APPLICATION: &str = "Rust";

/// Default language tag sent at login.
pub const DEFAULT_LANGUAGE: &str = "en_us";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("sugarcrm-api/", env!("CARGO_PKG_VERSION"));
