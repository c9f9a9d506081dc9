//! # sugar-rest
//!
//! SugarCRM REST (v4.1) session with typed records and the full RPC
//! vocabulary.
//!
//! ## Features
//!
//! - **Records** - Module kind plus ordered attributes, with field lists for
//!   writes and filter expressions for reads
//! - **Kind registry** - Resolves server module labels (`"Leads"`) to kinds,
//!   with a generic fallback
//! - **Reads** - Single entries, batches by id, filtered lists, counts and
//!   related records
//! - **Writes** - Single and batch writes, plus a smart write that creates
//!   records under caller-chosen ids
//! - **Relationships** - Single and batched relationship writes
//! - **Uploads** - Document revisions and note attachments
//!
//! ## Example
//!
//! ```rust,ignore
//! use sugarcrm_rest::{Credentials, EntryListOptions, Record, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sugarcrm_rest::Error> {
//!     let credentials = Credentials::new(
//!         "https://crm.example.com/service/v4_1/rest.php",
//!         "admin",
//!         "secret",
//!     );
//!     let session = Session::login(&credentials).await?;
//!
//!     // Filter by example
//!     let probe = Record::for_module("Contacts").with("last_name", "Sm%");
//!     let contacts = session
//!         .get_entry_list(&probe, &EntryListOptions::new().with_max_results(10))
//!         .await?;
//!
//!     // Create
//!     let mut lead = Record::for_module("Leads").with("last_name", "Lovelace");
//!     session.set_entry(&mut lead).await?;
//!     println!("created {:?}", lead.id());
//!
//!     Ok(())
//! }
//! ```

mod attachment;
mod entry;
mod error;
mod kind;
mod record;
mod session;
mod types;

pub use attachment::Attachment;
pub use error::{Error, ErrorKind, Result};
pub use kind::RecordKind;
pub use record::{FieldValue, Record, WireField, NEW_WITH_ID};
pub use session::Session;
pub use types::{
    EntryListOptions, LinkRequest, RelationshipBatch, RelationshipCounts, RelationshipStatus,
    SmartWrite, WrittenRecords,
};

// Re-export the pieces callers need to open a session
pub use sugarcrm_auth::{Credentials, LoginResult, SessionToken};
pub use sugarcrm_client::{ClientConfig, ClientConfigBuilder};
