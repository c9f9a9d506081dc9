//! RPCs SugarCRM offers that this crate names but does not implement.
//!
//! Each returns [`ErrorKind::NotImplemented`](crate::ErrorKind::NotImplemented)
//! without contacting the server. [`Session::call`](super::Session::call)
//! reaches any of them untyped.

use serde_json::Value;

use crate::error::Result;

impl super::Session {
    /// Download a document revision.
    pub async fn get_document_revision(&self) -> Result<Value> {
        Err(Self::not_implemented("get_document_revision"))
    }

    /// Fetch translated labels for modules.
    pub async fn get_language_definition(&self) -> Result<Value> {
        Err(Self::not_implemented("get_language_definition"))
    }

    pub async fn get_last_viewed(&self) -> Result<Value> {
        Err(Self::not_implemented("get_last_viewed"))
    }

    /// Relationships changed within a time window.
    pub async fn get_modified_relationships(&self) -> Result<Value> {
        Err(Self::not_implemented("get_modified_relationships"))
    }

    /// Checksum of a module's field definitions.
    pub async fn get_module_fields_md5(&self) -> Result<Value> {
        Err(Self::not_implemented("get_module_fields_md5"))
    }

    pub async fn get_module_layout(&self) -> Result<Value> {
        Err(Self::not_implemented("get_module_layout"))
    }

    /// Download a note's attachment.
    pub async fn get_note_attachment(&self) -> Result<Value> {
        Err(Self::not_implemented("get_note_attachment"))
    }

    /// Render a quote as PDF.
    pub async fn get_quotes_pdf(&self) -> Result<Value> {
        Err(Self::not_implemented("get_quotes_pdf"))
    }

    pub async fn get_report_entries(&self) -> Result<Value> {
        Err(Self::not_implemented("get_report_entries"))
    }

    /// Render a report as PDF.
    pub async fn get_report_pdf(&self) -> Result<Value> {
        Err(Self::not_implemented("get_report_pdf"))
    }

    /// Server flavor, version and time.
    pub async fn get_server_info(&self) -> Result<Value> {
        Err(Self::not_implemented("get_server_info"))
    }

    pub async fn get_upcoming_activities(&self) -> Result<Value> {
        Err(Self::not_implemented("get_upcoming_activities"))
    }

    /// Id of the logged-in user.
    pub async fn get_user_id(&self) -> Result<Value> {
        Err(Self::not_implemented("get_user_id"))
    }

    /// Default team of the logged-in user.
    pub async fn get_user_team_id(&self) -> Result<Value> {
        Err(Self::not_implemented("get_user_team_id"))
    }

    pub async fn job_queue_cycle(&self) -> Result<Value> {
        Err(Self::not_implemented("job_queue_cycle"))
    }

    /// Claim the next scheduled job.
    pub async fn job_queue_next(&self) -> Result<Value> {
        Err(Self::not_implemented("job_queue_next"))
    }

    /// Run a scheduled job.
    pub async fn job_queue_run(&self) -> Result<Value> {
        Err(Self::not_implemented("job_queue_run"))
    }

    pub async fn logout(&self) -> Result<Value> {
        Err(Self::not_implemented("logout"))
    }

    /// Exchange an OAuth token for a session.
    pub async fn oauth_access(&self) -> Result<Value> {
        Err(Self::not_implemented("oauth_access"))
    }

    /// Mark the session for seamless web login.
    pub async fn seamless_login(&self) -> Result<Value> {
        Err(Self::not_implemented("seamless_login"))
    }

    pub async fn search_by_module(&self) -> Result<Value> {
        Err(Self::not_implemented("search_by_module"))
    }

    /// Record a campaign mail merge.
    pub async fn set_campaign_merge(&self) -> Result<Value> {
        Err(Self::not_implemented("set_campaign_merge"))
    }

    /// Import emails through SNIP.
    pub async fn snip_import_emails(&self) -> Result<Value> {
        Err(Self::not_implemented("snip_import_emails"))
    }

    pub async fn snip_update_contacts(&self) -> Result<Value> {
        Err(Self::not_implemented("snip_update_contacts"))
    }
}
