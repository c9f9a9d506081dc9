//! File uploads: document revisions and note attachments.

use serde_json::{json, Value};
use tracing::instrument;

use crate::attachment::Attachment;
use crate::error::{Error, Result};
use crate::record::Record;

impl super::Session {
    /// Upload a new revision of `document`.
    ///
    /// The revision label is `revision` when given, else the document's own
    /// `revision` attribute. Returns the id of the created revision.
    #[instrument(skip(self, document, attachment), fields(filename = %attachment.filename()))]
    pub async fn set_document_revision(
        &self,
        document: &Record,
        attachment: &Attachment,
        revision: Option<&str>,
    ) -> Result<String> {
        let id = document
            .id()
            .ok_or_else(|| Error::invalid_input("document has no id"))?;
        let revision = revision
            .or_else(|| document.text("revision"))
            .filter(|revision| !revision.is_empty())
            .ok_or_else(|| Error::invalid_input("no revision given and document has none"))?;

        let fields = json!({
            "id": id,
            "filename": attachment.filename(),
            "file": attachment.encoded(),
            "revision": revision,
        });
        let reply = self.call("set_document_revision", vec![fields]).await?;
        reply_id(&reply, "set_document_revision")
    }

    /// Attach a file to `note`. Returns the note id the server reports.
    #[instrument(skip(self, note, attachment), fields(filename = %attachment.filename()))]
    pub async fn set_note_attachment(&self, note: &Record, attachment: &Attachment) -> Result<String> {
        let id = note
            .id()
            .ok_or_else(|| Error::invalid_input("note has no id"))?;

        let fields = json!({
            "id": id,
            "filename": attachment.filename(),
            "file": attachment.encoded(),
        });
        let reply = self.call("set_note_attachment", vec![fields]).await?;
        reply_id(&reply, "set_note_attachment")
    }
}

fn reply_id(reply: &Value, rpc: &str) -> Result<String> {
    reply
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::invalid_response(format!("{rpc} reply has no id")))
}
