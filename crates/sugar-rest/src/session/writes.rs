//! Entry writes.

use std::collections::HashSet;

use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::record::{Record, NEW_WITH_ID};
use crate::types::{SmartWrite, WrittenRecords};

impl super::Session {
    /// Create or update one entry and store the id the server assigned.
    ///
    /// Returns the same record for chaining.
    #[instrument(skip(self, record), fields(module = %record.module()))]
    pub async fn set_entry<'a>(&self, record: &'a mut Record) -> Result<&'a mut Record> {
        let args = vec![json!(record.module()), json!(record.fields())];
        let reply = self.call("set_entry", args).await?;

        let id = reply
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::invalid_response("set_entry reply has no id"))?;
        record.set_id(id);
        Ok(record)
    }

    /// Create or update several entries in one call. All records are sent
    /// under the first record's module.
    ///
    /// Assigned ids are stored back positionally. An empty slice sends
    /// nothing.
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub async fn set_entries(&self, records: &mut [Record]) -> Result<()> {
        let Some(first) = records.first() else {
            return Ok(());
        };
        let module = first.module().to_string();
        let field_lists: Vec<Value> = records.iter().map(|r| json!(r.fields())).collect();

        let reply = self
            .call("set_entries", vec![json!(module), Value::Array(field_lists)])
            .await?;

        let ids = reply
            .get("ids")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::invalid_response("set_entries reply has no ids"))?;
        if ids.len() != records.len() {
            warn!(
                sent = records.len(),
                returned = ids.len(),
                "set_entries returned a different number of ids"
            );
        }
        for (record, id) in records.iter_mut().zip(ids) {
            if let Some(id) = id.as_str() {
                record.set_id(id);
            }
        }
        Ok(())
    }

    /// Write records that may carry caller-chosen ids.
    ///
    /// Ids not yet known to the server are flagged `new_with_id` so they
    /// are created under that id instead of silently skipped. If the
    /// existence check fails nothing is written and
    /// [`SmartWrite::CheckFailed`] is returned. Failures of the write itself
    /// are returned as errors.
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub async fn set_entries_smart(&self, mut records: Vec<Record>) -> Result<SmartWrite> {
        let Some(first) = records.first() else {
            return Ok(SmartWrite::Written(WrittenRecords::default()));
        };
        let module = first.module().to_string();

        let ids: Vec<&str> = records.iter().filter_map(Record::id).collect();
        if !ids.is_empty() {
            let existing: HashSet<String> = match self.get_existing_ids(&module, &ids).await {
                Ok(existing) => existing.into_iter().collect(),
                Err(reason) => {
                    warn!(error = %reason, "Existence check before smart write failed");
                    return Ok(SmartWrite::CheckFailed {
                        msg: "Failed to check records".to_string(),
                        reason,
                    });
                }
            };

            let mut flagged = 0usize;
            for record in &mut records {
                if record.id().is_some_and(|id| !existing.contains(id)) {
                    record.set(NEW_WITH_ID, "1");
                    flagged += 1;
                }
            }
            debug!(flagged, "Marked records with unknown ids as new");
        }

        self.set_entries(&mut records).await?;
        Ok(SmartWrite::Written(WrittenRecords::new(records)))
    }
}
