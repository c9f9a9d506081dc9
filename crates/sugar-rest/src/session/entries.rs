//! Entry reads: by id, by batch of ids, by filter, and across a link.

use std::collections::BTreeSet;

use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::entry::{attach_links, harvest_existing_ids, harvest_records, Entry};
use crate::error::{Error, Result};
use crate::kind::RecordKind;
use crate::record::Record;
use crate::types::{EntryListOptions, LinkRequest};

impl super::Session {
    /// Fetch one entry by id, optionally with related records.
    ///
    /// Returns `Ok(None)` when the server reports that no such entry exists.
    /// A reply without any entry yields an empty record of the module.
    /// Related records are attached under each link's name.
    #[instrument(skip(self, links))]
    pub async fn get_entry(
        &self,
        module: &str,
        id: &str,
        links: &[LinkRequest],
        track_view: bool,
    ) -> Result<Option<Record>> {
        let args = vec![
            json!(module),
            json!(id),
            json!([]),
            LinkRequest::to_json_list(links),
            json!(track_view),
        ];
        let reply = self.call("get_entry", args).await?;

        let mut record = Record::for_module(module);
        let Some(name_value_list) = reply
            .get("entry_list")
            .and_then(|list| list.get(0))
            .and_then(|entry| entry.get("name_value_list"))
        else {
            debug!("Reply carried no entry");
            return Ok(Some(record));
        };

        match Entry::decode(name_value_list) {
            Entry::Fields(fields) => record.extend(fields),
            Entry::NotFound | Entry::Malformed => return Ok(None),
        }

        if let Some(row) = reply.get("relationship_list").and_then(|rows| rows.get(0)) {
            attach_links(&mut record, row);
        }
        Ok(Some(record))
    }

    /// Fetch several entries of one module by id.
    ///
    /// Duplicate ids are requested once. Decoding is best-effort: a
    /// malformed entry ends the batch and the records decoded before it are
    /// returned; if any id does not exist the result is empty.
    #[instrument(skip(self, ids), fields(ids = ids.len()))]
    pub async fn get_entries(&self, module: &str, ids: &[&str], track_view: bool) -> Result<Vec<Record>> {
        let entries = self.fetch_entries(module, ids, track_view).await?;
        let kind = RecordKind::from_label(module);
        Ok(harvest_records(&kind, &entries).into_vec("get_entries"))
    }

    /// Which of `ids` exist in `module`, without decoding the records.
    #[instrument(skip(self, ids), fields(ids = ids.len()))]
    pub async fn get_existing_ids(&self, module: &str, ids: &[&str]) -> Result<Vec<String>> {
        let entries = self.fetch_entries(module, ids, false).await?;
        Ok(harvest_existing_ids(&entries).into_vec("get_entries"))
    }

    async fn fetch_entries(&self, module: &str, ids: &[&str], track_view: bool) -> Result<Vec<Value>> {
        let unique: BTreeSet<&str> = ids.iter().copied().collect();
        let args = vec![
            json!(module),
            json!(unique),
            json!([]),
            json!([]),
            json!(track_view),
        ];
        let reply = self.call("get_entries", args).await?;

        match reply.get("entry_list") {
            Some(Value::Array(entries)) => Ok(entries.clone()),
            _ => Err(Error::invalid_response("get_entries reply has no entry_list")),
        }
    }

    /// Count the entries matching the filter built from `query`'s populated
    /// attributes (see [`Record::query`]).
    #[instrument(skip(self, query), fields(module = %query.module()))]
    pub async fn get_entries_count(&self, query: &Record, deleted: bool) -> Result<u64> {
        let args = vec![
            json!(query.module()),
            json!(query.query()),
            json!(i32::from(deleted)),
        ];
        let reply = self.call("get_entries_count", args).await?;

        let count = match reply.get("result_count") {
            Some(Value::String(count)) => count.trim().parse().ok(),
            Some(Value::Number(count)) => count.as_u64(),
            _ => None,
        };
        count.ok_or_else(|| Error::invalid_response("get_entries_count reply has no result_count"))
    }

    /// List the entries matching `query`'s populated attributes.
    ///
    /// Links requested in `options` are attached to each returned record.
    #[instrument(skip(self, query, options), fields(module = %query.module()))]
    pub async fn get_entry_list(&self, query: &Record, options: &EntryListOptions) -> Result<Vec<Record>> {
        let args = vec![
            json!(query.module()),
            json!(query.query()),
            json!(options.order_by),
            json!(options.offset),
            json!(options.fields),
            LinkRequest::to_json_list(&options.links),
            json!(options.max_results),
            json!(i32::from(options.deleted)),
            json!(i32::from(options.favorites)),
        ];
        let reply = self.call("get_entry_list", args).await?;
        decode_listing(query.kind(), &reply, "get_entry_list")
    }

    /// Records related to one entry through `link_field`.
    ///
    /// `related_fields` selects fields of the related records and
    /// `link_name_fields` fetches their own links in turn. Only live
    /// relationships are returned, ordered by name.
    #[instrument(skip(self, related_fields, link_name_fields))]
    pub async fn get_relationships(
        &self,
        module: &str,
        id: &str,
        link_field: &str,
        related_fields: &[&str],
        link_name_fields: &[LinkRequest],
        limit: u32,
    ) -> Result<Vec<Record>> {
        let args = vec![
            json!(module),
            json!(id),
            json!(link_field),
            json!(format!(" {link_field}.name IS NOT NULL ")),
            json!(related_fields),
            LinkRequest::to_json_list(link_name_fields),
            json!(1),
            json!(format!(" {link_field}.name")),
            json!(0),
            json!(limit),
        ];
        let reply = self.call("get_relationships", args).await?;
        decode_listing(&RecordKind::from_label(link_field), &reply, "get_relationships")
    }
}

/// Records of an `entry_list` with the matching `relationship_list` row
/// attached to each.
fn decode_listing(kind: &RecordKind, reply: &Value, rpc: &str) -> Result<Vec<Record>> {
    let Some(entries) = reply.get("entry_list").and_then(Value::as_array) else {
        return Err(Error::invalid_response(format!("{rpc} reply has no entry_list")));
    };
    let rows = reply.get("relationship_list").and_then(Value::as_array);

    let mut records = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let fields = match entry.get("name_value_list").map(Entry::decode) {
            Some(Entry::Fields(fields)) => fields,
            _ => {
                return Err(Error::invalid_response(format!(
                    "{rpc} entry {i} has no field list"
                )))
            }
        };
        let mut record = Record::new(kind.clone());
        record.extend(fields);
        if let Some(row) = rows.and_then(|rows| rows.get(i)) {
            attach_links(&mut record, row);
        }
        records.push(record);
    }
    Ok(records)
}
