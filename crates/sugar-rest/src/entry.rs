//! Decoding of `entry_list` / `relationship_list` replies into records.

use indexmap::IndexMap;
use serde_json::Value;
use sugarcrm_client::codec;
use tracing::warn;

use crate::kind::RecordKind;
use crate::record::{FieldValue, Record};

/// What one reply entry's `name_value_list` held.
#[derive(Debug, PartialEq)]
pub(crate) enum Entry {
    /// A mapping of field name to `{name, value}` wrapper.
    Fields(IndexMap<String, FieldValue>),
    /// A list of warning objects: the server's way of saying the id does
    /// not exist.
    NotFound,
    /// Anything else, including a field that is not a value wrapper.
    Malformed,
}

impl Entry {
    pub(crate) fn decode(name_value_list: &Value) -> Entry {
        match name_value_list {
            Value::Object(fields) => {
                let mut decoded = IndexMap::with_capacity(fields.len());
                for (name, wrapped) in fields {
                    let Some(value) = codec::unwrap_field(wrapped) else {
                        return Entry::Malformed;
                    };
                    decoded.insert(name.clone(), FieldValue::from_json(value));
                }
                Entry::Fields(decoded)
            }
            // PHP encodes an empty associative array as `[]`.
            Value::Array(items) if items.is_empty() => Entry::Fields(IndexMap::new()),
            Value::Array(items) if items.iter().any(Value::is_object) => Entry::NotFound,
            _ => Entry::Malformed,
        }
    }
}

/// Outcome of decoding a batch of entries.
///
/// Batch reads stop at the first malformed entry and keep what came
/// before it; a not-found marker anywhere discards the whole batch.
#[derive(Debug, PartialEq)]
pub(crate) enum Harvest<T> {
    Complete(Vec<T>),
    Partial(Vec<T>),
    Empty,
}

impl<T> Harvest<T> {
    pub(crate) fn into_vec(self, rpc: &str) -> Vec<T> {
        match self {
            Harvest::Complete(items) => items,
            Harvest::Partial(items) => {
                warn!(
                    rpc,
                    kept = items.len(),
                    "Reply contained a malformed entry; returning entries decoded before it"
                );
                items
            }
            Harvest::Empty => Vec::new(),
        }
    }
}

/// Records of `kind` from a `get_entries` `entry_list`.
pub(crate) fn harvest_records(kind: &RecordKind, entries: &[Value]) -> Harvest<Record> {
    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(name_value_list) = entry.get("name_value_list") else {
            return Harvest::Partial(records);
        };
        match Entry::decode(name_value_list) {
            Entry::Fields(fields) => {
                let mut record = Record::new(kind.clone());
                record.extend(fields);
                records.push(record);
            }
            Entry::NotFound => return Harvest::Empty,
            Entry::Malformed => return Harvest::Partial(records),
        }
    }
    Harvest::Complete(records)
}

/// Ids of the entries in a `get_entries` `entry_list` that actually exist.
///
/// The server answers missing ids with a short warning list instead of a
/// field map, so anything with more than two fields counts as existing.
pub(crate) fn harvest_existing_ids(entries: &[Value]) -> Harvest<String> {
    let mut ids = Vec::with_capacity(entries.len());
    for entry in entries {
        let field_count = match entry.get("name_value_list") {
            Some(Value::Object(fields)) => fields.len(),
            Some(Value::Array(items)) => items.len(),
            _ => return Harvest::Partial(ids),
        };
        if field_count <= 2 {
            continue;
        }
        match entry.get("id").and_then(Value::as_str) {
            Some(id) => ids.push(id.to_string()),
            None => return Harvest::Partial(ids),
        }
    }
    Harvest::Complete(ids)
}

/// Attach the related records in one `relationship_list` row to `record`,
/// each link under its own name.
///
/// Accepts both the v4.1 shape (`{"link_list": [{name, records: [{link_value:
/// {...}}]}]}`) and the older bare shape (`[{name, records: [{...}]}]`).
/// Links that do not decode are skipped.
pub(crate) fn attach_links(record: &mut Record, row: &Value) {
    let links = match row {
        Value::Array(links) => links,
        Value::Object(row) => match row.get("link_list").and_then(Value::as_array) {
            Some(links) => links,
            None => return,
        },
        _ => return,
    };

    for link in links {
        let Some(name) = link.get("name").and_then(Value::as_str) else {
            continue;
        };
        let kind = RecordKind::from_label(name);
        let related: Vec<Record> = link
            .get("records")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| decode_related(&kind, item))
                    .collect()
            })
            .unwrap_or_default();
        record.set(name, related);
    }
}

fn decode_related(kind: &RecordKind, item: &Value) -> Option<Record> {
    let fields = item.get("link_value").unwrap_or(item);
    match Entry::decode(fields) {
        Entry::Fields(fields) => {
            let mut record = Record::new(kind.clone());
            record.extend(fields);
            Some(record)
        }
        Entry::NotFound | Entry::Malformed => None,
    }
}
