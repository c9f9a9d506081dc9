//! Request options and result types for the session RPCs.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::Error;
use crate::record::Record;

/// A relationship link to fetch alongside entries, with the fields wanted
/// from the related records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    pub name: String,
    pub fields: Vec<String>,
}

impl LinkRequest {
    pub fn new<S: Into<String>>(name: impl Into<String>, fields: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// `{"name": <lowercased link>, "value": [fields...]}`.
    pub(crate) fn to_json(&self) -> Value {
        json!({"name": self.name.to_lowercase(), "value": self.fields})
    }

    pub(crate) fn to_json_list(links: &[LinkRequest]) -> Value {
        Value::Array(links.iter().map(LinkRequest::to_json).collect())
    }
}

/// Options for `get_entry_list`.
///
/// The default asks for every field, no links, server ordering, no result
/// cap, offset 0, live (not deleted) records and no favorites filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryListOptions {
    pub fields: Vec<String>,
    pub links: Vec<LinkRequest>,
    pub order_by: String,
    pub max_results: u32,
    pub offset: u32,
    pub deleted: bool,
    pub favorites: bool,
}

impl EntryListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_link(mut self, link: LinkRequest) -> Self {
        self.links.push(link);
        self
    }

    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = order_by.into();
        self
    }

    /// Cap the number of entries returned. `0` means no cap.
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    pub fn with_favorites(mut self, favorites: bool) -> Self {
        self.favorites = favorites;
        self
    }
}

/// Counters returned by `set_relationship` / `set_relationships`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RelationshipCounts {
    #[serde(default)]
    pub created: u64,
    #[serde(default)]
    pub failed: u64,
    #[serde(default)]
    pub deleted: u64,
}

/// One `set_relationships` slot: a parent module and link field, plus the
/// related ids to set on a parent id.
///
/// The server expects exactly one parent id per batch; see
/// `Session::set_relationships`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipBatch {
    /// Parent module label, e.g. `"Accounts"`.
    pub parent_module: String,
    /// Link field on the parent, e.g. `"contacts"`.
    pub link_field: String,
    pub map: IndexMap<String, Vec<String>>,
    pub delete: bool,
}

impl RelationshipBatch {
    pub fn new(parent_module: impl Into<String>, link_field: impl Into<String>) -> Self {
        Self {
            parent_module: parent_module.into(),
            link_field: link_field.into(),
            ..Self::default()
        }
    }

    /// Relate `related_ids` to `parent_id`.
    pub fn relate<S: Into<String>>(
        mut self,
        parent_id: impl Into<String>,
        related_ids: impl IntoIterator<Item = S>,
    ) -> Self {
        self.map
            .entry(parent_id.into())
            .or_default()
            .extend(related_ids.into_iter().map(Into::into));
        self
    }

    /// Remove the relationships instead of creating them.
    pub fn deleting(mut self) -> Self {
        self.delete = true;
        self
    }
}

/// Outcome of `set_relationships`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipStatus {
    /// No batches were given; nothing was sent.
    NothingToDo,
    /// Module, id and related-id lists differ in length; nothing was sent.
    InvalidInput,
    /// The server applied the batch.
    Completed(RelationshipCounts),
}

impl RelationshipStatus {
    /// HTTP-style status: 204, 400 or 200.
    pub fn status(&self) -> u16 {
        match self {
            RelationshipStatus::NothingToDo => 204,
            RelationshipStatus::InvalidInput => 400,
            RelationshipStatus::Completed(_) => 200,
        }
    }

    pub fn msg(&self) -> &'static str {
        match self {
            RelationshipStatus::NothingToDo => "nothing to do",
            RelationshipStatus::InvalidInput => "invalid input numbers",
            RelationshipStatus::Completed(_) => "ok",
        }
    }

    pub fn counts(&self) -> Option<RelationshipCounts> {
        match self {
            RelationshipStatus::Completed(counts) => Some(*counts),
            _ => None,
        }
    }
}

/// Outcome of `set_entries_smart`.
#[derive(Debug)]
pub enum SmartWrite {
    /// Records were written; they are returned indexed by id.
    Written(WrittenRecords),
    /// The existence pre-check failed; nothing was written.
    CheckFailed { msg: String, reason: Error },
}

impl SmartWrite {
    pub fn is_written(&self) -> bool {
        matches!(self, SmartWrite::Written(_))
    }

    pub fn written(&self) -> Option<&WrittenRecords> {
        match self {
            SmartWrite::Written(written) => Some(written),
            SmartWrite::CheckFailed { .. } => None,
        }
    }
}

/// Records returned by a smart write, in submission order, with a lookup
/// by id.
#[derive(Debug, Clone, Default)]
pub struct WrittenRecords {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl WrittenRecords {
    pub(crate) fn new(records: Vec<Record>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .filter_map(|(position, record)| record.id().map(|id| (id.to_string(), position)))
            .collect();
        Self { records, index }
    }

    /// The written record with the given id.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_request_json_lowercases_name() {
        let link = LinkRequest::new("Contacts", ["first_name", "last_name"]);
        assert_eq!(
            link.to_json(),
            json!({"name": "contacts", "value": ["first_name", "last_name"]})
        );
    }

    #[test]
    fn test_entry_list_defaults() {
        let options = EntryListOptions::default();
        assert!(options.fields.is_empty());
        assert_eq!(options.max_results, 0);
        assert_eq!(options.offset, 0);
        assert!(!options.deleted);
        assert!(!options.favorites);

        let options = EntryListOptions::new()
            .with_fields(["id"])
            .with_max_results(10)
            .with_offset(20)
            .with_order_by("name");
        assert_eq!(options.fields, vec!["id".to_string()]);
        assert_eq!(options.order_by, "name");
    }

    #[test]
    fn test_relationship_batch_merges_parent_ids() {
        let batch = RelationshipBatch::new("Accounts", "contacts")
            .relate("A1", ["C1"])
            .relate("A1", ["C2"])
            .relate("A2", ["C3"]);
        assert_eq!(batch.map.len(), 2);
        assert_eq!(batch.map["A1"], vec!["C1".to_string(), "C2".to_string()]);
        assert!(!batch.delete);
        assert!(batch.deleting().delete);
    }

    #[test]
    fn test_relationship_status_codes() {
        assert_eq!(RelationshipStatus::NothingToDo.status(), 204);
        assert_eq!(RelationshipStatus::InvalidInput.status(), 400);
        assert_eq!(RelationshipStatus::InvalidInput.msg(), "invalid input numbers");
        let done = RelationshipStatus::Completed(RelationshipCounts {
            created: 2,
            ..Default::default()
        });
        assert_eq!(done.status(), 200);
        assert_eq!(done.counts().map(|c| c.created), Some(2));
    }

    #[test]
    fn test_relationship_counts_default_missing_fields() {
        let counts: RelationshipCounts = serde_json::from_value(json!({"created": 1})).unwrap();
        assert_eq!(counts.created, 1);
        assert_eq!(counts.failed, 0);
        assert_eq!(counts.deleted, 0);
    }

    #[test]
    fn test_written_records_index() {
        let written = WrittenRecords::new(vec![
            Record::for_module("Leads").with("id", "L-1"),
            Record::for_module("Leads").with("name", "no id"),
            Record::for_module("Leads").with("id", "L-2"),
        ]);
        assert_eq!(written.len(), 3);
        assert_eq!(written.get("L-2").and_then(|r| r.id()), Some("L-2"));
        assert!(written.get("missing").is_none());
        assert_eq!(written.ids().count(), 2);
    }
}
