//! Records: a module kind plus an ordered, open-ended attribute map.
//!
//! Attributes hold either scalar text or, for relationship links fetched
//! alongside an entry, a list of related sub-records. The kind lives beside
//! the attribute map, so it never leaks into [`Record::fields`] or
//! [`Record::query`].

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use sugarcrm_client::security::sql;

use crate::kind::RecordKind;

/// Attribute name that marks a record carrying a caller-chosen id as new.
pub const NEW_WITH_ID: &str = "new_with_id";

/// One attribute value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// Explicitly unset. Skipped by [`Record::fields`] and [`Record::query`].
    #[default]
    Absent,
    /// Scalar text as SugarCRM stores it.
    Text(String),
    /// Related records attached under a link name.
    Records(Vec<Record>),
}

impl FieldValue {
    /// Convert a decoded wire value.
    ///
    /// Strings are kept as-is, other scalars become their JSON text, `null`
    /// becomes [`FieldValue::Absent`]. Arrays and objects are kept as JSON
    /// text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Absent,
            Value::String(s) => FieldValue::Text(s.clone()),
            other => FieldValue::Text(other.to_string()),
        }
    }

    /// Wire form: text as a JSON string, related records as an array of
    /// their own field lists, absent as `null`.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Absent => Value::Null,
            FieldValue::Text(text) => Value::String(text.clone()),
            FieldValue::Records(records) => Value::Array(
                records
                    .iter()
                    .map(|record| serde_json::to_value(record.fields()).unwrap_or(Value::Null))
                    .collect(),
            ),
        }
    }

    /// Text content, if this is a scalar.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Related records, if this is a relationship list.
    pub fn as_records(&self) -> Option<&[Record]> {
        match self {
            FieldValue::Records(records) => Some(records),
            _ => None,
        }
    }

    /// Absent, empty text, or an empty relationship list.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Records(records) => records.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Text(value.clone())
    }
}

impl From<Vec<Record>> for FieldValue {
    fn from(value: Vec<Record>) -> Self {
        FieldValue::Records(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// One `{name, value}` entry of a field list sent to the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireField {
    pub name: String,
    pub value: Value,
}

/// A SugarCRM entry of some module.
///
/// # Example
///
/// ```rust
/// use sugarcrm_rest::{Record, RecordKind};
///
/// let lead = Record::for_module("Leads")
///     .with("first_name", "Ada")
///     .with("last_name", "Lovelace");
///
/// assert_eq!(lead.kind(), &RecordKind::Lead);
/// assert_eq!(lead.text("first_name"), Some("Ada"));
/// assert_eq!(lead.fields().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    kind: RecordKind,
    attributes: IndexMap<String, FieldValue>,
}

impl Record {
    /// Empty record of the given kind.
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            attributes: IndexMap::new(),
        }
    }

    /// Empty record for a module label, resolved through the kind registry.
    ///
    /// Unknown labels yield a [`RecordKind::Generic`] record that still
    /// reports the label as its module.
    pub fn for_module(label: &str) -> Self {
        Self::new(RecordKind::from_label(label))
    }

    /// Record for a module label with initial attributes.
    pub fn from_attributes<K, V>(label: &str, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut record = Self::for_module(label);
        record.extend(attributes);
        record
    }

    /// Builder-style [`Record::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// The record's kind.
    pub fn kind(&self) -> &RecordKind {
        &self.kind
    }

    /// Plural module label sent on the wire.
    pub fn module(&self) -> &str {
        self.kind.label()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.attributes.get(name)
    }

    /// Scalar attribute as text.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// Related records attached under a link name.
    pub fn records(&self, name: &str) -> Option<&[Record]> {
        self.get(name).and_then(FieldValue::as_records)
    }

    /// Set an attribute, returning the previous value. Insertion order is
    /// kept; overwriting keeps the original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.attributes.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.attributes.shift_remove(name)
    }

    pub fn extend<K, V>(&mut self, attributes: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        for (name, value) in attributes {
            self.set(name, value);
        }
    }

    /// The `id` attribute, when set and non-empty.
    pub fn id(&self) -> Option<&str> {
        self.text("id").filter(|id| !id.is_empty())
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.set("id", id.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Field list for writes: one `{name, value}` per populated attribute,
    /// in insertion order. Empty text, empty relationship lists and absent
    /// values are left out.
    pub fn fields(&self) -> Vec<WireField> {
        Self::project(self.iter())
    }

    /// Field list for an explicit mapping instead of a record's own
    /// attributes. Same skipping rules as [`Record::fields`].
    pub fn project<'a>(fields: impl IntoIterator<Item = (&'a str, &'a FieldValue)>) -> Vec<WireField> {
        fields
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| WireField {
                name: name.to_string(),
                value: value.to_json(),
            })
            .collect()
    }

    /// Filter expression matching every populated scalar attribute.
    ///
    /// Each clause is `<module>.<field>='<value>' `, or
    /// `<module>.<field> LIKE '<value>' ` when the value contains `%`.
    /// Clauses are joined with `AND `. The module prefix is the lowercased
    /// module label. Values are inserted verbatim; see
    /// [`Record::escaped_query`] for untrusted input.
    ///
    /// ```rust
    /// use sugarcrm_rest::Record;
    ///
    /// let probe = Record::for_module("Contacts").with("first_name", "Jo%");
    /// assert_eq!(probe.query(), "contacts.first_name LIKE 'Jo%' ");
    /// ```
    pub fn query(&self) -> String {
        self.render_query(|value| value.to_string())
    }

    /// Like [`Record::query`], with each value SQL-escaped first. `%` and
    /// `_` are kept so `LIKE` patterns still work.
    pub fn escaped_query(&self) -> String {
        self.render_query(sql::escape_string)
    }

    fn render_query(&self, render: impl Fn(&str) -> String) -> String {
        let module = self.module().to_lowercase();
        let mut query = String::new();
        for (name, value) in &self.attributes {
            // Only scalar text can be filtered on.
            let Some(text) = value.as_text().filter(|text| !text.is_empty()) else {
                continue;
            };
            if !query.is_empty() {
                query.push_str("AND ");
            }
            let value = render(text);
            if text.contains('%') {
                query.push_str(&format!("{module}.{name} LIKE '{value}' "));
            } else {
                query.push_str(&format!("{module}.{name}='{value}' "));
            }
        }
        query
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = indexmap::map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}
