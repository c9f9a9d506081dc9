//! Module metadata: available modules and their fields.

use serde_json::{json, Value};
use tracing::instrument;

use crate::error::{Error, Result};
use crate::kind::RecordKind;
use crate::record::{FieldValue, Record};

impl super::Session {
    /// Modules visible to the logged-in user, one [`RecordKind::Module`]
    /// record per module.
    ///
    /// `filter` is `"default"`, `"mobile"` or `"all"`.
    #[instrument(skip(self))]
    pub async fn get_available_modules(&self, filter: &str) -> Result<Vec<Record>> {
        let modules = self.fetch_modules(filter).await?;
        Ok(modules
            .iter()
            .filter_map(Value::as_object)
            .map(|module| {
                let mut record = Record::new(RecordKind::Module);
                record.extend(
                    module
                        .iter()
                        .map(|(name, value)| (name.clone(), FieldValue::from_json(value))),
                );
                record
            })
            .collect())
    }

    /// Just the `module_key` of each available module.
    #[instrument(skip(self))]
    pub async fn get_available_module_keys(&self, filter: &str) -> Result<Vec<String>> {
        let modules = self.fetch_modules(filter).await?;
        Ok(modules
            .iter()
            .filter_map(|module| module.get("module_key").and_then(Value::as_str))
            .map(str::to_string)
            .collect())
    }

    async fn fetch_modules(&self, filter: &str) -> Result<Vec<Value>> {
        let reply = self.call("get_available_modules", vec![json!(filter)]).await?;
        match reply.get("modules") {
            Some(Value::Array(modules)) => Ok(modules.clone()),
            _ => Err(Error::invalid_response(
                "get_available_modules reply has no modules",
            )),
        }
    }

    /// Field names of `query`'s module. An empty `fields` asks for all.
    #[instrument(skip(self, query, fields), fields(module = %query.module()))]
    pub async fn get_module_fields(&self, query: &Record, fields: &[&str]) -> Result<Vec<String>> {
        let reply = self.fetch_module_fields(query, fields).await?;
        Ok(match reply.get("module_fields") {
            Some(Value::Object(defs)) => defs.keys().cloned().collect(),
            _ => Vec::new(),
        })
    }

    /// Full field definitions (name, type, label, options, ...) of
    /// `query`'s module, in server order.
    #[instrument(skip(self, query, fields), fields(module = %query.module()))]
    pub async fn get_module_field_definitions(
        &self,
        query: &Record,
        fields: &[&str],
    ) -> Result<Vec<Value>> {
        let reply = self.fetch_module_fields(query, fields).await?;
        Ok(match reply.get("module_fields") {
            Some(Value::Object(defs)) => defs.values().cloned().collect(),
            _ => Vec::new(),
        })
    }

    async fn fetch_module_fields(&self, query: &Record, fields: &[&str]) -> Result<Value> {
        self.call(
            "get_module_fields",
            vec![json!(query.module()), json!(fields)],
        )
        .await
    }
}
