//! Relationship writes.

use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::record::Record;
use crate::types::{RelationshipBatch, RelationshipCounts, RelationshipStatus};

impl super::Session {
    /// Relate `child` to `parent` (or remove the relation when `delete`).
    ///
    /// The link is named `<parent module>_<child module>` in lowercase and
    /// carries `relationship_type = "Other"`. Both records need an id.
    #[instrument(skip(self, parent, child), fields(parent = %parent.module(), child = %child.module()))]
    pub async fn set_relationship(
        &self,
        parent: &Record,
        child: &Record,
        delete: bool,
    ) -> Result<RelationshipCounts> {
        let parent_id = parent
            .id()
            .ok_or_else(|| Error::invalid_input("parent record has no id"))?;
        let child_id = child
            .id()
            .ok_or_else(|| Error::invalid_input("child record has no id"))?;

        let link_name = format!(
            "{}_{}",
            parent.module().to_lowercase(),
            child.module().to_lowercase()
        );
        let args = vec![
            json!(parent.module()),
            json!(parent_id),
            json!(child.module().to_lowercase()),
            json!([child_id]),
            json!([{"name": link_name, "value": "Other"}]),
            json!(i32::from(delete)),
        ];
        let reply = self.call("set_relationship", args).await?;
        parse_counts(reply)
    }

    /// Apply several relationship batches in one call.
    ///
    /// Each batch contributes one module, link field, relationship name and
    /// delete flag, and one parent id plus related-id list per entry of its
    /// map. The server pairs these lists positionally, so every batch must
    /// map exactly one parent id. No batches yields
    /// [`RelationshipStatus::NothingToDo`]; lists of differing lengths yield
    /// [`RelationshipStatus::InvalidInput`]. Neither sends anything.
    #[instrument(skip(self, batches), fields(batches = batches.len()))]
    pub async fn set_relationships(&self, batches: &[RelationshipBatch]) -> Result<RelationshipStatus> {
        let mut module_names = Vec::new();
        let mut module_ids = Vec::new();
        let mut link_fields = Vec::new();
        let mut related_ids = Vec::new();
        let mut name_value_lists = Vec::new();
        let mut delete_flags = Vec::new();

        for batch in batches {
            module_names.push(batch.parent_module.as_str());
            for (parent_id, ids) in &batch.map {
                module_ids.push(parent_id.as_str());
                related_ids.push(ids);
            }
            link_fields.push(batch.link_field.as_str());
            delete_flags.push(i32::from(batch.delete));
            name_value_lists.push(json!({
                "name": format!(
                    "{}_{}",
                    batch.parent_module.to_lowercase(),
                    batch.link_field.to_lowercase()
                ),
                "value": "Other",
            }));
        }

        if module_names.is_empty() {
            debug!("No relationship batches to send");
            return Ok(RelationshipStatus::NothingToDo);
        }
        if module_names.len() != module_ids.len() || module_names.len() != related_ids.len() {
            debug!(
                modules = module_names.len(),
                ids = module_ids.len(),
                "Relationship batch lists differ in length"
            );
            return Ok(RelationshipStatus::InvalidInput);
        }

        let args = vec![
            json!(module_names),
            json!(module_ids),
            json!(link_fields),
            json!(related_ids),
            Value::Array(name_value_lists),
            json!(delete_flags),
        ];
        let reply = self.call("set_relationships", args).await?;
        Ok(RelationshipStatus::Completed(parse_counts(reply)?))
    }
}

fn parse_counts(reply: Value) -> Result<RelationshipCounts> {
    serde_json::from_value(reply).map_err(|e| {
        Error::with_source(
            crate::ErrorKind::InvalidResponse("relationship reply has no counters".to_string()),
            e,
        )
    })
}
