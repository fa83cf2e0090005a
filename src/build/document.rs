use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{Field, IndexItem};

/// An indexed item as read from (and written back to) disk.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: usize,
    /// Datasource the item came from, e.g. `entity:node`.
    #[serde(default)]
    pub datasource: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, Field>,
}

impl IndexItem for Document {
    fn field(&self, id: &str) -> Option<&Field> {
        self.fields.get(id)
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut Field> {
        self.fields.get_mut(id)
    }

    fn field_ids(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }
}
