//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::collections::BTreeMap;

use crate::build::Document;
use crate::index::{DatasourceDefinition, IndexDefinition};
use crate::types::{Field, BUNDLE_FIELD_ID, WEIGHT_FIELD_ID};

/// Create an item with a bundle and an empty weight field.
///
/// This is the canonical implementation used across all tests.
pub fn make_item(id: usize, bundle: &str) -> Document {
    let mut fields = BTreeMap::new();
    let mut bundle_field = Field::new();
    bundle_field.add_value(bundle);
    fields.insert(BUNDLE_FIELD_ID.to_string(), bundle_field);
    fields.insert(WEIGHT_FIELD_ID.to_string(), Field::new());
    Document {
        id,
        datasource: Some("entity:node".to_string()),
        fields,
    }
}

/// Create an item whose index never declared the weight field.
pub fn make_item_without_weight_field(id: usize, bundle: &str) -> Document {
    let mut doc = make_item(id, bundle);
    doc.fields.remove(WEIGHT_FIELD_ID);
    doc
}

/// Create an item that already carries a weight.
pub fn make_weighted_item(id: usize, bundle: &str, weight: i64) -> Document {
    let mut doc = make_item(id, bundle);
    if let Some(field) = doc.fields.get_mut(WEIGHT_FIELD_ID) {
        field.add_value(weight);
    }
    doc
}

/// An index with one content datasource (article, page, event) and one user
/// datasource.
pub fn node_index() -> IndexDefinition {
    IndexDefinition::new(
        "content",
        vec![
            DatasourceDefinition::new("entity:node", "node")
                .with_bundle("article", "Article")
                .with_bundle("page", "Basic page")
                .with_bundle("event", "Event"),
            DatasourceDefinition::new("entity:user", "user").with_bundle("user", "User"),
        ],
    )
}
