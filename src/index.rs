// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The index side of the host contract.
//!
//! A search index pulls items from one or more datasources. Each datasource
//! indexes a single entity type and knows which bundles that entity type has.
//! The processor needs exactly two things from here: "does any datasource index
//! content items?" (eligibility) and "which bundles can be weighted?" (settings).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One datasource of a search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasourceDefinition {
    /// Host-side identifier, e.g. `entity:node`.
    pub id: String,
    /// Entity type indexed by this datasource, e.g. `node`.
    pub entity_type: String,
    /// Bundle key → display name.
    #[serde(default)]
    pub bundles: BTreeMap<String, String>,
}

impl DatasourceDefinition {
    pub fn new(id: &str, entity_type: &str) -> Self {
        Self {
            id: id.to_string(),
            entity_type: entity_type.to_string(),
            bundles: BTreeMap::new(),
        }
    }

    /// Builder-style bundle registration.
    pub fn with_bundle(mut self, key: &str, label: &str) -> Self {
        self.bundles.insert(key.to_string(), label.to_string());
        self
    }

    #[inline]
    pub fn indexes_entity_type(&self, entity_type: &str) -> bool {
        self.entity_type == entity_type
    }
}

/// Where a bundle comes from, as seen from the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleInfo<'a> {
    pub key: &'a str,
    pub label: &'a str,
    pub datasource_id: &'a str,
}

/// A search index as far as the processor cares: an id and its datasources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDefinition {
    pub id: String,
    #[serde(default)]
    pub datasources: Vec<DatasourceDefinition>,
}

impl IndexDefinition {
    pub fn new(id: &str, datasources: Vec<DatasourceDefinition>) -> Self {
        Self {
            id: id.to_string(),
            datasources,
        }
    }

    /// Datasources indexing `entity_type`, in declaration order.
    pub fn datasources_for<'a>(
        &'a self,
        entity_type: &'a str,
    ) -> impl Iterator<Item = &'a DatasourceDefinition> + 'a {
        self.datasources
            .iter()
            .filter(move |ds| ds.indexes_entity_type(entity_type))
    }

    pub fn indexes_entity_type(&self, entity_type: &str) -> bool {
        self.datasources_for(entity_type).next().is_some()
    }

    /// Every bundle of every datasource indexing `entity_type`.
    ///
    /// If two datasources declare the same bundle key, the first one wins.
    pub fn bundles_for<'a>(&'a self, entity_type: &'a str) -> Vec<BundleInfo<'a>> {
        let mut seen = BTreeMap::new();
        for ds in self.datasources_for(entity_type) {
            for (key, label) in &ds.bundles {
                seen.entry(key.as_str()).or_insert(BundleInfo {
                    key,
                    label,
                    datasource_id: &ds.id,
                });
            }
        }
        seen.into_values().collect()
    }
}
