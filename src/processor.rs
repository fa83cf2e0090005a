// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The sort priority processor.
//!
//! A processor is a pipeline stage that sees each item before the host stores
//! it. This one runs in the `add_properties` stage. It reads the item's bundle,
//! resolves a weight, and writes it into `sort_priority_weight` so queries can
//! sort on it.
//!
//! # The guarded write
//!
//! The write happens only when all three hold:
//!
//! 1. the item has a bundle field,
//! 2. the item has the weight field (the index declared it),
//! 3. the weight field is still empty.
//!
//! Anything else is a silent no-op. Condition 3 makes repeated passes over the
//! same item harmless: the first pass wins and later passes change nothing.

use std::fmt;

use tracing::{debug, trace};

use crate::config::ProcessorConfig;
use crate::index::{DatasourceDefinition, IndexDefinition};
use crate::resolver::WeightResolver;
use crate::types::{IndexItem, BUNDLE_FIELD_ID, WEIGHT_FIELD_ID};

/// Pipeline stages a processor can hook into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    AddProperties,
    PreprocessIndex,
    PreprocessQuery,
    PostprocessQuery,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::AddProperties => "add_properties",
            Stage::PreprocessIndex => "preprocess_index",
            Stage::PreprocessQuery => "preprocess_query",
            Stage::PostprocessQuery => "postprocess_query",
        }
    }
}

/// Static plugin metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Stage → weight within that stage. Lower runs earlier.
    pub stages: &'static [(Stage, i32)],
    pub locked: bool,
    pub hidden: bool,
}

impl ProcessorInfo {
    pub fn stage_weight(&self, stage: Stage) -> Option<i32> {
        self.stages
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, w)| *w)
    }
}

/// Value type of a property a processor adds to the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,
    String,
}

/// A property the processor contributes to the index schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub data_type: DataType,
    pub processor_id: &'static str,
}

/// A pluggable stage of the indexing pipeline.
pub trait Processor {
    fn info(&self) -> &'static ProcessorInfo;

    /// Whether this processor can be enabled for `index`.
    fn supports_index(&self, index: &IndexDefinition) -> bool;

    /// Properties added for `datasource`, or index-wide when `None`.
    fn property_definitions(
        &self,
        datasource: Option<&DatasourceDefinition>,
    ) -> Vec<PropertyDefinition>;

    /// Populate processor-owned fields on one item.
    fn add_field_values(&self, item: &mut dyn IndexItem);
}

pub static SORT_PRIORITY_INFO: ProcessorInfo = ProcessorInfo {
    id: "sortprioritycontentbundletype",
    label: "Sort Priority by Content Bundle Type",
    description: "Sort Priority by Content Bundle Type.",
    stages: &[(Stage::AddProperties, 20)],
    locked: false,
    hidden: false,
};

/// Assigns each item the weight configured for its bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortPriorityProcessor {
    config: ProcessorConfig,
}

impl SortPriorityProcessor {
    /// Attach to `index`, refusing indexes with no datasource of the
    /// configured entity type.
    pub fn attach(config: ProcessorConfig, index: &IndexDefinition) -> Result<Self, AttachError> {
        let processor = Self { config };
        if !processor.supports_index(index) {
            return Err(AttachError::UnsupportedIndex {
                index_id: index.id.clone(),
                entity_type: processor.config.entity_type,
            });
        }
        debug!(
            index = %index.id,
            entity_type = %processor.config.entity_type,
            bundles = processor.config.sorttable.len(),
            "attached sort priority processor"
        );
        Ok(processor)
    }

    pub fn configuration(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Replace the configuration wholesale.
    pub fn set_configuration(&mut self, config: ProcessorConfig) {
        self.config = config;
    }

    pub fn resolver(&self) -> WeightResolver<'_> {
        WeightResolver::new(&self.config)
    }

    /// Run the guarded write, reporting whether a weight was written.
    pub fn populate(&self, item: &mut dyn IndexItem) -> bool {
        if item.field(BUNDLE_FIELD_ID).is_none() {
            trace!("no bundle field; skipping");
            return false;
        }
        let weight = self.resolver().resolve(item.bundle());

        let Some(target) = item.field_mut(WEIGHT_FIELD_ID) else {
            trace!("no weight field; skipping");
            return false;
        };
        if !target.is_empty() {
            trace!("weight already set; skipping");
            return false;
        }
        target.add_value(weight);
        true
    }
}

impl Processor for SortPriorityProcessor {
    fn info(&self) -> &'static ProcessorInfo {
        &SORT_PRIORITY_INFO
    }

    fn supports_index(&self, index: &IndexDefinition) -> bool {
        index.indexes_entity_type(&self.config.entity_type)
    }

    fn property_definitions(
        &self,
        datasource: Option<&DatasourceDefinition>,
    ) -> Vec<PropertyDefinition> {
        if datasource.is_some() {
            return Vec::new();
        }
        vec![PropertyDefinition {
            id: WEIGHT_FIELD_ID,
            label: "Sort Priority - Content Bundle Type weight",
            description: "Sort weight assigned from the item's content bundle type.",
            data_type: DataType::Integer,
            processor_id: SORT_PRIORITY_INFO.id,
        }]
    }

    fn add_field_values(&self, item: &mut dyn IndexItem) {
        self.populate(item);
    }
}

/// Error type for attaching a processor to an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachError {
    /// No datasource of the index indexes the required entity type.
    UnsupportedIndex {
        index_id: String,
        entity_type: String,
    },
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachError::UnsupportedIndex {
                index_id,
                entity_type,
            } => write!(
                f,
                "index '{}' has no datasource indexing entity type '{}'",
                index_id, entity_type
            ),
        }
    }
}

impl std::error::Error for AttachError {}
