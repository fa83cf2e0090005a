// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bundle-weighted sort priority for search indexing pipelines.
//!
//! Editors want some content types to rank above others: press releases before
//! blog posts, say. This crate provides an indexing processor that stamps every
//! content item with an integer weight looked up from its bundle, so queries can
//! sort on it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  config.rs  │────▶│ resolver.rs  │────▶│ processor.rs │
//! │ (weights,   │     │ (bundle →    │     │ (guarded     │
//! │  sorttable) │     │  weight)     │     │  field write)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   form.rs   │     │   index.rs   │     │   build/     │
//! │ (settings   │◀────│ (datasources,│     │ (load, apply,│
//! │  table)     │     │  bundles)    │     │  write)      │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use sort_priority::{ProcessorConfig, SortPriorityProcessor, Processor};
//!
//! let config = ProcessorConfig::default().with_bundle_weight("article", 5);
//! let processor = SortPriorityProcessor::attach(config, &index)?;
//!
//! for item in &mut items {
//!     processor.add_field_values(item);
//! }
//! ```

pub mod build;
pub mod config;
pub mod form;
mod index;
pub mod logging;
mod processor;
pub mod ranking;
mod resolver;
pub mod testing;
mod types;

// Re-exports for public API
pub use config::{BundleWeight, ConfigError, ProcessorConfig, ZeroWeightPolicy};
pub use form::{FormError, FormValues, SettingsForm, SettingsRow};
pub use index::{BundleInfo, DatasourceDefinition, IndexDefinition};
pub use processor::{
    AttachError, DataType, Processor, ProcessorInfo, PropertyDefinition, SortPriorityProcessor,
    Stage, SORT_PRIORITY_INFO,
};
pub use ranking::{compare_items, sort_items, SortDirection};
pub use resolver::{resolve_weight, WeightResolver};
pub use types::{Field, FieldValue, IndexItem, BUNDLE_FIELD_ID, WEIGHT_FIELD_ID};
