// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Admin settings: the bundle weight table.
//!
//! The host renders this however it likes (the CLI draws a box table). What
//! lives here is the model behind it: one row per weightable bundle showing the
//! weight it currently resolves to, and a submit step that validates edited
//! values and produces the replacement configuration.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::config::{BundleWeight, ProcessorConfig};
use crate::index::IndexDefinition;
use crate::resolver::resolve_weight;

/// Range of the host's default weight selector (`-10..=10`).
pub const DEFAULT_WEIGHT_DELTA: i64 = 10;

/// One bundle in the settings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsRow {
    pub bundle: String,
    pub label: String,
    pub datasource_id: String,
    /// The weight this bundle currently resolves to.
    pub weight: i64,
    /// Whether the weight comes from the sort table rather than the default.
    pub configured: bool,
}

/// Values submitted from the settings table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub weight: i64,
    pub bundle_weights: BTreeMap<String, i64>,
}

/// The settings table for one processor on one index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub default_weight: i64,
    pub rows: Vec<SettingsRow>,
    pub delta: i64,
    base: ProcessorConfig,
}

impl SettingsForm {
    /// Build the table, rows ordered by weight then bundle key.
    pub fn build(index: &IndexDefinition, config: &ProcessorConfig) -> Self {
        let mut rows: Vec<SettingsRow> = index
            .bundles_for(&config.entity_type)
            .into_iter()
            .map(|b| SettingsRow {
                bundle: b.key.to_string(),
                label: b.label.to_string(),
                datasource_id: b.datasource_id.to_string(),
                weight: resolve_weight(Some(b.key), config),
                configured: config.bundle_weight(b.key).is_some(),
            })
            .collect();

        rows.sort_by(|a, b| a.weight.cmp(&b.weight).then_with(|| a.bundle.cmp(&b.bundle)));

        Self {
            default_weight: config.weight,
            rows,
            delta: DEFAULT_WEIGHT_DELTA,
            base: config.clone(),
        }
    }

    pub fn with_delta(mut self, delta: i64) -> Self {
        self.delta = delta.abs();
        self
    }

    /// Submitted values equal to what the table currently shows.
    pub fn current_values(&self) -> FormValues {
        FormValues {
            weight: self.default_weight,
            bundle_weights: self
                .rows
                .iter()
                .map(|r| (r.bundle.clone(), r.weight))
                .collect(),
        }
    }

    /// Validate `values` and build the configuration that replaces the old one.
    ///
    /// Bundles of the table missing from `values` are stored without a weight.
    /// The entity type and zero-weight policy carry over unchanged.
    pub fn submit(&self, values: &FormValues) -> Result<ProcessorConfig, FormError> {
        self.check_range("default", values.weight)?;

        for (bundle, &weight) in &values.bundle_weights {
            if !self.rows.iter().any(|r| &r.bundle == bundle) {
                return Err(FormError::UnknownBundle(bundle.clone()));
            }
            self.check_range(bundle, weight)?;
        }

        let sorttable = self
            .rows
            .iter()
            .map(|r| {
                let weight = values.bundle_weights.get(&r.bundle).copied();
                (r.bundle.clone(), BundleWeight { weight })
            })
            .collect();

        let config = ProcessorConfig {
            weight: values.weight,
            sorttable,
            entity_type: self.base.entity_type.clone(),
            zero_weight: self.base.zero_weight,
        };
        debug!(
            default = config.weight,
            bundles = config.sorttable.len(),
            "settings submitted"
        );
        Ok(config)
    }

    fn check_range(&self, bundle: &str, weight: i64) -> Result<(), FormError> {
        if weight < -self.delta || weight > self.delta {
            return Err(FormError::WeightOutOfRange {
                bundle: bundle.to_string(),
                weight,
                delta: self.delta,
            });
        }
        Ok(())
    }
}

/// Error type for settings validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A weight was submitted for a bundle the index does not have.
    UnknownBundle(String),
    /// A weight lies outside `-delta..=delta`.
    WeightOutOfRange {
        bundle: String,
        weight: i64,
        delta: i64,
    },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::UnknownBundle(bundle) => {
                write!(f, "unknown bundle '{}'", bundle)
            }
            FormError::WeightOutOfRange {
                bundle,
                weight,
                delta,
            } => write!(
                f,
                "weight {} for '{}' is outside -{}..={}",
                weight, bundle, delta, delta
            ),
        }
    }
}

impl std::error::Error for FormError {}
