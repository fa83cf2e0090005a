// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Processor configuration.
//!
//! The stored shape is what the admin settings form saves:
//!
//! ```json
//! {
//!   "weight": 0,
//!   "sorttable": {
//!     "article": { "weight": 5 },
//!     "page": { "weight": -3 }
//!   }
//! }
//! ```
//!
//! `weight` is the fallback. `sorttable` maps bundle keys to their configured
//! weight. A configuration is replaced wholesale on every save and never
//! mutated while items are being processed.
//!
//! # Zero weights
//!
//! Configurations saved by older settings forms cannot tell "weight 0" from
//! "not configured": a 0 falls through to the default. `ZeroWeightPolicy::Unset`
//! keeps that behavior and is the default. `ZeroWeightPolicy::Explicit` honors a
//! stored 0. Either way a missing or `null` weight means "not configured".

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Entity type whose bundles are weighted unless configured otherwise.
pub const DEFAULT_ENTITY_TYPE: &str = "node";

/// How a configured weight of exactly zero is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroWeightPolicy {
    /// Zero means "not configured" and falls back to the default weight.
    #[default]
    Unset,
    /// Zero is a real weight.
    Explicit,
}

/// One row of the sort table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleWeight {
    #[serde(default)]
    pub weight: Option<i64>,
}

impl BundleWeight {
    pub fn new(weight: i64) -> Self {
        Self {
            weight: Some(weight),
        }
    }
}

/// Settings of the sort priority processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Fallback weight for unconfigured bundles.
    #[serde(default)]
    pub weight: i64,
    /// Bundle key → configured weight.
    #[serde(default)]
    pub sorttable: BTreeMap<String, BundleWeight>,
    /// Entity type the processor attaches to.
    #[serde(default = "default_entity_type")]
    pub entity_type: String,
    #[serde(default)]
    pub zero_weight: ZeroWeightPolicy,
}

fn default_entity_type() -> String {
    DEFAULT_ENTITY_TYPE.to_string()
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            weight: 0,
            sorttable: BTreeMap::new(),
            entity_type: default_entity_type(),
            zero_weight: ZeroWeightPolicy::default(),
        }
    }
}

impl ProcessorConfig {
    pub fn with_default_weight(mut self, weight: i64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_bundle_weight(mut self, bundle: &str, weight: i64) -> Self {
        self.sorttable
            .insert(bundle.to_string(), BundleWeight::new(weight));
        self
    }

    pub fn with_zero_weight(mut self, policy: ZeroWeightPolicy) -> Self {
        self.zero_weight = policy;
        self
    }

    /// The weight configured for `bundle`, honoring the zero-weight policy.
    ///
    /// `None` means the bundle should fall back to the default.
    pub fn bundle_weight(&self, bundle: &str) -> Option<i64> {
        let weight = self.sorttable.get(bundle)?.weight?;
        match self.zero_weight {
            ZeroWeightPolicy::Unset if weight == 0 => None,
            _ => Some(weight),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ProcessorConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }

    pub fn to_json_pretty(&self) -> String {
        // Plain structs with string keys always serialize.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entity_type.trim().is_empty() {
            return Err(ConfigError::EmptyEntityType);
        }
        if let Some(key) = self.sorttable.keys().find(|k| k.is_empty()) {
            return Err(ConfigError::InvalidBundleKey(key.clone()));
        }
        Ok(())
    }
}

/// Error type for loading a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io { path: String, message: String },
    /// The configuration is not valid JSON of the expected shape.
    Parse(String),
    /// `entity_type` is blank.
    EmptyEntityType,
    /// A sort table key is not a usable bundle key.
    InvalidBundleKey(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "failed to read config {}: {}", path, message)
            }
            ConfigError::Parse(message) => write!(f, "invalid config JSON: {}", message),
            ConfigError::EmptyEntityType => write!(f, "entity_type must not be empty"),
            ConfigError::InvalidBundleKey(key) => {
                write!(f, "invalid bundle key '{}' in sorttable", key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
