// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weight resolution: bundle key → sort weight.
//!
//! The whole rule fits in one sentence: use the bundle's configured weight if
//! there is one, otherwise the default. Resolution never fails. An item with
//! no bundle, an unknown bundle, or an "unset" bundle weight gets the default.

use tracing::trace;

use crate::config::ProcessorConfig;

/// Resolves weights against a borrowed configuration.
///
/// Holds no state of its own, so one resolver can be shared across threads
/// for a whole indexing pass.
#[derive(Debug, Clone, Copy)]
pub struct WeightResolver<'a> {
    config: &'a ProcessorConfig,
}

impl<'a> WeightResolver<'a> {
    pub fn new(config: &'a ProcessorConfig) -> Self {
        Self { config }
    }

    /// Weight for an item with bundle `bundle`.
    pub fn resolve(&self, bundle: Option<&str>) -> i64 {
        resolve_weight(bundle, self.config)
    }

    pub fn config(&self) -> &'a ProcessorConfig {
        self.config
    }
}

/// Weight for `bundle` under `config`.
pub fn resolve_weight(bundle: Option<&str>, config: &ProcessorConfig) -> i64 {
    let configured = bundle
        .filter(|b| !b.is_empty())
        .and_then(|b| config.bundle_weight(b));

    let weight = configured.unwrap_or(config.weight);
    trace!(?bundle, weight, configured = configured.is_some(), "resolved weight");
    weight
}
