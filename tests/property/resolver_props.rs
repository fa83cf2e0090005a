//! Weight resolution properties.
//!
//! - Configured non-zero weights always win
//! - Unknown bundles, missing bundles and "unset" weights fall back to the default
//! - Resolution is deterministic

use proptest::prelude::*;
use sort_priority::{resolve_weight, ProcessorConfig, ZeroWeightPolicy};
use std::collections::BTreeMap;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate bundle-key-like strings.
fn bundle_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_]{1,12}").unwrap()
}

/// Generate a bundle → weight table.
fn table_strategy() -> impl Strategy<Value = BTreeMap<String, i64>> {
    prop::collection::btree_map(bundle_strategy(), -50i64..=50, 0..8)
}

fn build_config(default: i64, table: &BTreeMap<String, i64>) -> ProcessorConfig {
    table
        .iter()
        .fold(ProcessorConfig::default().with_default_weight(default), |c, (b, w)| {
            c.with_bundle_weight(b, *w)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: a configured non-zero weight is returned as-is.
    #[test]
    fn prop_configured_weight_wins(default in -50i64..=50, table in table_strategy()) {
        let config = build_config(default, &table);
        for (bundle, &weight) in &table {
            if weight != 0 {
                prop_assert_eq!(resolve_weight(Some(bundle.as_str()), &config), weight);
            }
        }
    }

    /// Property: bundles absent from the table get the default.
    #[test]
    fn prop_unknown_bundle_gets_default(
        default in -50i64..=50,
        table in table_strategy(),
        bundle in bundle_strategy(),
    ) {
        prop_assume!(!table.contains_key(&bundle));
        let config = build_config(default, &table);
        prop_assert_eq!(resolve_weight(Some(bundle.as_str()), &config), default);
    }

    /// Property: no bundle, or an empty one, gets the default.
    #[test]
    fn prop_missing_bundle_gets_default(default in -50i64..=50, table in table_strategy()) {
        let config = build_config(default, &table);
        prop_assert_eq!(resolve_weight(None, &config), default);
        prop_assert_eq!(resolve_weight(Some(""), &config), default);
    }

    /// Property: under the default policy a zero weight is indistinguishable
    /// from no weight; under the explicit policy it is a real weight.
    #[test]
    fn prop_zero_weight_policies(default in -50i64..=50, bundle in bundle_strategy()) {
        let config = ProcessorConfig::default()
            .with_default_weight(default)
            .with_bundle_weight(&bundle, 0);
        prop_assert_eq!(resolve_weight(Some(bundle.as_str()), &config), default);

        let explicit = config.with_zero_weight(ZeroWeightPolicy::Explicit);
        prop_assert_eq!(resolve_weight(Some(bundle.as_str()), &explicit), 0);
    }

    /// Property: resolution survives a JSON round trip of the configuration.
    #[test]
    fn prop_resolution_stable_across_reload(
        default in -50i64..=50,
        table in table_strategy(),
        bundle in bundle_strategy(),
    ) {
        let config = build_config(default, &table);
        let reloaded = ProcessorConfig::from_json_str(&config.to_json_pretty()).unwrap();
        prop_assert_eq!(
            resolve_weight(Some(bundle.as_str()), &config),
            resolve_weight(Some(bundle.as_str()), &reloaded)
        );
    }
}
