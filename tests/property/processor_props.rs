//! Field population properties.
//!
//! - Population writes exactly the resolved weight, once
//! - A second pass never changes anything
//! - Items missing either field are never touched

use proptest::prelude::*;
use sort_priority::build::Document;
use sort_priority::testing::{make_item, make_item_without_weight_field, make_weighted_item, node_index};
use sort_priority::{
    resolve_weight, IndexItem, Processor, ProcessorConfig, SortPriorityProcessor, BUNDLE_FIELD_ID,
    WEIGHT_FIELD_ID,
};

fn bundle_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "article".to_string(),
        "page".to_string(),
        "event".to_string(),
        "landing".to_string(),
    ])
}

fn processor_strategy() -> impl Strategy<Value = SortPriorityProcessor> {
    (-10i64..=10, -10i64..=10, -10i64..=10).prop_map(|(default, article, page)| {
        let config = ProcessorConfig::default()
            .with_default_weight(default)
            .with_bundle_weight("article", article)
            .with_bundle_weight("page", page);
        SortPriorityProcessor::attach(config, &node_index()).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: one pass writes exactly one value equal to the resolved weight.
    #[test]
    fn prop_population_writes_resolved_weight(
        processor in processor_strategy(),
        bundle in bundle_strategy(),
    ) {
        let mut item = make_item(0, &bundle);
        processor.add_field_values(&mut item);

        let expected = resolve_weight(Some(bundle.as_str()), processor.configuration());
        prop_assert_eq!(item.field(WEIGHT_FIELD_ID).unwrap().values().len(), 1);
        prop_assert_eq!(item.weight(), Some(expected));
    }

    /// Property: populating twice equals populating once.
    #[test]
    fn prop_population_idempotent(
        processor in processor_strategy(),
        bundle in bundle_strategy(),
    ) {
        let mut once = make_item(0, &bundle);
        processor.add_field_values(&mut once);

        let mut twice = once.clone();
        processor.add_field_values(&mut twice);

        prop_assert_eq!(once, twice);
    }

    /// Property: an existing weight is never overwritten.
    #[test]
    fn prop_existing_weight_kept(
        processor in processor_strategy(),
        bundle in bundle_strategy(),
        existing in -100i64..=100,
    ) {
        let mut item = make_weighted_item(0, &bundle, existing);
        processor.add_field_values(&mut item);
        prop_assert_eq!(item.weight(), Some(existing));
        prop_assert_eq!(item.field(WEIGHT_FIELD_ID).unwrap().values().len(), 1);
    }

    /// Property: items missing either field are left untouched.
    #[test]
    fn prop_missing_fields_untouched(
        processor in processor_strategy(),
        bundle in bundle_strategy(),
    ) {
        let mut no_target = make_item_without_weight_field(0, &bundle);
        let before = no_target.clone();
        processor.add_field_values(&mut no_target);
        prop_assert_eq!(no_target, before);

        let mut no_bundle: Document = make_item(1, &bundle);
        no_bundle.fields.remove(BUNDLE_FIELD_ID);
        let before = no_bundle.clone();
        processor.add_field_values(&mut no_bundle);
        prop_assert_eq!(no_bundle, before);
    }
}
