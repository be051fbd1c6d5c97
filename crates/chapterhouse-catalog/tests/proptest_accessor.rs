//! Property tests for the knight catalog accessor and kingdom aggregation.
//!
//! Knight documents are generated as arrays of records whose `id` is drawn
//! from a mix of real identifiers and every falsy spelling an author might
//! leave behind.

use chapterhouse_catalog::prelude::*;
use proptest::prelude::*;
use serde_json::{json, Value};

fn id_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(Value::from),
        Just(json!(null)),
        Just(json!("")),
        Just(json!(0)),
        Just(json!(false)),
    ]
}

fn record() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => id_value().prop_map(|id| json!({ "id": id })),
        1 => Just(json!({ "name": "no id" })),
    ]
}

fn non_array() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!(null)),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
        "[a-z]{1,8}".prop_map(|id| json!({ "id": id })),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1_000))]

    #[test]
    fn ids_are_the_nonempty_string_ids_in_order(records in prop::collection::vec(record(), 0..32)) {
        let expected: Vec<String> = records
            .iter()
            .filter_map(|r| r.get("id").and_then(Value::as_str))
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
            .collect();

        let view = derive_view(&Value::Array(records.clone()));

        prop_assert_eq!(view.list.len(), records.len());
        let ids: Vec<String> = view.ids.iter().map(|id| id.as_str().to_owned()).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn non_array_sources_give_empty_views(source in non_array()) {
        let view = derive_view(&source);
        prop_assert!(view.ids.is_empty());
        prop_assert!(view.list.is_empty());
    }

    #[test]
    fn memoized_view_equals_direct_derivation(
        first in prop::collection::vec(record(), 0..16),
        second in prop::collection::vec(record(), 0..16),
    ) {
        let mut accessor = KnightCatalogAccessor::new();
        let a = KnightSource::new(Value::Array(first.clone()));
        let b = KnightSource::new(Value::Array(second.clone()));

        let view_a = accessor.view(&a);
        let view_b = accessor.view(&b);
        let view_b_again = accessor.view(&b);

        prop_assert_eq!(&*view_a, &derive_view(a.value()));
        prop_assert_eq!(&*view_b, &derive_view(b.value()));
        prop_assert!(std::sync::Arc::ptr_eq(&view_b, &view_b_again));

        let expected = if first == second { 1 } else { 2 };
        prop_assert_eq!(accessor.recomputes(), expected);
    }

    #[test]
    fn aggregation_is_plain_concatenation(ids in prop::collection::vec("[a-z]{1,6}", 0..16)) {
        let kingdoms = aggregate_kingdoms(ids.iter().map(|id| KingdomCatalog::new(id.as_str(), id.to_uppercase())));
        let out: Vec<&str> = kingdoms.iter().map(|k| k.id.as_str()).collect();
        let expected: Vec<&str> = ids.iter().map(String::as_str).collect();
        prop_assert_eq!(out, expected);
    }
}
