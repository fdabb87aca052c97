//! Property tests for the path mutation engine.

use envpatch_mutate::set_path;
use proptest::prelude::*;
use serde_json::json;

/// A single segment: a short field name, optionally indexed.
fn segment_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{1,6}", proptest::option::of(0usize..4)).prop_map(|(name, idx)| match idx {
        Some(i) => format!("{}[{}]", name, i),
        None => name,
    })
}

/// A full expression of one to four segments.
fn path_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment_strategy(), 1..5).prop_map(|segments| segments.join("."))
}

proptest! {
    #[test]
    fn set_path_is_idempotent(expr in path_strategy(), value in any::<i64>()) {
        let mut once = json!({});
        set_path(&mut once, &expr, json!(value)).unwrap();
        let mut twice = once.clone();
        set_path(&mut twice, &expr, json!(value)).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn non_aliasing_paths_commute(
        a_rest in path_strategy(),
        b_rest in path_strategy(),
        a_value in any::<i64>(),
        b_value in any::<i64>(),
    ) {
        // Distinct root fields guarantee the two paths cannot alias.
        let a_expr = format!("left.{}", a_rest);
        let b_expr = format!("right.{}", b_rest);

        let mut a_first = json!({});
        set_path(&mut a_first, &a_expr, json!(a_value)).unwrap();
        set_path(&mut a_first, &b_expr, json!(b_value)).unwrap();

        let mut b_first = json!({});
        set_path(&mut b_first, &b_expr, json!(b_value)).unwrap();
        set_path(&mut b_first, &a_expr, json!(a_value)).unwrap();

        prop_assert_eq!(a_first, b_first);
    }

    #[test]
    fn indexed_write_pads_to_exactly_index_plus_one(index in 0usize..8) {
        let mut doc = json!({});
        set_path(&mut doc, &format!("nodes[{}]", index), json!("x")).unwrap();
        let arr = doc["nodes"].as_array().unwrap();
        prop_assert_eq!(arr.len(), index + 1);
        for element in &arr[..index] {
            prop_assert!(element.is_null());
        }
        prop_assert_eq!(&arr[index], &json!("x"));
    }

    #[test]
    fn malformed_expressions_never_mutate(value in any::<i64>()) {
        let original = json!({"keep": {"this": [1, 2, 3]}});
        for expr in ["", "..", "a..b", "a[x]", "a[-1]", "[0]", "a[0]b"] {
            let mut doc = original.clone();
            prop_assert!(set_path(&mut doc, expr, json!(value)).is_err());
            prop_assert_eq!(&doc, &original);
        }
    }
}
