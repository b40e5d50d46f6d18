// tests/collections_test.rs — Integration test: iteration, queries and merges

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{json, Value};

use underbar::collection::{each, Collection, Key};
use underbar::infra::config::{Config, EqualityMode};
use underbar::object::{defaults, extend, extend_value};
use underbar::query::{
    contains, every, filter, first, first_n, index_of, index_of_value, invoke, last_n, map, pluck,
    reduce, reduce_default, reject, some, uniq, uniq_value, Method,
};
use underbar::UnderbarError;

fn stooges() -> Vec<Value> {
    vec![
        json!({"name": "moe", "age": 40}),
        json!({"name": "larry", "age": 50}),
        json!({"name": "curly", "age": 60}),
    ]
}

#[test]
fn test_each_visits_sequence_and_mapping() {
    let seq = vec!["a", "b"];
    let mut seen = Vec::new();
    each(&seq, |value, key, collection| {
        seen.push(format!("{key}={value}/{}", collection.len()));
    });
    assert_eq!(seen, vec!["0=a/2", "1=b/2"]);

    let mut m = BTreeMap::new();
    m.insert("x".to_string(), 1);
    m.insert("y".to_string(), 2);
    let mut keys = Vec::new();
    each(&m, |_, key: Key<'_>, _| keys.push(key.name().unwrap_or_default().to_string()));
    assert_eq!(keys, vec!["x", "y"]);
}

#[test]
fn test_null_collection_is_empty_for_most_operations() {
    let null: Collection<'_, i32> = Collection::Null;
    assert!(map(null, |v: &i32, _, _| *v).is_empty());
    assert!(filter(null, |_: &i32, _, _| true).is_empty());
    assert_eq!(reduce(null, |a: i32, v| a + v, 0), None);
    assert!(!contains(null, &1));
    assert!(!some(null, |_: &i32| true));
    assert!(matches!(
        every(null, None::<fn(&i32) -> bool>),
        Err(UnderbarError::NullCollection { .. })
    ));
}

#[test]
fn test_every_on_empty_is_true() {
    let empty: Vec<i32> = Vec::new();
    assert!(every(&empty, Some(|_: &i32| false)).unwrap());
}

#[test]
fn test_reduce_sum_and_default_seed() {
    assert_eq!(reduce(&vec![1, 2, 3], |acc: i32, n: &i32| acc + n, 0), Some(6));
    let empty: Vec<i32> = Vec::new();
    assert_eq!(reduce_default(&empty, |acc: i32, n: &i32| acc + n), Some(0));
}

#[test]
fn test_first_last_and_index_of() {
    let v = vec![1, 2, 3, 4];
    assert_eq!(first(&v), Some(&1));
    assert_eq!(first_n(&v, 2), &[1, 2]);
    assert_eq!(last_n(&v, 10), &[1, 2, 3, 4]);
    assert_eq!(index_of(&v, &3), Some(2));
    assert_eq!(index_of(&v, &9), None);

    let values = vec![json!(1), json!("2"), json!(3)];
    assert_eq!(index_of_value(&values, &json!(2), EqualityMode::Strict), None);
    assert_eq!(index_of_value(&values, &json!(2), EqualityMode::Loose), Some(1));
}

#[test]
fn test_pluck_and_invoke() {
    let people = stooges();
    assert_eq!(
        pluck(&people, "name"),
        vec![Some(json!("moe")), Some(json!("larry")), Some(json!("curly"))]
    );
    assert_eq!(pluck(&people, "height"), vec![None, None, None]);

    let lists = vec![json!([5, 1, 7]), json!([3, 2, 1])];
    let sorted = invoke(&lists, Method::Named("sort"), &[]).unwrap();
    assert_eq!(sorted, vec![json!([1, 5, 7]), json!([1, 2, 3])]);

    let err = invoke(&lists, Method::Named("frobnicate"), &[]).unwrap_err();
    assert!(matches!(err, UnderbarError::UnknownMethod { .. }));
}

#[test]
fn test_uniq_with_equality_modes() {
    assert_eq!(uniq(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
    let values = vec![json!(1), json!("1"), json!(1.0), json!(true)];
    assert_eq!(uniq_value(&values, EqualityMode::Strict), vec![json!(1), json!("1"), json!(true)]);
    assert_eq!(uniq_value(&values, EqualityMode::Loose), vec![json!(1)]);
}

#[test]
fn test_equality_mode_from_config() {
    let config = Config::from_toml_str("[equality]\nmode = \"loose\"\n").unwrap();
    let values = vec![json!("3")];
    assert_eq!(
        index_of_value(&values, &json!(3), config.equality.mode),
        Some(0)
    );
}

#[test]
fn test_extend_and_defaults() {
    let mut target: BTreeMap<String, i32> = BTreeMap::from([("a".into(), 1)]);
    let s1 = BTreeMap::from([("a".to_string(), 10), ("b".to_string(), 2)]);
    let s2 = BTreeMap::from([("b".to_string(), 20), ("c".to_string(), 3)]);

    extend(&mut target, &[&s1, &s2]);
    assert_eq!(
        target,
        BTreeMap::from([("a".into(), 10), ("b".into(), 20), ("c".into(), 3)])
    );

    let mut fresh: BTreeMap<String, i32> = BTreeMap::from([("a".into(), 1)]);
    defaults(&mut fresh, &[&s1, &s2]);
    assert_eq!(
        fresh,
        BTreeMap::from([("a".into(), 1), ("b".into(), 2), ("c".into(), 3)])
    );
}

#[test]
fn test_extend_value_rejects_non_objects() {
    let mut target = json!({"a": 1});
    let err = extend_value(&mut target, &[&json!([1, 2])]).unwrap_err();
    assert!(err.is_argument_error());
    extend_value(&mut target, &[&json!({"b": 2}), &Value::Null]).unwrap();
    assert_eq!(target, json!({"a": 1, "b": 2}));
}

// ─── Properties ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn map_identity_is_a_copy(v in proptest::collection::vec(any::<i32>(), 0..64)) {
        let copy = map(&v, |n: &i32, _, _| *n);
        prop_assert_eq!(copy, v);
    }

    #[test]
    fn filter_and_reject_partition(v in proptest::collection::vec(-100i32..100, 0..64)) {
        let kept = filter(&v, |n: &i32, _, _| n % 3 == 0);
        let dropped = reject(&v, |n: &i32, _, _| n % 3 == 0);
        prop_assert_eq!(kept.len() + dropped.len(), v.len());

        let mut merged = kept.clone();
        merged.extend(dropped);
        merged.sort_unstable();
        let mut expected = v.clone();
        expected.sort_unstable();
        prop_assert_eq!(merged, expected);
    }

    #[test]
    fn uniq_is_idempotent(v in proptest::collection::vec(0u8..10, 0..64)) {
        let once = uniq(&v);
        prop_assert_eq!(uniq(&once), once.clone());
        for item in &v {
            prop_assert!(contains(&once, item));
        }
    }
}
