// src/query/filter.rs — Selection: filter, reject, uniq

use serde_json::Value;

use super::access::index_of_by;
use crate::collection::{each, Collection, Key};
use crate::infra::config::EqualityMode;
use crate::value::values_equal;

/// Values for which `predicate` holds, in collection order. A null
/// collection yields an empty result.
pub fn filter<'a, V, F>(collection: impl Into<Collection<'a, V>>, mut predicate: F) -> Vec<V>
where
    V: Clone + 'a,
    F: FnMut(&'a V, Key<'a>, &Collection<'a, V>) -> bool,
{
    let mut result = Vec::new();
    each(collection, |value, key, c| {
        if predicate(value, key, c) {
            result.push(value.clone());
        }
    });
    result
}

/// Values for which `predicate` does not hold: [`filter`] with the
/// predicate negated.
pub fn reject<'a, V, F>(collection: impl Into<Collection<'a, V>>, mut predicate: F) -> Vec<V>
where
    V: Clone + 'a,
    F: FnMut(&'a V, Key<'a>, &Collection<'a, V>) -> bool,
{
    filter(collection, |value, key, c| !predicate(value, key, c))
}

/// Duplicate-free copy keeping first occurrences, in order.
pub fn uniq<T: PartialEq + Clone>(seq: &[T]) -> Vec<T> {
    uniq_by(seq, |a, b| a == b)
}

/// [`uniq`] with a caller-supplied equality. Quadratic in the worst case so
/// that any equality relation works, not only hashable ones.
pub fn uniq_by<T, F>(seq: &[T], mut eq: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut result: Vec<T> = Vec::new();
    each(seq, |value, _, _| {
        if index_of_by(&result, value, &mut eq).is_none() {
            result.push(value.clone());
        }
    });
    result
}

/// [`uniq`] over dynamic values with a selectable equality mode.
pub fn uniq_value(seq: &[Value], mode: EqualityMode) -> Vec<Value> {
    uniq_by(seq, |a, b| values_equal(mode, a, b))
}
