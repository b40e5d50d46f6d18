// src/query/fold.rs — Aggregation: reduce, contains, every, some
//
// `every` and `some` are folds and visit every element even after the
// answer is known, so side-effecting predicates observe the whole
// collection. The `_short_circuit` variants stop at the first decisive
// element instead.

use std::ops::ControlFlow;

use crate::collection::{each, try_each, Collection};
use crate::infra::errors::{Result, UnderbarError};
use crate::value::Truthy;

/// Left fold: `acc = f(acc, value)` for every element, starting from
/// `initial`. Returns `None` for a null collection.
pub fn reduce<'a, V, A, F>(collection: impl Into<Collection<'a, V>>, mut f: F, initial: A) -> Option<A>
where
    V: 'a,
    F: FnMut(A, &'a V) -> A,
{
    let collection = collection.into();
    if collection.is_null() {
        return None;
    }
    let mut acc = Some(initial);
    each(collection, |value, _, _| {
        if let Some(prev) = acc.take() {
            acc = Some(f(prev, value));
        }
    });
    acc
}

/// [`reduce`] without an explicit seed: the fold starts from
/// `A::default()`, which is zero for numbers and empty for strings and
/// containers.
pub fn reduce_default<'a, V, A, F>(collection: impl Into<Collection<'a, V>>, f: F) -> Option<A>
where
    V: 'a,
    A: Default,
    F: FnMut(A, &'a V) -> A,
{
    reduce(collection, f, A::default())
}

/// Whether any element equals `target`. A null collection contains nothing.
pub fn contains<'a, V>(collection: impl Into<Collection<'a, V>>, target: &V) -> bool
where
    V: PartialEq + 'a,
{
    contains_by(collection, target, |a, b| a == b)
}

/// [`contains`] with a caller-supplied equality, called as `eq(item, target)`.
pub fn contains_by<'a, V, F>(collection: impl Into<Collection<'a, V>>, target: &V, mut eq: F) -> bool
where
    V: 'a,
    F: FnMut(&V, &V) -> bool,
{
    reduce(
        collection,
        |was_found, item| was_found || eq(item, target),
        false,
    )
    .unwrap_or(false)
}

/// Whether `predicate` holds for every element.
///
/// A null collection is an error. With no predicate the answer is `true`
/// without looking at the elements. The predicate runs on every element.
pub fn every<'a, V, F>(collection: impl Into<Collection<'a, V>>, predicate: Option<F>) -> Result<bool>
where
    V: 'a,
    F: FnMut(&'a V) -> bool,
{
    let collection = collection.into();
    if collection.is_null() {
        return Err(UnderbarError::NullCollection { operation: "every" });
    }
    let Some(mut predicate) = predicate else {
        return Ok(true);
    };
    let all = reduce(
        collection,
        |check, value| {
            let passed = predicate(value);
            check && passed
        },
        true,
    );
    Ok(all.unwrap_or(true))
}

/// Whether `predicate` holds for at least one element. A null collection
/// yields `false`.
///
/// Computed as "not every element fails", so the predicate runs on every
/// element.
pub fn some<'a, V, F>(collection: impl Into<Collection<'a, V>>, mut predicate: F) -> bool
where
    V: 'a,
    F: FnMut(&'a V) -> bool,
{
    let collection = collection.into();
    if collection.is_null() {
        return false;
    }
    every(collection, Some(|value: &'a V| !predicate(value))).map_or(false, |all| !all)
}

/// [`some`] without a predicate: whether any element is truthy.
pub fn some_truthy<'a, V>(collection: impl Into<Collection<'a, V>>) -> bool
where
    V: Truthy + 'a,
{
    some(collection, |value: &'a V| value.is_truthy())
}

/// [`every`] that stops at the first failing element.
pub fn every_short_circuit<'a, V, F>(
    collection: impl Into<Collection<'a, V>>,
    mut predicate: F,
) -> Result<bool>
where
    V: 'a,
    F: FnMut(&'a V) -> bool,
{
    let collection = collection.into();
    if collection.is_null() {
        return Err(UnderbarError::NullCollection {
            operation: "every_short_circuit",
        });
    }
    let failed = try_each(collection, |value, _, _| {
        if predicate(value) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    });
    Ok(failed.is_none())
}

/// [`some`] that stops at the first passing element.
pub fn some_short_circuit<'a, V, F>(collection: impl Into<Collection<'a, V>>, mut predicate: F) -> bool
where
    V: 'a,
    F: FnMut(&'a V) -> bool,
{
    try_each(collection, |value, _, _| {
        if predicate(value) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .is_some()
}
