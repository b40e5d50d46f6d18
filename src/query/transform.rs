// src/query/transform.rs — Projection: map, pluck, invoke

use std::ops::ControlFlow;

use serde_json::Value;

use crate::collection::{each, try_each, Collection, Key};
use crate::infra::errors::Result;
use crate::value::{Invocable, Lookup};

/// Apply `f(value, key, collection)` to every element and collect the
/// results in order.
pub fn map<'a, V, R, F>(collection: impl Into<Collection<'a, V>>, mut f: F) -> Vec<R>
where
    V: 'a,
    F: FnMut(&'a V, Key<'a>, &Collection<'a, V>) -> R,
{
    let mut result = Vec::new();
    each(collection, |value, key, c| result.push(f(value, key, c)));
    result
}

/// Read property `name` from every element; `None` where it is missing.
pub fn pluck<'a, V>(collection: impl Into<Collection<'a, V>>, name: &str) -> Vec<Option<Value>>
where
    V: Lookup + 'a,
{
    map(collection, |value, _, _| value.lookup(name).cloned())
}

/// What `invoke` calls on each element.
pub enum Method<'m, V: Invocable> {
    /// The element's own method of this name.
    Named(&'m str),
    /// A function called with the element as receiver.
    Function(&'m dyn Fn(&V, &[V::Arg]) -> V::Output),
}

/// Call `method` on every element with `args`, collecting results in order.
/// Stops at the first element that does not implement a named method.
pub fn invoke<'a, V>(
    list: impl Into<Collection<'a, V>>,
    method: Method<'_, V>,
    args: &[V::Arg],
) -> Result<Vec<V::Output>>
where
    V: Invocable + 'a,
{
    let mut results = Vec::new();
    let failure = try_each(list, |value, _, _| {
        let outcome = match &method {
            Method::Named(name) => value.invoke_method(name, args),
            Method::Function(f) => Ok(f(value, args)),
        };
        match outcome {
            Ok(r) => {
                results.push(r);
                ControlFlow::Continue(())
            }
            Err(e) => ControlFlow::Break(e),
        }
    });
    match failure {
        Some(e) => Err(e),
        None => Ok(results),
    }
}

/// [`invoke`] for receivers without named methods: call `f(element, args)`.
pub fn invoke_with<'a, V, A, R, F>(
    list: impl Into<Collection<'a, V>>,
    f: F,
    args: &[A],
) -> Vec<R>
where
    V: 'a,
    F: Fn(&V, &[A]) -> R,
{
    map(list, |value, _, _| f(value, args))
}
