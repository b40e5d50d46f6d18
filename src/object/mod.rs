// src/object/mod.rs — Shallow merges: extend and defaults
//
// These are the only operations in the crate that mutate an argument: both
// write into `target` and hand it back.

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::ops::ControlFlow;

use crate::collection::{each, try_each, Collection, Key};
use crate::infra::errors::{Result, UnderbarError};
use crate::value::type_name;

/// A string-keyed mapping that can be merged into.
pub trait Assign {
    type Value: Clone;

    fn contains_key(&self, key: &str) -> bool;

    fn assign(&mut self, key: &str, value: Self::Value);

    /// The entries to copy when this mapping is a merge source.
    fn entries(&self) -> Collection<'_, Self::Value>;
}

impl<V: Clone> Assign for BTreeMap<String, V> {
    type Value = V;

    fn contains_key(&self, key: &str) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn assign(&mut self, key: &str, value: V) {
        self.insert(key.to_string(), value);
    }

    fn entries(&self) -> Collection<'_, V> {
        Collection::from(self)
    }
}

impl<V: Clone, S: BuildHasher> Assign for HashMap<String, V, S> {
    type Value = V;

    fn contains_key(&self, key: &str) -> bool {
        HashMap::contains_key(self, key)
    }

    fn assign(&mut self, key: &str, value: V) {
        self.insert(key.to_string(), value);
    }

    fn entries(&self) -> Collection<'_, V> {
        Collection::from(self)
    }
}

impl Assign for Map<String, Value> {
    type Value = Value;

    fn contains_key(&self, key: &str) -> bool {
        Map::contains_key(self, key)
    }

    fn assign(&mut self, key: &str, value: Value) {
        self.insert(key.to_string(), value);
    }

    fn entries(&self) -> Collection<'_, Value> {
        Collection::from(self)
    }
}

/// Copy every key of each source into `target`, left to right. Later
/// sources overwrite earlier ones and any key already in `target`.
pub fn extend<'t, M: Assign>(target: &'t mut M, sources: &[&M]) -> &'t mut M {
    merge(target, sources, true);
    target
}

/// Copy keys from the sources only where `target` does not have them yet.
/// Presence is checked at assignment time, so the first source to supply a
/// key wins.
pub fn defaults<'t, M: Assign>(target: &'t mut M, sources: &[&M]) -> &'t mut M {
    merge(target, sources, false);
    target
}

fn merge<M: Assign>(target: &mut M, sources: &[&M], overwrite: bool) {
    each(sources, |source, _, _| {
        each(source.entries(), |value, key, _| {
            if let Key::Name(name) = key {
                if overwrite || !target.contains_key(name) {
                    target.assign(name, value.clone());
                }
            }
        });
    });
}

/// [`extend`] for JSON objects. `null` sources are skipped; any other
/// non-object argument is rejected.
pub fn extend_value<'t>(target: &'t mut Value, sources: &[&Value]) -> Result<&'t mut Value> {
    merge_value("extend", target, sources, true)?;
    Ok(target)
}

/// [`defaults`] for JSON objects, with the same argument rules as
/// [`extend_value`].
pub fn defaults_value<'t>(target: &'t mut Value, sources: &[&Value]) -> Result<&'t mut Value> {
    merge_value("defaults", target, sources, false)?;
    Ok(target)
}

fn merge_value(
    operation: &'static str,
    target: &mut Value,
    sources: &[&Value],
    overwrite: bool,
) -> Result<()> {
    let target_type = type_name(target);
    let Some(map) = target.as_object_mut() else {
        return Err(UnderbarError::invalid_argument(
            operation,
            format!("target must be an object, got {target_type}"),
        ));
    };

    let mut objects: Vec<&Map<String, Value>> = Vec::with_capacity(sources.len());
    let rejected = try_each(sources, |source, _, _| match source {
        Value::Null => ControlFlow::Continue(()),
        Value::Object(obj) => {
            objects.push(obj);
            ControlFlow::Continue(())
        }
        other => ControlFlow::Break(type_name(other)),
    });
    if let Some(kind) = rejected {
        return Err(UnderbarError::invalid_argument(
            operation,
            format!("sources must be objects, got {kind}"),
        ));
    }

    merge(map, &objects, overwrite);
    Ok(())
}
