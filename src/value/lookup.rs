// src/value/lookup.rs — Property access by name

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Anything a property can be read from by name.
pub trait Lookup {
    fn lookup(&self, name: &str) -> Option<&Value>;
}

/// Objects resolve keys; arrays resolve decimal indices ("0", "1", ...).
impl Lookup for Value {
    fn lookup(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(name),
            Value::Array(items) => name.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }
}

impl Lookup for Map<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Lookup for BTreeMap<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<S: BuildHasher> Lookup for HashMap<String, Value, S> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}
