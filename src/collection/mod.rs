// src/collection/mod.rs — Collection abstraction over sequences and mappings
//
// Every operation in the crate accepts anything convertible into a
// `Collection`. Traversal order is decided in exactly one place
// (`each::try_each`): index order for sequences, the mapping's own
// enumeration order for mappings.

pub mod each;

pub use each::{each, try_each};

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::ops::ControlFlow;

/// Position of an element inside its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

impl<'a> Key<'a> {
    pub fn index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    pub fn name(&self) -> Option<&'a str> {
        match self {
            Key::Index(_) => None,
            Key::Name(n) => Some(n),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(n) => f.write_str(n),
        }
    }
}

/// Read-only view of a string-keyed mapping.
///
/// Implementations must enumerate entries in the same order for as long as
/// the mapping is borrowed.
pub trait MappingView<V> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, key: &str) -> Option<&V>;

    /// Visit entries in enumeration order until `f` breaks.
    fn try_for_each_entry<'s>(
        &'s self,
        f: &mut dyn FnMut(&'s str, &'s V) -> ControlFlow<()>,
    ) -> ControlFlow<()>;
}

impl<V> MappingView<V> for BTreeMap<String, V> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn get(&self, key: &str) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn try_for_each_entry<'s>(
        &'s self,
        f: &mut dyn FnMut(&'s str, &'s V) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        for (k, v) in self {
            f(k.as_str(), v)?;
        }
        ControlFlow::Continue(())
    }
}

impl<V, S: BuildHasher> MappingView<V> for HashMap<String, V, S> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, key: &str) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn try_for_each_entry<'s>(
        &'s self,
        f: &mut dyn FnMut(&'s str, &'s V) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        for (k, v) in self {
            f(k.as_str(), v)?;
        }
        ControlFlow::Continue(())
    }
}

impl MappingView<Value> for Map<String, Value> {
    fn len(&self) -> usize {
        Map::len(self)
    }

    fn get(&self, key: &str) -> Option<&Value> {
        Map::get(self, key)
    }

    fn try_for_each_entry<'s>(
        &'s self,
        f: &mut dyn FnMut(&'s str, &'s Value) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        for (k, v) in self {
            f(k.as_str(), v)?;
        }
        ControlFlow::Continue(())
    }
}

/// Either shape of collection, or an absent one.
///
/// `Null` stands for a missing collection. It traverses as empty; only
/// `every` treats it as an error.
pub enum Collection<'a, V> {
    Null,
    Sequence(&'a [V]),
    Mapping(&'a dyn MappingView<V>),
}

impl<V> Clone for Collection<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Collection<'_, V> {}

impl<V> fmt::Debug for Collection<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Null => f.write_str("Null"),
            Collection::Sequence(items) => write!(f, "Sequence(len={})", items.len()),
            Collection::Mapping(map) => write!(f, "Mapping(len={})", map.len()),
        }
    }
}

impl<'a, V> Collection<'a, V> {
    pub fn is_null(&self) -> bool {
        matches!(self, Collection::Null)
    }

    pub fn len(&self) -> usize {
        match self {
            Collection::Null => 0,
            Collection::Sequence(items) => items.len(),
            Collection::Mapping(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look an element up by its key. Index keys only resolve in sequences,
    /// name keys only in mappings.
    pub fn get(&self, key: Key<'_>) -> Option<&'a V> {
        match (self, key) {
            (Collection::Sequence(items), Key::Index(i)) => items.get(i),
            (Collection::Mapping(map), Key::Name(n)) => map.get(n),
            _ => None,
        }
    }
}

impl<'a, V> From<&'a [V]> for Collection<'a, V> {
    fn from(items: &'a [V]) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a, V> From<&'a Vec<V>> for Collection<'a, V> {
    fn from(items: &'a Vec<V>) -> Self {
        Collection::Sequence(items.as_slice())
    }
}

impl<'a, V, const N: usize> From<&'a [V; N]> for Collection<'a, V> {
    fn from(items: &'a [V; N]) -> Self {
        Collection::Sequence(items.as_slice())
    }
}

impl<'a, V> From<&'a BTreeMap<String, V>> for Collection<'a, V> {
    fn from(map: &'a BTreeMap<String, V>) -> Self {
        Collection::Mapping(map)
    }
}

impl<'a, V, S: BuildHasher> From<&'a HashMap<String, V, S>> for Collection<'a, V> {
    fn from(map: &'a HashMap<String, V, S>) -> Self {
        Collection::Mapping(map)
    }
}

impl<'a> From<&'a Map<String, Value>> for Collection<'a, Value> {
    fn from(map: &'a Map<String, Value>) -> Self {
        Collection::Mapping(map)
    }
}

/// Arrays become sequences, objects mappings, `null` the null collection.
/// Scalars have no elements and traverse as an empty sequence.
impl<'a> From<&'a Value> for Collection<'a, Value> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => Collection::Null,
            Value::Array(items) => Collection::Sequence(items.as_slice()),
            Value::Object(map) => Collection::Mapping(map),
            _ => Collection::Sequence(&[]),
        }
    }
}

impl<'a, V, C> From<Option<C>> for Collection<'a, V>
where
    C: Into<Collection<'a, V>>,
{
    fn from(collection: Option<C>) -> Self {
        collection.map_or(Collection::Null, Into::into)
    }
}
