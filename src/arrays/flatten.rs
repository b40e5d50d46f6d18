// src/arrays/flatten.rs — Recursive flattening

use serde_json::Value;

use crate::collection::each;
use crate::infra::errors::{Result, UnderbarError};
use crate::value::type_name;

/// An arbitrarily nested list.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(list: Vec<Nested<T>>) -> Self {
        Nested::List(list)
    }
}

/// All leaf items, depth-first and left to right.
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut result = Vec::new();
    flatten_into(nested, &mut result);
    result
}

fn flatten_into<T: Clone>(nested: &[Nested<T>], result: &mut Vec<T>) {
    each(nested, |node, _, _| match node {
        Nested::Item(value) => result.push(value.clone()),
        Nested::List(inner) => flatten_into(inner, result),
    });
}

/// [`flatten`] over a JSON array. Anything other than an array is rejected
/// rather than partially flattened.
pub fn flatten_value(nested: &Value) -> Result<Vec<Value>> {
    let Value::Array(items) = nested else {
        return Err(UnderbarError::invalid_argument(
            "flatten",
            format!("expected an array, got {}", type_name(nested)),
        ));
    };
    let mut result = Vec::new();
    flatten_value_into(items, &mut result);
    Ok(result)
}

fn flatten_value_into(items: &[Value], result: &mut Vec<Value>) {
    each(items, |item, _, _| match item {
        Value::Array(inner) => flatten_value_into(inner, result),
        other => result.push(other.clone()),
    });
}
