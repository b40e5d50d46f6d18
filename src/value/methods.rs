// src/value/methods.rs — Named method dispatch for `invoke`

use serde_json::Value;
use std::cmp::Ordering;

use super::{to_display_string, to_number, type_name};
use crate::infra::errors::{Result, UnderbarError};

/// A receiver whose methods can be called by name.
pub trait Invocable {
    type Arg;
    type Output;

    fn invoke_method(&self, name: &str, args: &[Self::Arg]) -> Result<Self::Output>;
}

/// The common built-in methods of arrays, strings and objects. Methods
/// never mutate the receiver; `sort` and `reverse` return new arrays.
impl Invocable for Value {
    type Arg = Value;
    type Output = Value;

    fn invoke_method(&self, name: &str, args: &[Value]) -> Result<Value> {
        let output = match (name, self) {
            ("toString", v) => Some(Value::String(to_display_string(v))),
            ("sort", Value::Array(items)) => {
                let mut sorted = items.clone();
                sorted.sort_by(default_sort_order);
                Some(Value::Array(sorted))
            }
            ("reverse", Value::Array(items)) => {
                Some(Value::Array(items.iter().rev().cloned().collect()))
            }
            ("join", Value::Array(_)) => {
                let sep = args
                    .first()
                    .map_or_else(|| ",".to_string(), to_display_string);
                Some(Value::String(join(self, &sep)))
            }
            ("keys", Value::Array(items)) => {
                Some(Value::Array((0..items.len()).map(Value::from).collect()))
            }
            ("keys", Value::Object(map)) => {
                Some(Value::Array(map.keys().cloned().map(Value::String).collect()))
            }
            ("slice", Value::Array(items)) => {
                let (start, end) = slice_bounds(items.len(), args);
                Some(Value::Array(items[start..end].to_vec()))
            }
            ("slice", Value::String(s)) => {
                let chars: Vec<char> = s.chars().collect();
                let (start, end) = slice_bounds(chars.len(), args);
                Some(Value::String(chars[start..end].iter().collect()))
            }
            ("indexOf", Value::Array(items)) => {
                let target = args.first().unwrap_or(&Value::Null);
                let found = items.iter().position(|item| item == target);
                Some(found.map_or(Value::from(-1), Value::from))
            }
            ("indexOf", Value::String(s)) => {
                let needle = args.first().map(to_display_string).unwrap_or_default();
                let found = s
                    .find(&needle)
                    .map(|byte| s[..byte].chars().count());
                Some(found.map_or(Value::from(-1), Value::from))
            }
            ("toUpperCase", Value::String(s)) => Some(Value::String(s.to_uppercase())),
            ("toLowerCase", Value::String(s)) => Some(Value::String(s.to_lowercase())),
            ("trim", Value::String(s)) => Some(Value::String(s.trim().to_string())),
            _ => None,
        };

        output.ok_or_else(|| UnderbarError::UnknownMethod {
            method: name.to_string(),
            receiver: type_name(self).to_string(),
        })
    }
}

/// Default array sort: by string form, nulls last.
fn default_sort_order(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        _ => to_display_string(a).cmp(&to_display_string(b)),
    }
}

fn join(array: &Value, sep: &str) -> String {
    match array {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_display_string(other),
            })
            .collect::<Vec<_>>()
            .join(sep),
        other => to_display_string(other),
    }
}

/// Resolve `slice(start, end)` arguments: negatives count from the end and
/// everything clamps to `0..=len`.
fn slice_bounds(len: usize, args: &[Value]) -> (usize, usize) {
    let resolve = |arg: Option<&Value>, default: usize| -> usize {
        let Some(raw) = arg.map(to_number).filter(|n| !n.is_nan()) else {
            return default;
        };
        let n = raw.trunc() as i64;
        let len = len as i64;
        let idx = if n < 0 { (len + n).max(0) } else { n.min(len) };
        idx as usize
    };
    let start = resolve(args.first(), 0);
    let end = resolve(args.get(1), len);
    (start, end.max(start))
}
