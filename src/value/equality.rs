// src/value/equality.rs — Strict and loose equality for dynamic values

use serde_json::Value;

use super::{to_display_string, to_number};
use crate::infra::config::EqualityMode;

/// Compare two values under the given mode.
pub fn values_equal(mode: EqualityMode, a: &Value, b: &Value) -> bool {
    match mode {
        EqualityMode::Strict => strict_eq(a, b),
        EqualityMode::Loose => loose_eq(a, b),
    }
}

/// Structural equality, except that numbers compare by numeric value
/// (`1` equals `1.0`).
fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

/// Host-style `==`.
///
/// Same-type operands compare strictly. `null` only equals `null`. A
/// boolean operand is converted to a number and compared again. Numbers
/// and strings compare numerically. Arrays and objects against a primitive
/// are first converted to their string form.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(_), Value::Number(_)) => to_number(a) == to_number(b),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => a == b,
        (Value::Bool(_), _) => loose_eq(&number_value(to_number(a)), b),
        (_, Value::Bool(_)) => loose_eq(a, &number_value(to_number(b))),
        (Value::Number(_), Value::String(_)) | (Value::String(_), Value::Number(_)) => {
            to_number(a) == to_number(b)
        }
        (Value::Array(_) | Value::Object(_), _) => {
            loose_eq(&Value::String(to_display_string(a)), b)
        }
        (_, Value::Array(_) | Value::Object(_)) => {
            loose_eq(a, &Value::String(to_display_string(b)))
        }
    }
}

fn number_value(f: f64) -> Value {
    serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number)
}
