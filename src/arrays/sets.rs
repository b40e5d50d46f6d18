// src/arrays/sets.rs — Intersection and difference of sequences
//
// Membership goes through `contains_by`; the plain variants use `PartialEq`,
// the JSON variants use strict value equality so `1` and `1.0` match.

use serde_json::Value;

use crate::infra::config::EqualityMode;
use crate::infra::errors::{Result, UnderbarError};
use crate::query::{contains_by, every, filter, map, uniq_by};
use crate::value::{type_name, values_equal};

/// Elements of the first sequence found in every other sequence, in
/// first-sequence order without duplicates. No sequences, no elements.
pub fn intersection<T: PartialEq + Clone>(seqs: &[&[T]]) -> Vec<T> {
    intersection_by(seqs, |a, b| a == b)
}

/// [`intersection`] with a caller-supplied equality, used both for
/// deduplication and membership.
pub fn intersection_by<T, F>(seqs: &[&[T]], mut eq: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let Some((first, rest)) = seqs.split_first() else {
        return Vec::new();
    };
    let candidates = uniq_by(first, &mut eq);
    filter(&candidates, |item, _, _| {
        every(rest, Some(|other: &&[T]| contains_by(*other, item, &mut eq))).unwrap_or(false)
    })
}

/// Elements of `seq` that appear in none of `others`, in order.
pub fn difference<T: PartialEq + Clone>(seq: &[T], others: &[&[T]]) -> Vec<T> {
    difference_by(seq, others, |a, b| a == b)
}

/// [`difference`] with a caller-supplied equality.
pub fn difference_by<T, F>(seq: &[T], others: &[&[T]], mut eq: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    filter(seq, |item, _, _| {
        every(others, Some(|other: &&[T]| !contains_by(*other, item, &mut eq))).unwrap_or(true)
    })
}

/// [`intersection`] over JSON arrays, compared with strict value equality.
pub fn intersection_value(seqs: &[&Value]) -> Result<Vec<Value>> {
    let arrays = arrays_of("intersection", seqs)?;
    Ok(intersection_by(&arrays, strict_eq))
}

/// [`difference`] over JSON arrays, compared with strict value equality.
/// Every argument must be an array.
pub fn difference_value(seq: &Value, others: &[&Value]) -> Result<Vec<Value>> {
    let seq = as_array("difference", seq)?;
    let others = arrays_of("difference", others)?;
    Ok(difference_by(seq, &others, strict_eq))
}

fn strict_eq(a: &Value, b: &Value) -> bool {
    values_equal(EqualityMode::Strict, a, b)
}

fn arrays_of<'v>(operation: &'static str, values: &[&'v Value]) -> Result<Vec<&'v [Value]>> {
    map(values, |value, _, _| as_array(operation, *value))
        .into_iter()
        .collect()
}

fn as_array<'v>(operation: &'static str, value: &'v Value) -> Result<&'v [Value]> {
    match value {
        Value::Array(items) => Ok(items.as_slice()),
        other => Err(UnderbarError::invalid_argument(
            operation,
            format!("expected an array, got {}", type_name(other)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_intersection_of_three() {
        let out = intersection(&[&[1, 2, 3][..], &[2, 3, 4][..], &[3, 4, 5][..]]);
        assert_eq!(out, vec![3]);
    }

    #[test]
    fn test_intersection_dedupes_first_sequence() {
        let out = intersection(&[&[1, 1, 2, 2][..], &[2, 1][..]]);
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn test_intersection_single_and_none() {
        assert_eq!(intersection(&[&["a", "b", "a"][..]]), vec!["a", "b"]);
        assert!(intersection::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_difference() {
        assert_eq!(difference(&[1, 2, 3, 4], &[&[2, 4][..]]), vec![1, 3]);
        assert_eq!(difference(&[1, 2, 3, 4], &[&[2][..], &[3][..]]), vec![1, 4]);
        assert_eq!(difference(&[1, 2], &[]), vec![1, 2]);
    }

    #[test]
    fn test_difference_keeps_duplicates_of_survivors() {
        assert_eq!(difference(&[1, 1, 2], &[&[2][..]]), vec![1, 1]);
    }

    #[test]
    fn test_value_variants() {
        let a = json!([1, 2, 3, 4]);
        let b = json!([2, 4]);
        assert_eq!(difference_value(&a, &[&b]).unwrap(), vec![json!(1), json!(3)]);
        assert_eq!(
            intersection_value(&[&a, &b]).unwrap(),
            vec![json!(2), json!(4)]
        );
    }

    #[test]
    fn test_value_variants_match_integers_and_floats() {
        let ints = json!([1, 2]);
        let floats = json!([1.0]);
        assert_eq!(difference_value(&ints, &[&floats]).unwrap(), vec![json!(2)]);
        assert_eq!(
            intersection_value(&[&ints, &floats]).unwrap(),
            vec![json!(1)]
        );
        // Strict, not loose: "1" is still a different value.
        assert_eq!(
            difference_value(&ints, &[&json!(["1"])]).unwrap(),
            vec![json!(1), json!(2)]
        );
    }

    #[test]
    fn test_by_variants_use_supplied_equality() {
        let names = ["Moe", "moe", "Larry"];
        let ignore_case = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
        assert_eq!(
            intersection_by(&[&names[..], &["MOE"][..]], ignore_case),
            vec!["Moe"]
        );
        assert_eq!(difference_by(&names, &[&["MOE"][..]], ignore_case), vec!["Larry"]);
    }

    #[test]
    fn test_value_variants_reject_non_arrays() {
        let a = json!([1, 2]);
        let err = difference_value(&json!("abc"), &[&a]).unwrap_err();
        assert!(err.is_argument_error());
        let err = difference_value(&a, &[&json!({"x": 1})]).unwrap_err();
        assert!(err.to_string().contains("got object"));
        assert!(intersection_value(&[&a, &Value::Null]).is_err());
    }
}
