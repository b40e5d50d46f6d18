// src/query/access.rs — Positional access: first, last, index_of

use std::ops::ControlFlow;

use serde_json::Value;

use crate::collection::try_each;
use crate::infra::config::EqualityMode;
use crate::value::values_equal;

/// The first element, if any.
pub fn first<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

/// The first `n` elements. Empty when `n < 1`; clamped to the length.
pub fn first_n<T>(seq: &[T], n: i64) -> &[T] {
    if n < 1 {
        return &[];
    }
    let take = usize::try_from(n).unwrap_or(usize::MAX).min(seq.len());
    &seq[..take]
}

/// The last element, if any.
pub fn last<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

/// The last `n` elements. Empty when `n < 1`; clamped to the length.
pub fn last_n<T>(seq: &[T], n: i64) -> &[T] {
    if n < 1 {
        return &[];
    }
    let take = usize::try_from(n).unwrap_or(usize::MAX).min(seq.len());
    &seq[seq.len() - take..]
}

/// Index of the first element equal to `target`.
pub fn index_of<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    index_of_by(seq, target, |a, b| a == b)
}

/// Index of the first element that `eq` reports equal to `target`. The scan
/// stops at the first match.
pub fn index_of_by<T, F>(seq: &[T], target: &T, mut eq: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    try_each(seq, |value, key, _| {
        if eq(value, target) {
            ControlFlow::Break(key.index())
        } else {
            ControlFlow::Continue(())
        }
    })
    .flatten()
}

/// [`index_of`] over dynamic values with a selectable equality mode.
pub fn index_of_value(seq: &[Value], target: &Value, mode: EqualityMode) -> Option<usize> {
    index_of_by(seq, target, |a, b| values_equal(mode, a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_and_last() {
        let v = [1, 2, 3];
        assert_eq!(first(&v), Some(&1));
        assert_eq!(last(&v), Some(&3));
        assert_eq!(first::<i32>(&[]), None);
        assert_eq!(last::<i32>(&[]), None);
    }

    #[test]
    fn test_first_n_bounds() {
        let v = [1, 2, 3];
        assert_eq!(first_n(&v, 0), &[] as &[i32]);
        assert_eq!(first_n(&v, -4), &[] as &[i32]);
        assert_eq!(first_n(&v, 2), &[1, 2]);
        assert_eq!(first_n(&v, 5), &[1, 2, 3]);
    }

    #[test]
    fn test_last_n_bounds() {
        let v = [1, 2, 3];
        assert_eq!(last_n(&v, 0), &[] as &[i32]);
        assert_eq!(last_n(&v, 2), &[2, 3]);
        assert_eq!(last_n(&v, 5), &[1, 2, 3]);
    }

    #[test]
    fn test_index_of() {
        let v = [10, 20, 30, 20];
        assert_eq!(index_of(&v, &20), Some(1));
        assert_eq!(index_of(&v, &10), Some(0));
        assert_eq!(index_of(&v, &99), None);
        assert_eq!(index_of::<i32>(&[], &1), None);
    }

    #[test]
    fn test_index_of_by_custom_equality() {
        let words = ["Apple", "banana"];
        let found = index_of_by(&words, &"BANANA", |a, b| a.eq_ignore_ascii_case(b));
        assert_eq!(found, Some(1));
    }

    #[test]
    fn test_index_of_value_modes() {
        let v = vec![json!(1), json!("2"), json!(3)];
        assert_eq!(index_of_value(&v, &json!(2), EqualityMode::Strict), None);
        assert_eq!(index_of_value(&v, &json!(2), EqualityMode::Loose), Some(1));
        assert_eq!(index_of_value(&v, &json!("1"), EqualityMode::Loose), Some(0));
    }
}
