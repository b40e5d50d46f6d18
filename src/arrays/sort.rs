// src/arrays/sort.rs — Stable sort by criteria
//
// Each element is paired with its position and its criteria, the pairs are
// sorted, and the items are read back out. Ties go to the lower original
// position. Elements without criteria go to the end, in their original
// order.

use std::cmp::Ordering;

use crate::collection::{Collection, Key};
use crate::query::map;
use crate::value::{compare_values, Lookup};

struct Ranked<'a, V, C> {
    item: &'a V,
    index: usize,
    criteria: Option<C>,
}

/// Sort by the value `criteria` returns for each element. `None`, and
/// criteria that do not compare with themselves (NaN), sort last.
pub fn sort_by<'a, V, C, F>(collection: impl Into<Collection<'a, V>>, mut criteria: F) -> Vec<V>
where
    V: Clone + 'a,
    C: PartialOrd,
    F: FnMut(&'a V, Key<'a>, &Collection<'a, V>) -> Option<C>,
{
    sort_ranked(
        collection,
        |value, key, c| criteria(value, key, c).filter(|k| k.partial_cmp(k).is_some()),
        |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal),
    )
}

/// Sort by a named property. Elements lacking the property sort last;
/// present values use [`compare_values`].
pub fn sort_by_property<'a, V>(collection: impl Into<Collection<'a, V>>, name: &str) -> Vec<V>
where
    V: Lookup + Clone + 'a,
{
    sort_ranked(
        collection,
        |value, _, _| value.lookup(name),
        |a, b| compare_values(a, b),
    )
}

fn sort_ranked<'a, V, C, F, O>(
    collection: impl Into<Collection<'a, V>>,
    mut criteria: F,
    order: O,
) -> Vec<V>
where
    V: Clone + 'a,
    F: FnMut(&'a V, Key<'a>, &Collection<'a, V>) -> Option<C>,
    O: Fn(&C, &C) -> Ordering,
{
    let mut ranked: Vec<Ranked<'a, V, C>> =
        map(collection, |item, key, c| (item, criteria(item, key, c)))
            .into_iter()
            .enumerate()
            .map(|(index, (item, criteria))| Ranked {
                item,
                index,
                criteria,
            })
            .collect();

    ranked.sort_by(|a, b| {
        let by_criteria = match (&a.criteria, &b.criteria) {
            (Some(x), Some(y)) => order(x, y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_criteria.then(a.index.cmp(&b.index))
    });

    ranked.into_iter().map(|r| r.item.clone()).collect()
}
