// src/collection/each.rs — The traversal primitive
//
// All other operations traverse through these two functions.

use std::ops::ControlFlow;

use super::{Collection, Key};

/// Call `iterator(value, key, collection)` for every element, in index
/// order for sequences and enumeration order for mappings. A null
/// collection is a no-op.
pub fn each<'a, V, F>(collection: impl Into<Collection<'a, V>>, mut iterator: F)
where
    V: 'a,
    F: FnMut(&'a V, Key<'a>, &Collection<'a, V>),
{
    let _ = try_each(collection, |value, key, c| {
        iterator(value, key, c);
        ControlFlow::<()>::Continue(())
    });
}

/// Like [`each`], but stops as soon as `f` breaks and returns the break
/// value. Returns `None` when the traversal ran to completion.
pub fn try_each<'a, V, B, F>(collection: impl Into<Collection<'a, V>>, mut f: F) -> Option<B>
where
    V: 'a,
    F: FnMut(&'a V, Key<'a>, &Collection<'a, V>) -> ControlFlow<B>,
{
    let collection = collection.into();
    match collection {
        Collection::Null => None,
        Collection::Sequence(items) => {
            for (i, value) in items.iter().enumerate() {
                if let ControlFlow::Break(b) = f(value, Key::Index(i), &collection) {
                    return Some(b);
                }
            }
            None
        }
        Collection::Mapping(map) => {
            let mut broke = None;
            let _ = map.try_for_each_entry(&mut |name, value| {
                match f(value, Key::Name(name), &collection) {
                    ControlFlow::Continue(()) => ControlFlow::Continue(()),
                    ControlFlow::Break(b) => {
                        broke = Some(b);
                        ControlFlow::Break(())
                    }
                }
            });
            broke
        }
    }
}
