// src/arrays/mod.rs — Sequence operations built on the query layer

pub mod flatten;
pub mod sets;
pub mod shuffle;
pub mod sort;
pub mod zip;

pub use flatten::{flatten, flatten_value, Nested};
pub use sets::{
    difference, difference_by, difference_value, intersection, intersection_by, intersection_value,
};
pub use shuffle::{shuffle, shuffle_configured, shuffle_seeded, shuffle_with};
pub use sort::{sort_by, sort_by_property};
pub use zip::zip;
