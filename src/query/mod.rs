// src/query/mod.rs — Derived query operations built on the traversal primitive

pub mod access;
pub mod filter;
pub mod fold;
pub mod transform;

pub use access::{first, first_n, index_of, index_of_by, index_of_value, last, last_n};
pub use filter::{filter, reject, uniq, uniq_by, uniq_value};
pub use fold::{
    contains, contains_by, every, every_short_circuit, reduce, reduce_default, some,
    some_short_circuit, some_truthy,
};
pub use transform::{invoke, invoke_with, map, pluck, Method};
