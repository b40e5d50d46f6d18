// src/lib.rs — Library root for underbar
//
// Functional collection utilities over sequences and string-keyed
// mappings: iteration, queries, shallow merges, function decorators and
// array operations.

pub mod arrays;
pub mod collection;
pub mod decorators;
pub mod infra;
pub mod object;
pub mod query;
pub mod value;

pub use collection::{each, try_each, Collection, Key, MappingView};
pub use infra::config::{Config, EqualityMode};
pub use infra::errors::{Result, UnderbarError};
