//! `record-filters` is a small library of composable filters for keyed records.
//!
//! A [`types::Record`] is an insertion-ordered mapping from [`types::Key`] to [`types::Value`].
//! Each filter implements [`filters::Filter`]: it borrows a record and returns a new, transformed
//! one. Typical uses are stripping sensitive fields before display or transmission and renaming
//! database column names to application field names.
//!
//! ## Filters
//!
//! - [`filters::IncludeFieldsFilter`]: keep only an allow-list of fields
//! - [`filters::ExcludeFieldsFilter`]: drop a deny-list of fields
//! - [`filters::KeyMutatorFilter`]: rename every key through a caller-supplied function
//! - [`filters::KeyPrefixFilter`]: prepend a fixed string to every key
//! - [`filters::KeyReplacementFilter`]: rename keys through a lookup table
//! - [`filters::ChainedFilter`]: run filters in sequence; chains nest
//!
//! Field order is preserved. Renaming keeps an entry at its original position; when a rename
//! produces a key that already exists in the output, the later input entry wins.
//!
//! ## Quick example
//!
//! ```rust
//! use record_filters::filters::{ChainedFilter, ExcludeFieldsFilter, Filter, KeyReplacementFilter};
//! use record_filters::types::{Record, Value};
//!
//! # fn main() -> Result<(), record_filters::FilterError> {
//! let row = Record::from([
//!     ("USER_NAME", Value::from("Joe Bloe")),
//!     ("SSN", Value::from("123-45-6789")),
//!     ("AGE", Value::Int64(42)),
//! ]);
//!
//! let chain = ChainedFilter::new()
//!     .with_filter(ExcludeFieldsFilter::new(["SSN"]))
//!     .with_filter(KeyReplacementFilter::new([("USER_NAME", "name"), ("AGE", "age")]));
//!
//! let out = chain.filter(&row)?;
//! assert_eq!(out, Record::from([("name", Value::from("Joe Bloe")), ("age", Value::Int64(42))]));
//! # Ok(())
//! # }
//! ```
//!
//! ## Key coercion
//!
//! Keys are never coerced on input: `Key::Int(1)` and `Key::Str("1")` are different keys. Only
//! string-building mutators stringify keys; [`filters::KeyPrefixFilter`] turns `Key::Int(3)` into
//! `"_3"` for prefix `"_"`.
//!
//! ## Errors
//!
//! Every `filter` call returns a [`FilterResult`]. Built-in filters only fail when a
//! caller-supplied key mutator fails; a [`filters::ChainedFilter`] stops at the first failing step
//! and returns that error unchanged.
//!
//! ## Modules
//!
//! - [`types`]: keys, values and records
//! - [`filters`]: the filter trait, the built-in filters and chain observers
//! - [`config`]: serde-backed declarative filter configuration
//! - [`json`]: record conversion from/to JSON
//! - [`error`]: the shared error type

pub mod config;
pub mod error;
pub mod filters;
pub mod json;
pub mod types;

pub use error::{FilterError, FilterResult};
