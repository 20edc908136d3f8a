//! Record filters.
//!
//! Every filter implements [`Filter`]: it borrows an input [`Record`] and returns a new one. The
//! input is never modified.
//!
//! Currently implemented:
//!
//! - [`IncludeFieldsFilter`]: keep only an allow-list of keys
//! - [`ExcludeFieldsFilter`]: drop a deny-list of keys
//! - [`KeyMutatorFilter`]: rename every key through a caller-supplied function
//! - [`KeyPrefixFilter`]: prepend a fixed string to every key
//! - [`KeyReplacementFilter`]: rename keys through a lookup table
//! - [`ChainedFilter`]: apply a sequence of filters, feeding each output to the next
//! - [`filter_fn`]: turn a closure into a filter
//!
//! ## Example: strip, rename, prefix
//!
//! ```rust
//! use record_filters::filters::{
//!     ChainedFilter, ExcludeFieldsFilter, Filter, KeyPrefixFilter, KeyReplacementFilter,
//! };
//! use record_filters::types::Record;
//!
//! # fn main() -> Result<(), record_filters::FilterError> {
//! let row = Record::from([("USER_ID", "7"), ("PASSWORD", "hunter2"), ("EMAIL", "a@b.c")]);
//!
//! let chain = ChainedFilter::new()
//!     .with_filter(ExcludeFieldsFilter::new(["PASSWORD"]))
//!     .with_filter(KeyReplacementFilter::new([("USER_ID", "id"), ("EMAIL", "email")]))
//!     .with_filter(KeyPrefixFilter::new("user_"));
//!
//! let out = chain.filter(&row)?;
//! assert_eq!(out, Record::from([("user_id", "7"), ("user_email", "a@b.c")]));
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod exclude;
pub mod include;
pub mod mutator;
pub mod observer;
pub mod prefix;
pub mod replacement;

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::FilterResult;
use crate::types::{Key, Record};

pub use chain::ChainedFilter;
pub use exclude::ExcludeFieldsFilter;
pub use include::IncludeFieldsFilter;
pub use mutator::{KeyMutator, KeyMutatorFilter};
pub use observer::{ChainEvent, ChainObserver, RecordingChainObserver, StdErrChainObserver};
pub use prefix::KeyPrefixFilter;
pub use replacement::KeyReplacementFilter;

/// A transformation from one [`Record`] to another.
///
/// Implementations must not modify the input and must not perform I/O. Errors are returned to
/// the caller as-is; a filter never swallows an error raised by something it delegates to.
pub trait Filter: Send + Sync {
    /// Filter `record` and return the result as a new record.
    fn filter(&self, record: &Record) -> FilterResult<Record>;
}

/// Adapts a closure into a [`Filter`]. Built by [`filter_fn`].
#[derive(Clone)]
pub struct FnFilter<F> {
    f: F,
}

impl<F> fmt::Debug for FnFilter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFilter").finish_non_exhaustive()
    }
}

/// Wrap `f` as a [`Filter`], for ad-hoc steps in a chain.
///
/// ```rust
/// use record_filters::filters::{filter_fn, Filter};
/// use record_filters::types::Record;
///
/// let stamp = filter_fn(|r: &Record| {
///     let mut out = r.clone();
///     out.insert("seen", true);
///     Ok(out)
/// });
/// assert_eq!(stamp.filter(&Record::new()).unwrap(), Record::from([("seen", true)]));
/// ```
pub fn filter_fn<F>(f: F) -> FnFilter<F>
where
    F: Fn(&Record) -> FilterResult<Record> + Send + Sync,
{
    FnFilter { f }
}

impl<F> Filter for FnFilter<F>
where
    F: Fn(&Record) -> FilterResult<Record> + Send + Sync,
{
    fn filter(&self, record: &Record) -> FilterResult<Record> {
        (self.f)(record)
    }
}

impl<F: Filter + ?Sized> Filter for &F {
    fn filter(&self, record: &Record) -> FilterResult<Record> {
        (**self).filter(record)
    }
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    fn filter(&self, record: &Record) -> FilterResult<Record> {
        (**self).filter(record)
    }
}

impl<F: Filter + ?Sized> Filter for Arc<F> {
    fn filter(&self, record: &Record) -> FilterResult<Record> {
        (**self).filter(record)
    }
}

/// Copies the entries of `record` whose key membership in `fields` equals `keep_listed`.
///
/// Shared by the include/exclude filters. Entry order is preserved and values are cloned as-is.
pub(crate) fn select_fields(record: &Record, fields: &[Key], keep_listed: bool) -> Record {
    let listed: HashSet<&Key> = fields.iter().collect();
    record
        .iter()
        .filter(|(key, _)| listed.contains(key) == keep_listed)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
