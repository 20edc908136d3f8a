//! Key renaming through a caller-supplied function.

use std::fmt;
use std::sync::Arc;

use crate::error::FilterResult;
use crate::types::{Key, Record};

use super::Filter;

/// Shared, thread-safe key mapping function.
///
/// A mutator may fail; the error is returned from `filter` unchanged.
pub type KeyMutator = Arc<dyn Fn(&Key) -> FilterResult<Key> + Send + Sync>;

/// Rewrites every key of a record via `mutator`, preserving entry order.
///
/// If two input keys map to the same output key, the later value wins and the entry stays at the
/// position where that output key first appeared.
pub(crate) fn mutate_keys<M>(record: &Record, mut mutator: M) -> FilterResult<Record>
where
    M: FnMut(&Key) -> FilterResult<Key>,
{
    let mut out = Record::with_capacity(record.len());
    for (key, value) in record {
        out.insert(mutator(key)?, value.clone());
    }
    Ok(out)
}

/// Renames every key of a record through a user function.
///
/// Useful for adding prefixes/suffixes or switching naming conventions. No validation is applied
/// to the produced keys, and non-injective mutators collapse entries (last input wins).
///
/// ```rust
/// use record_filters::filters::{Filter, KeyMutatorFilter};
/// use record_filters::types::{Key, Record};
///
/// let upper = KeyMutatorFilter::infallible(|k: &Key| Key::from(k.to_string().to_uppercase()));
/// let out = upper.filter(&Record::from([("name", "Ada")])).unwrap();
/// assert_eq!(out, Record::from([("NAME", "Ada")]));
/// ```
#[derive(Clone)]
pub struct KeyMutatorFilter {
    mutator: KeyMutator,
}

impl KeyMutatorFilter {
    /// Create a filter from a fallible mutator.
    pub fn new<M>(mutator: M) -> Self
    where
        M: Fn(&Key) -> FilterResult<Key> + Send + Sync + 'static,
    {
        Self {
            mutator: Arc::new(mutator),
        }
    }

    /// Create a filter from a mutator that cannot fail.
    pub fn infallible<M>(mutator: M) -> Self
    where
        M: Fn(&Key) -> Key + Send + Sync + 'static,
    {
        Self::new(move |key: &Key| Ok(mutator(key)))
    }

    /// Replace the mutator.
    pub fn set_mutator<M>(&mut self, mutator: M) -> &mut Self
    where
        M: Fn(&Key) -> FilterResult<Key> + Send + Sync + 'static,
    {
        self.mutator = Arc::new(mutator);
        self
    }

    /// Builder-style [`KeyMutatorFilter::set_mutator`].
    pub fn with_mutator<M>(mut self, mutator: M) -> Self
    where
        M: Fn(&Key) -> FilterResult<Key> + Send + Sync + 'static,
    {
        self.set_mutator(mutator);
        self
    }

    /// Returns the current mutator.
    pub fn mutator(&self) -> &KeyMutator {
        &self.mutator
    }
}

impl fmt::Debug for KeyMutatorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMutatorFilter").finish_non_exhaustive()
    }
}

impl Filter for KeyMutatorFilter {
    fn filter(&self, record: &Record) -> FilterResult<Record> {
        mutate_keys(record, |key| (self.mutator)(key))
    }
}
