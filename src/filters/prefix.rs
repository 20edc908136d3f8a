//! Key prefixing.

use crate::error::FilterResult;
use crate::types::{Key, Record};

use super::Filter;
use super::mutator::mutate_keys;

/// Prepends a fixed string to every key.
///
/// Integer keys are stringified first, so prefix `"_"` turns `Key::Int(3)` into `"_3"`. The
/// prefix is read when `filter` runs, so [`KeyPrefixFilter::set_prefix`] takes effect on the next
/// call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPrefixFilter {
    prefix: String,
}

impl KeyPrefixFilter {
    /// Create a filter that prepends `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Set the prefix.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.prefix = prefix.into();
        self
    }

    /// Builder-style [`KeyPrefixFilter::set_prefix`].
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.set_prefix(prefix);
        self
    }

    /// Returns the prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `key` with the current prefix prepended.
    pub fn prepend(&self, key: &Key) -> Key {
        Key::Str(format!("{}{}", self.prefix, key))
    }
}

impl Filter for KeyPrefixFilter {
    fn filter(&self, record: &Record) -> FilterResult<Record> {
        mutate_keys(record, |key| Ok(self.prepend(key)))
    }
}
