//! Deny-list field filtering.

use crate::error::FilterResult;
use crate::types::{Key, Record};

use super::{Filter, select_fields};

/// Drops the listed fields and keeps everything else in original order.
///
/// Typical use is stripping sensitive fields before display or transmission. Excluding a field
/// that is not present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludeFieldsFilter {
    exclusions: Vec<Key>,
}

impl ExcludeFieldsFilter {
    /// Create a filter that drops `fields`.
    pub fn new<I>(fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        let mut filter = Self::default();
        filter.set_exclusions(fields);
        filter
    }

    /// Replace the list of excluded fields.
    pub fn set_exclusions<I>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        self.clear_exclusions();
        for field in fields {
            self.add_exclusion(field);
        }
        self
    }

    /// Append one field to the list.
    pub fn add_exclusion(&mut self, field: impl Into<Key>) -> &mut Self {
        self.exclusions.push(field.into());
        self
    }

    /// Builder-style [`ExcludeFieldsFilter::add_exclusion`].
    pub fn with_exclusion(mut self, field: impl Into<Key>) -> Self {
        self.add_exclusion(field);
        self
    }

    /// Empty the list.
    pub fn clear_exclusions(&mut self) -> &mut Self {
        self.exclusions.clear();
        self
    }

    /// Returns the list of excluded fields.
    pub fn exclusions(&self) -> &[Key] {
        &self.exclusions
    }
}

impl Filter for ExcludeFieldsFilter {
    fn filter(&self, record: &Record) -> FilterResult<Record> {
        Ok(select_fields(record, &self.exclusions, false))
    }
}
