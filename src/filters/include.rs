//! Allow-list field filtering.

use crate::error::FilterResult;
use crate::types::{Key, Record};

use super::{Filter, select_fields};

/// Keeps only the listed fields, in their original input order.
///
/// Listed fields missing from the input are simply absent from the output. With no fields
/// configured every entry is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeFieldsFilter {
    included_fields: Vec<Key>,
}

impl IncludeFieldsFilter {
    /// Create a filter that keeps `fields`.
    pub fn new<I>(fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        let mut filter = Self::default();
        filter.set_included_fields(fields);
        filter
    }

    /// Replace the list of included fields.
    pub fn set_included_fields<I>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        self.clear_included_fields();
        for field in fields {
            self.add_included_field(field);
        }
        self
    }

    /// Append one field to the list.
    pub fn add_included_field(&mut self, field: impl Into<Key>) -> &mut Self {
        self.included_fields.push(field.into());
        self
    }

    /// Builder-style [`IncludeFieldsFilter::add_included_field`].
    pub fn with_included_field(mut self, field: impl Into<Key>) -> Self {
        self.add_included_field(field);
        self
    }

    /// Empty the list. The filter then drops every entry.
    pub fn clear_included_fields(&mut self) -> &mut Self {
        self.included_fields.clear();
        self
    }

    /// Returns the list of included fields, in the order they were added.
    pub fn included_fields(&self) -> &[Key] {
        &self.included_fields
    }
}

impl Filter for IncludeFieldsFilter {
    fn filter(&self, record: &Record) -> FilterResult<Record> {
        Ok(select_fields(record, &self.included_fields, true))
    }
}

#[cfg(test)]
mod tests {
    use super::IncludeFieldsFilter;
    use crate::filters::Filter;
    use crate::types::{Key, Record};

    #[test]
    fn with_included_field_extends_the_list() {
        let f = IncludeFieldsFilter::default()
            .with_included_field("b")
            .with_included_field(3);
        assert_eq!(f.included_fields(), &[Key::from("b"), Key::Int(3)]);

        let mut input = Record::from([("a", 1), ("b", 2)]);
        input.insert(3, 4);
        let mut expected = Record::from([("b", 2)]);
        expected.insert(3, 4);
        assert_eq!(f.filter(&input).unwrap(), expected);
    }

    fn person() -> Record {
        Record::from([("name", "Joe Bloe"), ("ssn", "123-45-6789"), ("city", "Erie")])
    }

    #[test]
    fn keeps_only_included_fields() {
        let f = IncludeFieldsFilter::new(["ssn"]);
        let out = f.filter(&person()).unwrap();
        assert_eq!(out, Record::from([("ssn", "123-45-6789")]));
    }

    #[test]
    fn output_follows_input_order_not_list_order() {
        let f = IncludeFieldsFilter::new(["city", "name"]);
        let out = f.filter(&person()).unwrap();
        assert_eq!(out, Record::from([("name", "Joe Bloe"), ("city", "Erie")]));
    }

    #[test]
    fn missing_and_duplicate_fields_have_no_effect() {
        let f = IncludeFieldsFilter::new(["name", "name", "not_there"]);
        let out = f.filter(&person()).unwrap();
        assert_eq!(out, Record::from([("name", "Joe Bloe")]));
    }

    #[test]
    fn default_filter_drops_everything() {
        let out = IncludeFieldsFilter::default().filter(&person()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn list_management_setters_are_fluent() {
        let mut f = IncludeFieldsFilter::new(["a"]);
        f.add_included_field("b").add_included_field("c");
        assert_eq!(f.included_fields(), &[Key::from("a"), Key::from("b"), Key::from("c")]);

        f.set_included_fields(["name"]);
        assert_eq!(f.included_fields(), &[Key::from("name")]);
        assert_eq!(f.filter(&person()).unwrap().len(), 1);

        f.clear_included_fields();
        assert!(f.included_fields().is_empty());
    }

    #[test]
    fn input_is_left_untouched() {
        let input = person();
        let _ = IncludeFieldsFilter::new(["name"]).filter(&input).unwrap();
        assert_eq!(input, person());
    }
}
