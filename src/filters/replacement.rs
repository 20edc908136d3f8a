//! Key renaming through a static lookup table.

use std::collections::HashMap;

use crate::error::FilterResult;
use crate::types::{Key, Record};

use super::Filter;
use super::mutator::mutate_keys;

/// Renames keys found in a map; every other key passes through unchanged.
///
/// Handy for normalizing database column names to application field names. No key is ever
/// dropped, but collisions (two sources with one destination, or a destination equal to an
/// unmapped key) collapse entries with the later input winning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyReplacementFilter {
    map: HashMap<Key, Key>,
}

impl KeyReplacementFilter {
    /// Create a filter from `(source, destination)` pairs.
    pub fn new<I, S, D>(map: I) -> Self
    where
        I: IntoIterator<Item = (S, D)>,
        S: Into<Key>,
        D: Into<Key>,
    {
        let mut filter = Self::default();
        filter.set_map(map);
        filter
    }

    /// Replace the key map.
    pub fn set_map<I, S, D>(&mut self, map: I) -> &mut Self
    where
        I: IntoIterator<Item = (S, D)>,
        S: Into<Key>,
        D: Into<Key>,
    {
        self.map = map.into_iter().map(|(s, d)| (s.into(), d.into())).collect();
        self
    }

    /// Builder-style [`KeyReplacementFilter::set_map`].
    pub fn with_map<I, S, D>(mut self, map: I) -> Self
    where
        I: IntoIterator<Item = (S, D)>,
        S: Into<Key>,
        D: Into<Key>,
    {
        self.set_map(map);
        self
    }

    /// Returns the key map.
    pub fn map(&self) -> &HashMap<Key, Key> {
        &self.map
    }

    /// Returns the mapped name for `key`, or `key` itself when it is not mapped.
    pub fn replace(&self, key: &Key) -> Key {
        self.map.get(key).cloned().unwrap_or_else(|| key.clone())
    }
}

impl Filter for KeyReplacementFilter {
    fn filter(&self, record: &Record) -> FilterResult<Record> {
        mutate_keys(record, |key| Ok(self.replace(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::KeyReplacementFilter;
    use crate::filters::Filter;
    use crate::types::{Key, Record, Value};

    #[test]
    fn with_map_replaces_the_whole_map() {
        let f = KeyReplacementFilter::new([("a", "x")]).with_map([("b", "y")]);
        assert_eq!(f.map().len(), 1);
        assert_eq!(f.replace(&Key::from("a")), Key::from("a"));

        let out = f.filter(&Record::from([("a", 1), ("b", 2)])).unwrap();
        assert_eq!(out, Record::from([("a", 1), ("y", 2)]));
    }

    #[test]
    fn maps_known_keys_and_passes_others_through() {
        let f = KeyReplacementFilter::new([("ID", "id")]);
        let input = Record::from([("ID", Value::Int64(12)), ("NotInMap", Value::from("x"))]);
        let out = f.filter(&input).unwrap();

        assert!(!out.contains_key("ID"));
        assert_eq!(out.keys().collect::<Vec<_>>(), vec![&Key::from("id"), &Key::from("NotInMap")]);
        assert_eq!(out.get("id"), Some(&Value::Int64(12)));
        assert_eq!(out.get("NotInMap"), input.get("NotInMap"));
    }

    #[test]
    fn renamed_entries_keep_their_position() {
        let f = KeyReplacementFilter::new([("b", "B")]);
        let out = f.filter(&Record::from([("a", 1), ("b", 2), ("c", 3)])).unwrap();
        assert_eq!(out, Record::from([("a", 1), ("B", 2), ("c", 3)]));
    }

    #[test]
    fn destination_colliding_with_passthrough_key_is_last_write_wins() {
        let f = KeyReplacementFilter::new([("old", "new")]);
        let out = f.filter(&Record::from([("old", 1), ("new", 2)])).unwrap();
        assert_eq!(out, Record::from([("new", 2)]));
    }

    #[test]
    fn set_map_replaces_previous_map() {
        let mut f = KeyReplacementFilter::new([("a", "x")]);
        f.set_map([("b", "y")]);
        assert_eq!(f.map().len(), 1);
        assert_eq!(f.replace(&Key::from("a")), Key::from("a"));
        assert_eq!(f.replace(&Key::from("b")), Key::from("y"));
    }

    #[test]
    fn integer_keys_can_be_mapped_to_names() {
        let f = KeyReplacementFilter::new([(Key::from(0), Key::from("first"))]);
        let mut input = Record::new();
        input.insert(0, "a");
        input.insert(1, "b");
        let out = f.filter(&input).unwrap();
        assert_eq!(out.keys().collect::<Vec<_>>(), vec![&Key::from("first"), &Key::from(1)]);
    }

    #[test]
    fn empty_map_is_identity() {
        let input = Record::from([("a", 1), ("b", 2)]);
        assert_eq!(KeyReplacementFilter::default().filter(&input).unwrap(), input);
    }
}
