//! Record type: one parsed LTSV line.
//!
//! This module provides [`Record`], an insertion-ordered collection of
//! `label: value` fields with unique labels. The parser builds one record
//! per input line; records can also be built programmatically (see the
//! [`record!`](crate::record) macro).
//!
//! ## Why IndexMap?
//!
//! A record is backed by [`IndexMap`] rather than `HashMap` to ensure:
//!
//! - **Field order**: fields iterate in the order they appeared on the line
//! - **Index access**: `label_at`/`value_at` address fields positionally
//! - **Unique labels**: the map structure makes the no-duplicate invariant
//!   impossible to violate after construction
//!
//! ## Examples
//!
//! ```rust
//! use ltsv::Record;
//!
//! let mut record = Record::new();
//! record.insert("host".to_string(), "127.0.0.1".to_string());
//! record.insert("status".to_string(), "200".to_string());
//!
//! assert_eq!(record.len(), 2);
//! assert_eq!(record.get("host"), Some("127.0.0.1"));
//! assert_eq!(record.label_at(1), Some("status"));
//! ```

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// An ordered collection of `label: value` fields parsed from one LTSV line.
///
/// Labels are case-sensitive and unique within a record; fields keep the
/// order in which they appeared on the line. Lookup is by exact label match
/// or by position.
///
/// # Examples
///
/// ```rust
/// use ltsv::parse_str;
///
/// let document = parse_str("host:127.0.0.1\tstatus:200").unwrap();
/// let record = document.get(0).unwrap();
///
/// assert_eq!(record.get("status"), Some("200"));
/// assert_eq!(record.get("missing"), None);
/// assert_eq!(record.label_at(0), Some("host"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record(IndexMap<String, String>);

impl Record {
    /// Creates an empty `Record`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltsv::Record;
    ///
    /// let record = Record::new();
    /// assert!(record.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Record(IndexMap::new())
    }

    /// Creates an empty `Record` with the specified field capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Record(IndexMap::with_capacity(capacity))
    }

    /// Returns the number of fields in the record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltsv::parse_str;
    ///
    /// let document = parse_str("a:1\tb:2\tc:3").unwrap();
    /// assert_eq!(document.get(0).unwrap().len(), 3);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record contains no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value for `label`, or `None` if no field carries that
    /// label. Matching is exact and case-sensitive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltsv::parse_str;
    ///
    /// let document = parse_str("Host:a\thost:b").unwrap();
    /// let record = document.get(0).unwrap();
    /// assert_eq!(record.get("Host"), Some("a"));
    /// assert_eq!(record.get("host"), Some("b"));
    /// assert_eq!(record.get("HOST"), None);
    /// ```
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    /// Returns `true` if the record has a field with this exact label.
    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    /// Returns the label of the field at `index`, or `None` if out of
    /// bounds. Fields are indexed in line order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltsv::parse_str;
    ///
    /// let document = parse_str("host:x\tstatus:200").unwrap();
    /// let record = document.get(0).unwrap();
    /// assert_eq!(record.label_at(0), Some("host"));
    /// assert_eq!(record.label_at(2), None);
    /// ```
    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.0.get_index(index).map(|(label, _)| label.as_str())
    }

    /// Returns the value of the field at `index`, or `None` if out of
    /// bounds.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.0.get_index(index).map(|(_, value)| value.as_str())
    }

    /// Returns the `(label, value)` pair at `index`, or `None` if out of
    /// bounds.
    #[must_use]
    pub fn field_at(&self, index: usize) -> Option<(&str, &str)> {
        self.0
            .get_index(index)
            .map(|(label, value)| (label.as_str(), value.as_str()))
    }

    /// Inserts a field into the record.
    ///
    /// If the record already contained this label, its value is replaced
    /// and the old value returned; the field keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltsv::Record;
    ///
    /// let mut record = Record::new();
    /// assert!(record.insert("key".to_string(), "a".to_string()).is_none());
    /// assert_eq!(
    ///     record.insert("key".to_string(), "b".to_string()),
    ///     Some("a".to_string()),
    /// );
    /// ```
    pub fn insert(&mut self, label: String, value: String) -> Option<String> {
        self.0.insert(label, value)
    }

    /// Returns an iterator over the labels of the record, in field order.
    pub fn labels(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the record, in field order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over the `(label, value)` pairs of the record,
    /// in field order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (label, value) in self.iter() {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl From<HashMap<String, String>> for Record {
    fn from(map: HashMap<String, String>) -> Self {
        Record(map.into_iter().collect())
    }
}

impl From<Record> for HashMap<String, String> {
    fn from(record: Record) -> Self {
        record.0.into_iter().collect()
    }
}

impl IntoIterator for Record {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Record(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        let mut record = Record::new();
        record.insert("host".to_string(), "127.0.0.1".to_string());
        record.insert("ident".to_string(), "-".to_string());
        record.insert("status".to_string(), "200".to_string());
        record
    }

    #[test]
    fn test_lookup_by_label() {
        let record = sample();
        assert_eq!(record.get("host"), Some("127.0.0.1"));
        assert_eq!(record.get("status"), Some("200"));
        assert_eq!(record.get("referer"), None);
    }

    #[test]
    fn test_lookup_by_index_preserves_order() {
        let record = sample();
        assert_eq!(record.label_at(0), Some("host"));
        assert_eq!(record.label_at(1), Some("ident"));
        assert_eq!(record.value_at(2), Some("200"));
        assert_eq!(record.field_at(1), Some(("ident", "-")));
        assert_eq!(record.label_at(3), None);
        assert_eq!(record.value_at(3), None);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let record = sample();
        assert!(record.contains_label("host"));
        assert!(!record.contains_label("Host"));
    }

    #[test]
    fn test_hashmap_roundtrip() {
        let record = sample();
        let map: HashMap<String, String> = record.clone().into();
        assert_eq!(map.len(), 3);
        assert_eq!(map["status"], "200");

        let back = Record::from(map);
        assert_eq!(back.len(), 3);
        assert_eq!(back.get("host"), Some("127.0.0.1"));
    }

    #[test]
    fn test_serializes_as_map() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            "{\"host\":\"127.0.0.1\",\"ident\":\"-\",\"status\":\"200\"}"
        );
    }
}
