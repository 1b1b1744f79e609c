//! Document type: an entire parsed LTSV input.
//!
//! A [`Document`] is an ordered sequence of [`Record`]s, one per non-empty
//! input line, in input order. The document owns its records; dropping a
//! document releases every record and field beneath it.

use crate::Record;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// An ordered sequence of [`Record`]s parsed from one LTSV input.
///
/// # Examples
///
/// ```rust
/// use ltsv::parse_str;
///
/// let document = parse_str("label:text\thoge:fuga\nmm:value:1").unwrap();
/// assert_eq!(document.len(), 2);
///
/// for record in document.iter() {
///     assert!(!record.is_empty());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document(Vec<Record>);

impl Document {
    /// Creates an empty `Document`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltsv::Document;
    ///
    /// let document = Document::new();
    /// assert!(document.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Document(Vec::new())
    }

    /// Creates an empty `Document` with the specified record capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Document(Vec::with_capacity(capacity))
    }

    /// Returns the number of records in the document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltsv::parse_str;
    ///
    /// assert_eq!(parse_str("a:1\nb:2\nc:3").unwrap().len(), 3);
    /// assert_eq!(parse_str("").unwrap().len(), 0);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document contains no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the record at `index`, or `None` if out of bounds. Records
    /// are indexed in input-line order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltsv::parse_str;
    ///
    /// let document = parse_str("a:1\nb:2").unwrap();
    /// assert_eq!(document.get(1).unwrap().get("b"), Some("2"));
    /// assert!(document.get(2).is_none());
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.0.get(index)
    }

    /// Appends a record to the document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ltsv::{Document, Record};
    ///
    /// let mut document = Document::new();
    /// let mut record = Record::new();
    /// record.insert("key".to_string(), "value".to_string());
    /// document.push(record);
    /// assert_eq!(document.len(), 1);
    /// ```
    pub fn push(&mut self, record: Record) {
        self.0.push(record);
    }

    /// Returns an iterator over the records of the document, in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for record in self.iter() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

impl IntoIterator for Document {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Record> for Document {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Document(Vec::from_iter(iter))
    }
}
