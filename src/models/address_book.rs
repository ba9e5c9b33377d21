//! AddressBook model: records keyed by contact name.

use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An in-memory collection of [`Record`]s keyed by contact name.
///
/// The book composes a map rather than exposing one, so the public
/// contract stays exactly these operations: add, find, delete, iterate.
/// Duplicate names overwrite silently (last write wins) and lookups or
/// deletions of absent names are not errors.
///
/// The book performs no internal synchronization; embedding it in a
/// multi-threaded host requires external locking.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut record = Record::new("John");
/// record.add_phone("1234567890").unwrap();
/// book.add_record(record);
///
/// assert!(book.find("John").is_some());
/// book.delete("John");
/// assert!(book.find("John").is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its contact name.
    ///
    /// If a record with the same name already exists it is replaced
    /// entirely, phones included. No error is raised on overwrite.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        if self.records.contains_key(&name) {
            tracing::debug!(name = %name, "Overwriting existing record");
        } else {
            tracing::debug!(name = %name, "Adding record");
        }
        self.records.insert(name, record);
    }

    /// Find a record by exact contact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Find a record by exact contact name, for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Delete the record with the given name, if present.
    ///
    /// Silent no-op when the name is absent.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_some() {
            tracing::debug!(name = name, "Deleted record");
        }
    }

    /// Iterate over all (name, record) pairs. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
