//! Record model aggregating one contact's name and phone numbers.

use crate::domain::{Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name plus an ordered list of phone numbers.
///
/// The name is fixed at construction. Phones keep insertion order and may
/// contain duplicates; lookups scan linearly and match on exact string
/// equality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a new record with the given contact name and no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate and append a phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number is not exactly
    /// 10 decimal digits; the record is unchanged in that case.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(number)?;
        tracing::debug!(name = %self.name, phone = %phone, "Adding phone to record");
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first phone whose value equals `number` exactly.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Remove the first phone whose value equals `number` exactly.
    ///
    /// Silent no-op when no phone matches. Later duplicates and the order
    /// of the remaining phones are untouched.
    pub fn remove_phone(&mut self, number: &str) {
        if let Some(index) = self.phones.iter().position(|p| p.as_str() == number) {
            tracing::debug!(name = %self.name, phone = number, "Removing phone from record");
            self.phones.remove(index);
        }
    }

    /// Rewrite the first phone whose value equals `old` to hold `new`.
    ///
    /// Silent no-op when no phone matches `old`. The replacement value is
    /// NOT re-validated against the 10-digit format; this mirrors the
    /// original edit behavior, which bypasses the constructor check. Callers
    /// that need the format invariant preserved should validate `new` with
    /// [`Phone::new`](crate::domain::Phone::new) first.
    pub fn edit_phone(&mut self, old: &str, new: &str) {
        if let Some(phone) = self.phones.iter_mut().find(|p| p.as_str() == old) {
            tracing::debug!(name = %self.name, old = old, new = new, "Editing phone on record");
            phone.set_raw(new);
        }
    }
}

// Display support - fixed rendering used for console output
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = Record::new("John");
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_add_phone_then_find() {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();
        let found = record.find_phone("1234567890").unwrap();
        assert_eq!(found.as_str(), "1234567890");
    }

    #[test]
    fn test_add_phone_invalid_propagates_and_leaves_record_unchanged() {
        let mut record = Record::new("John");
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12345".to_string()));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_add_phone_preserves_insertion_order_and_duplicates() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_find_phone_absent_returns_none() {
        let record = Record::new("John");
        assert!(record.find_phone("1234567890").is_none());
    }

    #[test]
    fn test_remove_phone() {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();
        record.remove_phone("1234567890");
        assert!(record.find_phone("1234567890").is_none());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_only_first_duplicate() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        record.remove_phone("1111111111");

        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn test_remove_phone_absent_is_noop() {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();
        record.remove_phone("9999999999");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_changes_first_match_only() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("1111111111").unwrap();

        record.edit_phone("1111111111", "2222222222");

        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn test_edit_phone_does_not_revalidate() {
        // Deliberate fidelity to the original behavior: edit_phone skips
        // the 10-digit check the constructor enforces.
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();

        record.edit_phone("1234567890", "bad-number");

        let found = record.find_phone("bad-number").unwrap();
        assert_eq!(found.as_str(), "bad-number");
    }

    #[test]
    fn test_edit_phone_absent_is_noop() {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();

        record.edit_phone("9999999999", "8888888888");

        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["1234567890"]);
    }

    #[test]
    fn test_display_format() {
        let mut record = Record::new("John");
        record.add_phone("1112223333").unwrap();
        record.add_phone("5555555555").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1112223333; 5555555555"
        );
    }

    #[test]
    fn test_display_empty_phones() {
        let record = Record::new("John");
        assert_eq!(record.to_string(), "Contact name: John, phones: ");
    }

    #[test]
    fn test_record_serde_round_trip() {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_deserialization_rejects_invalid_phone() {
        let json = r#"{"name":"John","phones":["12345"]}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
