//! Contact Book - a minimal in-memory contact store.
//!
//! This library stores contact names and their phone numbers, validates
//! phone number format at construction, and supports adding, finding,
//! editing, and removing entries. There is no persistence and no
//! concurrency handling; it is a single-threaded data structure library.
//!
//! # Architecture
//!
//! - **domain**: Type-safe value objects (`Name`, `Phone`) and the single
//!   `ValidationError` kind
//! - **models**: The `Record` aggregate (one name, many phones) and the
//!   `AddressBook` collection keyed by contact name
//!
//! # Example
//!
//! ```
//! use contact_book::{AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//!
//! let mut john = Record::new("John");
//! john.add_phone("1234567890")?;
//! john.add_phone("5555555555")?;
//! book.add_record(john);
//!
//! book.find_mut("John")
//!     .unwrap()
//!     .edit_phone("1234567890", "1112223333");
//!
//! assert_eq!(
//!     book.find("John").unwrap().to_string(),
//!     "Contact name: John, phones: 1112223333; 5555555555"
//! );
//! # Ok::<(), contact_book::ValidationError>(())
//! ```

// Re-export commonly used types
pub mod domain;
pub mod models;

pub use domain::{Name, Phone, ValidationError, ValidationResult};
pub use models::{AddressBook, Record};
