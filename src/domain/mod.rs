//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the contact book's field
//! values: contact names and phone numbers. Both follow the same "typed
//! string" idiom (construction, `as_str`, `Display`); `Phone` additionally
//! validates its format at construction time so invalid numbers cannot be
//! represented in the system.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::{ValidationError, ValidationResult};
pub use name::Name;
pub use phone::Phone;
