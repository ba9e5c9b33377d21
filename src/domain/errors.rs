//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// This is the only error kind in the crate. "Not found" conditions
/// (missing phone numbers, missing records) are represented as `Option`
/// or silent no-ops, never as errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly 10 decimal digits.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
