//! Pure validation predicates for the comment form.
//!
//! Each predicate is independent of any UI binding: it takes a field value
//! and returns either `Ok(())` or the `FieldError` whose `Display` string is
//! shown next to the field.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Must be at least {0} characters")]
    TooShort(usize),
    #[error("Must be {0} characters or less")]
    TooLong(usize),
}

/// Lengths are counted in characters, not bytes.
pub fn min_length(min: usize, value: &str) -> Result<(), FieldError> {
    if value.chars().count() < min {
        return Err(FieldError::TooShort(min));
    }
    Ok(())
}

pub fn max_length(max: usize, value: &str) -> Result<(), FieldError> {
    if value.chars().count() > max {
        return Err(FieldError::TooLong(max));
    }
    Ok(())
}

/// Author name: 2..=15 characters. "Required" is implied: `min_length(2)`
/// rejects the empty string, so an untouched empty field surfaces
/// "Must be at least 2 characters".
pub fn validate_author(value: &str) -> Result<(), FieldError> {
    min_length(2, value)?;
    max_length(15, value)
}
