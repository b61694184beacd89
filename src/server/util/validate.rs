//! Field level input validation.
//!
//! Services run these checks before touching the store so malformed input is reported
//! as a 400 rather than surfacing as a database error.

use crate::server::error::validation::ValidationError;

/// Ensures a required text field contains something other than whitespace.
///
/// # Arguments
/// - `field` - Field name reported back to the client
/// - `value` - Value to check
///
/// # Returns
/// - `Ok(())` - Value is not blank
/// - `Err(ValidationError::EmptyField)` - Value is empty or whitespace only
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    Ok(())
}

/// Ensures a counter such as goals or appearances is not negative.
///
/// # Arguments
/// - `field` - Field name reported back to the client
/// - `value` - Value to check
///
/// # Returns
/// - `Ok(())` - Value is zero or greater
/// - `Err(ValidationError::NegativeValue)` - Value is below zero
pub fn require_non_negative(field: &'static str, value: i32) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeValue { field, value });
    }

    Ok(())
}
