//! Mandatory-field validation.

use crate::error::ValidationError;

/// Validation capability every API object exposes.
///
/// Implementations check their own mandatory fields in declared order, then
/// cascade into every present nested object, stopping at the first failure.
/// Nested failures propagate unchanged so the error always names the object
/// that actually broke the invariant.
pub trait Validate {
    /// Validates that mandatory fields are filled.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first missing or empty
    /// mandatory field.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Fail if a mandatory string attribute is empty.
pub(crate) fn non_empty(
    object: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError { object, field });
    }
    Ok(())
}
