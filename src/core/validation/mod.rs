//! Validation and normalization of records
//!
//! Collections call [`Validate::normalize`] and then [`Validate::validate`]
//! on every record they create or update.

pub mod filters;
pub mod validators;

use crate::core::error::ValidationError;
use crate::core::field::FieldValue;

/// Trait for records that can be checked before they enter a collection
pub trait Validate {
    /// Normalize field values in place (trimming, rounding, ...)
    fn normalize(&mut self) {}

    /// Check the record's fields
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Run `validator` against one field, recording any failure in `errors`
pub fn check<F>(errors: &mut ValidationError, field: &str, value: &FieldValue, validator: F)
where
    F: Fn(&str, &FieldValue) -> Result<(), String>,
{
    if let Err(message) = validator(field, value) {
        errors.add(field, message);
    }
}
