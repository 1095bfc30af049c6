//! Typed error handling for catalog collections
//!
//! Filtering and sorting never fail; errors only come from mutating a
//! collection or loading configuration.
//!
//! # Example
//!
//! ```rust,ignore
//! match colors.update(id, color) {
//!     Ok(updated) => println!("Updated {}", updated.name),
//!     Err(CatalogError::NotFound { resource, id }) => {
//!         println!("{} {} is gone", resource, id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use crate::core::entity::RecordId;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// The main error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Record was not found in its collection
    #[error("{resource} with id '{id}' not found")]
    NotFound {
        resource: &'static str,
        id: RecordId,
    },

    /// A record with the same id is already present
    #[error("{resource} with id '{id}' already exists")]
    AlreadyExists {
        resource: &'static str,
        id: RecordId,
    },

    /// Record failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::NotFound { .. } => "RECORD_NOT_FOUND",
            CatalogError::AlreadyExists { .. } => "RECORD_ALREADY_EXISTS",
            CatalogError::Validation(_) => "VALIDATION_ERROR",
            CatalogError::Config(_) => "CONFIG_ERROR",
            CatalogError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to a serializable error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            CatalogError::NotFound { resource, id }
            | CatalogError::AlreadyExists { resource, id } => Some(serde_json::json!({
                "resource": resource,
                "id": id,
            })),
            CatalogError::Validation(e) => Some(serde_json::json!({ "fields": e.fields })),
            _ => None,
        }
    }
}

/// Error response structure surfaced to the owning view
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Per-field validation failures
#[derive(Debug, Clone, Default, PartialEq, Error)]
pub struct ValidationError {
    /// field name -> messages
    pub fields: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Single-field error
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut error = Self::new();
        error.add(field, message);
        error
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages recorded for `field`
    pub fn messages(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed")?;
        for (field, messages) in &self.fields {
            write!(f, "; {}: {}", field, messages.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_and_code() {
        let err = CatalogError::NotFound {
            resource: "color",
            id: RecordId(42),
        };
        assert_eq!(err.to_string(), "color with id '42' not found");
        assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
    }

    #[test]
    fn test_already_exists_details() {
        let err = CatalogError::AlreadyExists {
            resource: "faq",
            id: RecordId(3),
        };
        let response = err.to_response();
        assert_eq!(response.code, "RECORD_ALREADY_EXISTS");
        assert_eq!(
            response.details,
            Some(serde_json::json!({"resource": "faq", "id": 3}))
        );
    }

    #[test]
    fn test_validation_error_collects_fields() {
        let mut err = ValidationError::new();
        err.add("name", "is required");
        err.add("name", "is too short");
        err.add("color_code", "must be a hex color");

        assert_eq!(err.messages("name").len(), 2);
        assert_eq!(err.messages("missing"), &[] as &[String]);
        assert_eq!(
            err.to_string(),
            "Validation failed; color_code: must be a hex color; name: is required, is too short"
        );
    }

    #[test]
    fn test_validation_converts_into_catalog_error() {
        let err: CatalogError = ValidationError::single("price", "must be positive").into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        let response = err.to_response();
        assert!(response.details.is_some());
    }

    #[test]
    fn test_empty_validation_is_ok() {
        assert!(ValidationError::new().into_result().is_ok());
        assert!(ValidationError::single("x", "bad").into_result().is_err());
    }
}
