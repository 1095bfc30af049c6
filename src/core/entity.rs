//! Record trait defining the core abstraction for every managed collection

use crate::core::field::{FieldValue, ToFieldValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a record within its collection
///
/// Ids are assigned at creation (by sequence or timestamp) and never change
/// for the lifetime of the record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    pub fn get(self) -> u64 {
        self.0
    }

    /// The id following this one in a sequence, `None` at `u64::MAX`
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(RecordId)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId(value)
    }
}

impl ToFieldValue for RecordId {
    fn to_field_value(&self) -> FieldValue {
        i64::try_from(self.0)
            .map(FieldValue::Integer)
            .unwrap_or(FieldValue::Float(self.0 as f64))
    }
}

/// Base trait for all records managed by a dashboard screen.
///
/// A record has:
/// - id: Unique identifier within its collection
/// - resource names: used in logs and error messages
/// - search_fields: fields matched by the free-text search box
/// - indexed_fields: fields that may be filtered and sorted on
/// - field_value: dynamic access to those fields
///
/// Concrete screens implement this with `impl_record!`.
pub trait Record: Clone + Send + Sync + 'static {
    /// The plural resource name (e.g., "products", "colors")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "product", "color")
    fn resource_name_singular() -> &'static str;

    /// Get the identifier for this record
    fn id(&self) -> RecordId;

    /// Replace the identifier (used by collections when assigning ids)
    fn set_id(&mut self, id: RecordId);

    /// Fields matched by free-text search, in priority order
    fn search_fields() -> &'static [&'static str];

    /// Fields that can be filtered and sorted on
    fn indexed_fields() -> &'static [&'static str];

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Whether `field` can be used in filters and sort keys
    fn is_indexed(field: &str) -> bool {
        field == "id" || Self::indexed_fields().contains(&field)
    }

    /// Human readable label: the first search field's value
    fn label(&self) -> String {
        Self::search_fields()
            .first()
            .and_then(|field| self.field_value(field))
            .map(|value| value.to_string())
            .unwrap_or_else(|| self.id().to_string())
    }
}
