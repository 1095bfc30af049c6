//! Service trait for shared record collections

use crate::core::entity::{Record, RecordId};
use crate::core::query::ListQuery;
use anyhow::Result;
use async_trait::async_trait;

/// Service trait for managing the records of one screen
///
/// Implementations provide CRUD operations for a specific record type.
/// The dashboard is agnostic to where the records live.
#[async_trait]
pub trait DataService<T: Record>: Send + Sync {
    /// Create a new record; the service assigns its id
    async fn create(&self, record: T) -> Result<T>;

    /// Get a record by ID
    async fn get(&self, id: RecordId) -> Result<Option<T>>;

    /// List all records in collection order
    async fn list(&self) -> Result<Vec<T>>;

    /// Replace an existing record's fields (the id is preserved)
    async fn update(&self, id: RecordId, record: T) -> Result<T>;

    /// Delete a record, returning it
    async fn delete(&self, id: RecordId) -> Result<T>;

    /// Records whose `field` displays exactly as `value`
    async fn search(&self, field: &str, value: &str) -> Result<Vec<T>>;

    /// Search, filter and sort the records
    async fn query(&self, query: &ListQuery) -> Result<Vec<T>>;
}
