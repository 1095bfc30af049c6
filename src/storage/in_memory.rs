//! In-memory implementation of DataService shared between tasks

use crate::core::entity::{Record, RecordId};
use crate::core::error::CatalogError;
use crate::core::query::ListQuery;
use crate::core::service::DataService;
use crate::core::validation::Validate;
use crate::storage::collection::{Collection, IdStrategy};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory data service implementation
///
/// Wraps a [`Collection`] behind an `RwLock` so several tasks can hold the
/// same screen's records.
#[derive(Clone)]
pub struct InMemoryDataService<T> {
    collection: Arc<RwLock<Collection<T>>>,
}

impl<T: Record + Validate> InMemoryDataService<T> {
    /// Create an empty service using sequential ids
    pub fn new() -> Self {
        Self::with_strategy(IdStrategy::Sequence)
    }

    pub fn with_strategy(strategy: IdStrategy) -> Self {
        Self::from_collection(Collection::new(strategy))
    }

    pub fn from_collection(collection: Collection<T>) -> Self {
        Self {
            collection: Arc::new(RwLock::new(collection)),
        }
    }

    /// Snapshot of the underlying collection
    pub fn snapshot(&self) -> Result<Collection<T>> {
        let collection = self
            .collection
            .read()
            .map_err(|e| CatalogError::Internal(format!("Failed to acquire read lock: {}", e)))?;
        Ok(collection.clone())
    }
}

impl<T: Record + Validate> Default for InMemoryDataService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record + Validate> DataService<T> for InMemoryDataService<T> {
    async fn create(&self, record: T) -> Result<T> {
        let mut collection = self
            .collection
            .write()
            .map_err(|e| CatalogError::Internal(format!("Failed to acquire write lock: {}", e)))?;

        Ok(collection.create(record)?)
    }

    async fn get(&self, id: RecordId) -> Result<Option<T>> {
        let collection = self
            .collection
            .read()
            .map_err(|e| CatalogError::Internal(format!("Failed to acquire read lock: {}", e)))?;

        Ok(collection.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let collection = self
            .collection
            .read()
            .map_err(|e| CatalogError::Internal(format!("Failed to acquire read lock: {}", e)))?;

        Ok(collection.list())
    }

    async fn update(&self, id: RecordId, record: T) -> Result<T> {
        let mut collection = self
            .collection
            .write()
            .map_err(|e| CatalogError::Internal(format!("Failed to acquire write lock: {}", e)))?;

        Ok(collection.update(id, record)?)
    }

    async fn delete(&self, id: RecordId) -> Result<T> {
        let mut collection = self
            .collection
            .write()
            .map_err(|e| CatalogError::Internal(format!("Failed to acquire write lock: {}", e)))?;

        Ok(collection.delete(id)?)
    }

    async fn search(&self, field: &str, value: &str) -> Result<Vec<T>> {
        let collection = self
            .collection
            .read()
            .map_err(|e| CatalogError::Internal(format!("Failed to acquire read lock: {}", e)))?;

        Ok(collection.search(field, value))
    }

    async fn query(&self, query: &ListQuery) -> Result<Vec<T>> {
        let collection = self
            .collection
            .read()
            .map_err(|e| CatalogError::Internal(format!("Failed to acquire read lock: {}", e)))?;

        Ok(collection.view(query))
    }
}
