//! Insertion-ordered record collection owned by a screen
//!
//! This is "the database" of one dashboard screen: records live in the order
//! they were added, ids are unique, and every mutation is synchronous.

use crate::core::entity::{Record, RecordId};
use crate::core::error::CatalogError;
use crate::core::filter::list_filter_sort;
use crate::core::query::ListQuery;
use crate::core::validation::Validate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How a collection assigns ids to new records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// One more than the largest id in the collection
    #[default]
    Sequence,
    /// Current Unix time in milliseconds, bumped past the largest id on collision
    Timestamp,
}

impl IdStrategy {
    /// Next free id given the largest id currently in use
    ///
    /// Returns `None` once the largest id is `u64::MAX`.
    pub fn next_id(self, max_existing: Option<RecordId>) -> Option<RecordId> {
        let after_max = match max_existing {
            Some(max) => max.next()?,
            None => RecordId(1),
        };
        match self {
            IdStrategy::Sequence => Some(after_max),
            IdStrategy::Timestamp => {
                let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
                Some(after_max.max(RecordId(now)))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: IndexMap<RecordId, T>,
    strategy: IdStrategy,
}

impl<T: Record + Validate> Default for Collection<T> {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

impl<T: Record + Validate> Collection<T> {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            records: IndexMap::new(),
            strategy,
        }
    }

    /// Build a collection from existing records, keeping their ids and order
    pub fn with_records(
        strategy: IdStrategy,
        records: impl IntoIterator<Item = T>,
    ) -> Result<Self, CatalogError> {
        let mut collection = Self::new(strategy);
        for record in records {
            collection.insert(record)?;
        }
        Ok(collection)
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }

    /// The id the next `create` would assign, `None` when ids are exhausted
    pub fn next_id(&self) -> Option<RecordId> {
        self.strategy.next_id(self.records.keys().max().copied())
    }

    /// Add a new record, assigning it a fresh id
    pub fn create(&mut self, mut record: T) -> Result<T, CatalogError> {
        record.normalize();
        record.validate()?;

        let id = self.next_id().ok_or_else(|| {
            CatalogError::Internal(format!("no {} ids left", T::resource_name_singular()))
        })?;
        record.set_id(id);
        self.records.insert(id, record.clone());

        tracing::debug!(resource = T::resource_name_singular(), %id, "created record");
        Ok(record)
    }

    /// Add a record under the id it already carries
    pub fn insert(&mut self, mut record: T) -> Result<T, CatalogError> {
        let id = record.id();
        if self.contains(id) {
            return Err(CatalogError::AlreadyExists {
                resource: T::resource_name_singular(),
                id,
            });
        }

        record.normalize();
        record.validate()?;
        self.records.insert(id, record.clone());
        Ok(record)
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.get(&id)
    }

    /// Iterate records in collection order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    /// Snapshot of all records in collection order
    pub fn list(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    /// Replace a record's fields; its id and position are preserved
    pub fn update(&mut self, id: RecordId, mut record: T) -> Result<T, CatalogError> {
        let slot = self.records.get_mut(&id).ok_or(CatalogError::NotFound {
            resource: T::resource_name_singular(),
            id,
        })?;

        record.set_id(id);
        record.normalize();
        record.validate()?;
        *slot = record.clone();

        tracing::debug!(resource = T::resource_name_singular(), %id, "updated record");
        Ok(record)
    }

    /// Edit a record in place
    ///
    /// The edit is applied to a copy; if the result fails validation the
    /// stored record is left untouched. The id cannot be changed.
    pub fn modify<F>(&mut self, id: RecordId, edit: F) -> Result<T, CatalogError>
    where
        F: FnOnce(&mut T),
    {
        let current = self.get(id).cloned().ok_or(CatalogError::NotFound {
            resource: T::resource_name_singular(),
            id,
        })?;

        let mut edited = current;
        edit(&mut edited);
        self.update(id, edited)
    }

    /// Remove a record; the remaining records keep their order
    pub fn delete(&mut self, id: RecordId) -> Result<T, CatalogError> {
        let removed = self
            .records
            .shift_remove(&id)
            .ok_or(CatalogError::NotFound {
                resource: T::resource_name_singular(),
                id,
            })?;

        tracing::debug!(resource = T::resource_name_singular(), %id, "deleted record");
        Ok(removed)
    }

    /// Records whose `field` displays exactly as `value`
    pub fn search(&self, field: &str, value: &str) -> Vec<T> {
        self.records
            .values()
            .filter(|record| {
                record
                    .field_value(field)
                    .is_some_and(|v| !v.is_null() && v.to_string() == value)
            })
            .cloned()
            .collect()
    }

    /// The derived table view for `query`
    pub fn view(&self, query: &ListQuery) -> Vec<T> {
        list_filter_sort(&self.list(), query)
    }
}
