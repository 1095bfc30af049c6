//! Categorical filter state with dependent filters
//!
//! A dependent filter (e.g. `sub_category`) only makes sense under the
//! current value of its parent (`category`). Whenever a parent changes, every
//! filter depending on it, directly or transitively, is cleared so the state
//! never holds an impossible combination.

use crate::core::entity::Record;
use crate::core::error::CatalogError;
use crate::core::field::FieldValue;
use crate::core::filter::distinct_values;
use crate::core::query::{FilterCondition, FilterSpec};
use indexmap::IndexMap;

/// Child field -> parent field relationships between filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterDependencies {
    parents: IndexMap<String, String>,
}

impl FilterDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that `field` depends on `parent`
    ///
    /// Fails when the declaration would create a cycle or when `field`
    /// already has a different parent.
    pub fn add(
        &mut self,
        field: impl Into<String>,
        parent: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let field = field.into();
        let parent = parent.into();

        if let Some(existing) = self.parents.get(&field) {
            if existing == &parent {
                return Ok(());
            }
            return Err(CatalogError::Config(format!(
                "filter '{}' already depends on '{}'",
                field, existing
            )));
        }

        let mut cursor = Some(parent.as_str());
        while let Some(current) = cursor {
            if current == field {
                return Err(CatalogError::Config(format!(
                    "filter dependency '{}' -> '{}' creates a cycle",
                    field, parent
                )));
            }
            cursor = self.parent_of(current);
        }

        self.parents.insert(field, parent);
        Ok(())
    }

    /// Builder form of [`add`](Self::add)
    pub fn with(
        mut self,
        field: impl Into<String>,
        parent: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        self.add(field, parent)?;
        Ok(self)
    }

    pub fn parent_of(&self, field: &str) -> Option<&str> {
        self.parents.get(field).map(String::as_str)
    }

    /// Every field depending on `field`, directly or transitively
    pub fn dependents_of(&self, field: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        let mut frontier = vec![field.to_string()];

        while let Some(current) = frontier.pop() {
            for (child, parent) in &self.parents {
                if parent == &current && !found.contains(child) {
                    found.push(child.clone());
                    frontier.push(child.clone());
                }
            }
        }
        found
    }

    /// The chain of parents above `field`, nearest first
    pub fn ancestors_of(&self, field: &str) -> Vec<String> {
        let mut ancestors = Vec::new();
        let mut cursor = self.parent_of(field);
        while let Some(parent) = cursor {
            ancestors.push(parent.to_string());
            cursor = self.parent_of(parent);
        }
        ancestors
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Current values of a table's select filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    values: IndexMap<String, FieldValue>,
    dependencies: FilterDependencies,
}

impl FilterState {
    pub fn new(dependencies: FilterDependencies) -> Self {
        Self {
            values: IndexMap::new(),
            dependencies,
        }
    }

    pub fn dependencies(&self) -> &FilterDependencies {
        &self.dependencies
    }

    /// Set a filter value, clearing dependents when the value changes
    ///
    /// A null or empty-string value clears the filter. Returns the dependent
    /// fields that were cleared.
    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) -> Vec<String> {
        let value = value.into();
        if value.is_null() || value.as_string().is_some_and(str::is_empty) {
            return self.clear(field);
        }

        if self.values.get(field) == Some(&value) {
            return Vec::new();
        }

        self.values.insert(field.to_string(), value);
        self.clear_dependents(field)
    }

    /// Remove a filter value and every dependent value
    pub fn clear(&mut self, field: &str) -> Vec<String> {
        let mut cleared = Vec::new();
        if self.values.shift_remove(field).is_some() {
            cleared.push(field.to_string());
        }
        cleared.extend(self.clear_dependents(field));
        cleared
    }

    fn clear_dependents(&mut self, field: &str) -> Vec<String> {
        let cleared: Vec<String> = self
            .dependencies
            .dependents_of(field)
            .into_iter()
            .filter(|child| self.values.shift_remove(child).is_some())
            .collect();

        if !cleared.is_empty() {
            tracing::debug!(parent = field, cleared = ?cleared, "cleared dependent filters");
        }
        cleared
    }

    /// Remove every filter value
    pub fn reset(&mut self) {
        self.values.clear();
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A dependent filter is selectable only once its parent has a value
    pub fn is_enabled(&self, field: &str) -> bool {
        self.dependencies
            .parent_of(field)
            .is_none_or(|parent| self.values.contains_key(parent))
    }

    /// Values `field` can take under the current ancestor selections
    ///
    /// For a dependent field with no parent value this is empty, matching a
    /// disabled select.
    pub fn options<R: Record>(&self, records: &[R], field: &str) -> Vec<FieldValue> {
        if !self.is_enabled(field) {
            return Vec::new();
        }

        let ancestors = self.dependencies.ancestors_of(field);
        let constraint = ancestors
            .iter()
            .filter_map(|ancestor| {
                self.values
                    .get(ancestor)
                    .map(|value| (ancestor.clone(), FilterCondition::Equals(value.clone())))
            })
            .fold(FilterSpec::new(), |spec, (ancestor, condition)| {
                spec.with(ancestor, condition)
            });

        let scoped: Vec<R> = records
            .iter()
            .filter(|record| crate::core::filter::matches_filters(*record, &constraint))
            .cloned()
            .collect();
        distinct_values(&scoped, field)
    }

    /// Equality conditions for every set filter
    pub fn to_filter_spec(&self) -> FilterSpec {
        self.values
            .iter()
            .fold(FilterSpec::new(), |spec, (field, value)| {
                spec.equals(field.clone(), value.clone())
            })
    }
}
