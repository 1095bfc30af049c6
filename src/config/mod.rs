//! Configuration loading and management

use crate::core::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use crate::core::entity::Record;
use crate::core::error::CatalogError;
use crate::core::filter::DEFAULT_SUGGESTION_LIMIT;
use crate::core::filter_state::FilterDependencies;
use crate::core::query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, SortSpec};
use crate::core::table::TableState;
use crate::core::validation::Validate;
use crate::storage::collection::{Collection, IdStrategy};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

/// A filter that is only selectable once its parent filter has a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentFilter {
    /// Dependent field (e.g., "sub_category")
    pub field: String,

    /// Field it depends on (e.g., "category")
    pub parent: String,
}

/// Configuration for one dashboard screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Plural resource name of the screen's records (e.g., "products")
    pub resource: String,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u64,

    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Sort applied when the screen opens, e.g. `"price:asc,name:asc"`
    #[serde(default)]
    pub default_sort: Option<String>,

    #[serde(default)]
    pub dependent_filters: Vec<DependentFilter>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE.as_millis() as u64
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

impl ScreenConfig {
    /// A screen with default settings
    pub fn new(resource: impl Into<String>, id_strategy: IdStrategy) -> Self {
        Self {
            resource: resource.into(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: default_debounce_ms(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            id_strategy,
            default_sort: None,
            dependent_filters: Vec::new(),
        }
    }

    pub fn with_dependent_filter(
        mut self,
        field: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        self.dependent_filters.push(DependentFilter {
            field: field.into(),
            parent: parent.into(),
        });
        self
    }

    /// Check the screen's settings
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.resource.trim().is_empty() {
            return Err(CatalogError::Config("screen resource must not be empty".into()));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(CatalogError::Config(format!(
                "screen '{}': page_size must be between 1 and {} (got {})",
                self.resource, MAX_PAGE_SIZE, self.page_size
            )));
        }
        if self.suggestion_limit == 0 {
            return Err(CatalogError::Config(format!(
                "screen '{}': suggestion_limit must be at least 1",
                self.resource
            )));
        }
        self.dependencies()?;
        Ok(())
    }

    /// The dependent filter graph; fails on cycles and conflicting parents
    pub fn dependencies(&self) -> Result<FilterDependencies, CatalogError> {
        let mut dependencies = FilterDependencies::new();
        for dependent in &self.dependent_filters {
            dependencies
                .add(dependent.field.as_str(), dependent.parent.as_str())
                .map_err(|e| match e {
                    CatalogError::Config(msg) => {
                        CatalogError::Config(format!("screen '{}': {}", self.resource, msg))
                    }
                    other => other,
                })?;
        }
        Ok(dependencies)
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Fresh table state for this screen
    pub fn table_state(&self) -> Result<TableState, CatalogError> {
        let mut state = TableState::new(self.dependencies()?)
            .with_page_size(self.page_size)
            .with_suggestion_limit(self.suggestion_limit);

        if let Some(sort) = self.default_sort.as_deref() {
            let sort = SortSpec::parse(sort);
            if !sort.is_empty() {
                state.set_sort(sort);
            }
        }
        Ok(state)
    }

    /// Debouncer for the screen's search box
    pub fn debouncer<T>(&self) -> Debouncer<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        Debouncer::new(self.debounce_window())
    }

    /// Empty collection using the screen's id strategy
    pub fn collection<T: Record + Validate>(&self) -> Collection<T> {
        Collection::new(self.id_strategy)
    }
}

/// Complete configuration for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// List of screen configurations
    pub screens: Vec<ScreenConfig>,
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        tracing::debug!(screens = config.screens.len(), "loaded dashboard config");
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check every screen; resources must be unique
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for screen in &self.screens {
            screen.validate()?;
            if !seen.insert(screen.resource.as_str()) {
                return Err(CatalogError::Config(format!(
                    "screen '{}' is configured twice",
                    screen.resource
                )));
            }
        }
        Ok(())
    }

    /// Find a screen by resource name
    pub fn screen(&self, resource: &str) -> Option<&ScreenConfig> {
        self.screens.iter().find(|s| s.resource == resource)
    }

    /// The screen for record type `R`
    pub fn screen_for<R: Record>(&self) -> Result<&ScreenConfig, CatalogError> {
        self.screen(R::resource_name()).ok_or_else(|| {
            CatalogError::Config(format!("no screen configured for '{}'", R::resource_name()))
        })
    }

    /// The dashboard's screens with their usual settings
    pub fn default_config() -> Self {
        Self {
            screens: vec![
                ScreenConfig::new("categories", IdStrategy::Sequence),
                ScreenConfig::new("sub_categories", IdStrategy::Sequence),
                ScreenConfig::new("products", IdStrategy::Timestamp)
                    .with_dependent_filter("sub_category", "category"),
                ScreenConfig::new("colors", IdStrategy::Sequence),
                ScreenConfig::new("faqs", IdStrategy::Timestamp),
                ScreenConfig::new("packages", IdStrategy::Timestamp),
                ScreenConfig::new("orders", IdStrategy::Sequence),
            ],
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Color, Product};

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default_config();

        assert_eq!(config.screens.len(), 7);
        assert!(config.validate().is_ok());

        let products = config.screen("products").unwrap();
        assert_eq!(products.page_size, 12);
        assert_eq!(products.search_debounce_ms, 300);
        assert_eq!(products.suggestion_limit, 5);
        assert_eq!(products.id_strategy, IdStrategy::Timestamp);
    }

    #[test]
    fn test_screen_for_record_type() {
        let config = DashboardConfig::default_config();
        assert_eq!(config.screen_for::<Color>().unwrap().resource, "colors");

        let empty = DashboardConfig { screens: vec![] };
        assert!(empty.screen_for::<Product>().is_err());
    }

    #[test]
    fn test_yaml_defaults_applied() {
        let yaml = r#"
screens:
  - resource: products
    id_strategy: timestamp
    default_sort: "price:desc"
    dependent_filters:
      - field: sub_category
        parent: category
  - resource: colors
    page_size: 5
"#;

        let config = DashboardConfig::from_yaml_str(yaml).unwrap();
        let products = config.screen("products").unwrap();
        assert_eq!(products.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(products.id_strategy, IdStrategy::Timestamp);

        let state = products.table_state().unwrap();
        assert_eq!(state.sort().map(|s| s.to_string()), Some("price:desc".to_string()));
        assert_eq!(
            state.filters().dependencies().parent_of("sub_category"),
            Some("category")
        );

        let colors = config.screen("colors").unwrap();
        assert_eq!(colors.id_strategy, IdStrategy::Sequence);
        assert_eq!(colors.table_state().unwrap().page_size(), 5);
    }

    #[test]
    fn test_rejects_cycles() {
        let yaml = r#"
screens:
  - resource: products
    dependent_filters:
      - field: a
        parent: b
      - field: b
        parent: a
"#;
        let err = DashboardConfig::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("cycle"));
    }

    #[test]
    fn test_rejects_bad_page_size_and_duplicates() {
        let zero = r#"
screens:
  - resource: faqs
    page_size: 0
"#;
        assert!(DashboardConfig::from_yaml_str(zero).is_err());

        let twice = r#"
screens:
  - resource: faqs
  - resource: faqs
"#;
        assert!(DashboardConfig::from_yaml_str(twice).is_err());
    }

    #[test]
    fn test_debouncer_and_collection_follow_screen() {
        let screen = ScreenConfig::new("colors", IdStrategy::Sequence);
        let debouncer: Debouncer<String> = screen.debouncer();
        assert_eq!(debouncer.window(), Duration::from_millis(300));

        let colors: Collection<Color> = screen.collection();
        assert!(colors.is_empty());
        assert_eq!(colors.strategy(), IdStrategy::Sequence);
    }
}
