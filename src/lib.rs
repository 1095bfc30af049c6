//! # Admin Catalog
//!
//! The data core of an administrative catalog dashboard: category,
//! sub-category, product, color, subscription package, FAQ and order screens.
//!
//! ## Features
//!
//! - **Record Abstraction**: one `Record` trait with macro-based implementation
//! - **List Filter Sort**: search, categorical filters and composite sorts over a collection
//! - **Dependent Filters**: changing a parent filter clears its dependents
//! - **Table State**: search text, filters, sort and page of one screen
//! - **Debounced Search**: only the settled search text is published
//! - **Configuration-Based**: screen settings via YAML configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog::prelude::*;
//! use catalog::entities::seed;
//!
//! let products = Collection::with_records(IdStrategy::Timestamp, seed::products())?;
//!
//! let mut table = TableState::new(FilterDependencies::new().with("sub_category", "category")?);
//! table.set_filter("category", "Electronics");
//! table.set_sort(SortSpec::parse("price:desc"));
//!
//! let page = table.render(&products.list());
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        debounce::Debouncer,
        entity::{Record, RecordId},
        error::{CatalogError, ValidationError},
        field::{FieldFormat, FieldValue, ToFieldValue},
        filter::{apply_filters, apply_sort, list_filter_sort, paginate, search_suggestions},
        filter_state::{FilterDependencies, FilterState},
        query::{
            FilterCondition, FilterSpec, ListQuery, PaginatedResponse, PaginationMeta,
            QueryParams, SortDirection, SortKey, SortSpec,
        },
        service::DataService,
        table::TableState,
        validation::Validate,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Records ===
    pub use crate::entities::{
        Category, Color, Faq, Order, OrderStatus, Package, Product, SubCategory, Variant,
    };

    // === Storage ===
    pub use crate::storage::{Collection, IdStrategy, InMemoryDataService};

    // === Config ===
    pub use crate::config::{DashboardConfig, DependentFilter, ScreenConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
