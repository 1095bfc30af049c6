//! Core module containing the record abstraction and the list view pipeline

pub mod debounce;
pub mod entity;
pub mod error;
pub mod field;
pub mod filter;
pub mod filter_state;
pub mod query;
pub mod service;
pub mod table;
pub mod validation;

pub use debounce::Debouncer;
pub use entity::{Record, RecordId};
pub use error::{CatalogError, ValidationError};
pub use field::{FieldFormat, FieldValue, ToFieldValue};
pub use filter::list_filter_sort;
pub use filter_state::{FilterDependencies, FilterState};
pub use query::{
    FilterCondition, FilterSpec, ListQuery, PaginatedResponse, PaginationMeta, QueryParams,
    SortDirection, SortKey, SortSpec,
};
pub use service::DataService;
pub use table::TableState;
pub use validation::Validate;
