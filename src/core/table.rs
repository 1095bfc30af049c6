//! Per-screen table state
//!
//! `TableState` holds what the controls above a table hold: the search text,
//! the select filters, the sort and the current page. The rendered page is
//! recomputed from scratch from the collection on every call.

use crate::core::entity::Record;
use crate::core::field::FieldValue;
use crate::core::filter::{DEFAULT_SUGGESTION_LIMIT, list_filter_sort, paginate, search_suggestions};
use crate::core::filter_state::{FilterDependencies, FilterState};
use crate::core::query::{DEFAULT_PAGE_SIZE, ListQuery, MAX_PAGE_SIZE, PaginatedResponse, SortSpec};

#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    search: String,
    filters: FilterState,
    sort: Option<SortSpec>,
    page: usize,
    page_size: usize,
    suggestion_limit: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(FilterDependencies::new())
    }
}

impl TableState {
    pub fn new(dependencies: FilterDependencies) -> Self {
        Self {
            search: String::new(),
            filters: FilterState::new(dependencies),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    /// Set a select filter; returns the dependent filters that were cleared
    pub fn set_filter(&mut self, field: &str, value: impl Into<FieldValue>) -> Vec<String> {
        self.page = 1;
        self.filters.set(field, value)
    }

    pub fn clear_filter(&mut self, field: &str) -> Vec<String> {
        self.page = 1;
        self.filters.clear(field)
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = if sort.is_empty() { None } else { Some(sort) };
        self.page = 1;
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Back to an unfiltered, unsorted first page
    pub fn reset(&mut self) {
        self.search.clear();
        self.filters.reset();
        self.sort = None;
        self.page = 1;
    }

    /// The query the current controls describe
    pub fn query(&self) -> ListQuery {
        ListQuery {
            search: Some(self.search.clone()).filter(|s| !s.trim().is_empty()),
            filters: self.filters.to_filter_spec(),
            sort: self.sort.clone(),
        }
    }

    /// Full filtered and sorted view, without pagination
    pub fn view<R: Record>(&self, records: &[R]) -> Vec<R> {
        list_filter_sort(records, &self.query())
    }

    /// The current page of the view
    pub fn render<R: Record>(&self, records: &[R]) -> PaginatedResponse<R> {
        paginate(self.view(records), self.page, self.page_size)
    }

    /// Suggestions for the current search text
    pub fn suggestions<R: Record>(&self, records: &[R]) -> Vec<String> {
        search_suggestions(records, &self.search, self.suggestion_limit)
    }

    /// Options for a select filter under the current selections
    pub fn options<R: Record>(&self, records: &[R], field: &str) -> Vec<FieldValue> {
        self.filters.options(records, field)
    }
}
