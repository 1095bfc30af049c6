//! Filter, sort and pagination parameters

use crate::core::field::FieldValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Default number of rows per table page
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Upper bound on rows per table page
pub const MAX_PAGE_SIZE: usize = 100;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction '{}'", other)),
        }
    }
}

/// A single sort key: field + direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Composite sort specification, applied key by key ("price then name")
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortSpec(pub Vec<SortKey>);

impl SortSpec {
    pub fn new(keys: Vec<SortKey>) -> Self {
        Self(keys)
    }

    /// Single-key sort
    pub fn by(key: SortKey) -> Self {
        Self(vec![key])
    }

    /// Append a tie-break key
    pub fn then(mut self, key: SortKey) -> Self {
        self.0.push(key);
        self
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a sort expression
    ///
    /// # Format
    /// - `field:asc` or `field` (ascending)
    /// - `field:desc` (descending)
    /// - keys separated by commas: `price:asc,name:desc`
    ///
    /// Segments with an unknown direction are skipped.
    pub fn parse(expr: &str) -> Self {
        let keys = expr
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .filter_map(|segment| {
                let (field, direction) = match segment.split_once(':') {
                    Some((field, dir)) => (field.trim(), dir.parse::<SortDirection>().ok()?),
                    None => (segment, SortDirection::Ascending),
                };
                if field.is_empty() {
                    None
                } else {
                    Some(SortKey {
                        field: field.to_string(),
                        direction,
                    })
                }
            })
            .collect();
        Self(keys)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|key| match key.direction {
                SortDirection::Ascending => format!("{}:asc", key.field),
                SortDirection::Descending => format!("{}:desc", key.field),
            })
            .collect();
        write!(f, "{}", parts.join(","))
    }
}

/// A condition a single field must satisfy
#[derive(Debug, Clone, PartialEq)]
pub enum FilterCondition {
    /// Field equals the value exactly
    Equals(FieldValue),
    /// Field contains the text, case-insensitively
    Contains(String),
    Gt(FieldValue),
    Gte(FieldValue),
    Lt(FieldValue),
    Lte(FieldValue),
}

impl FilterCondition {
    /// Evaluate against a record's field value (`None` when the record has no such field)
    pub fn matches(&self, value: Option<&FieldValue>) -> bool {
        use std::cmp::Ordering;

        let Some(value) = value.filter(|v| !v.is_null()) else {
            return false;
        };

        match self {
            FilterCondition::Equals(expected) => value.equals(expected),
            FilterCondition::Contains(text) => value.contains_text(text),
            FilterCondition::Gt(bound) => value.compare(bound) == Some(Ordering::Greater),
            FilterCondition::Gte(bound) => matches!(
                value.compare(bound),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            FilterCondition::Lt(bound) => value.compare(bound) == Some(Ordering::Less),
            FilterCondition::Lte(bound) => matches!(
                value.compare(bound),
                Some(Ordering::Less | Ordering::Equal)
            ),
        }
    }
}

/// Active field-level constraints, combined with logical AND
///
/// Several conditions may target the same field (e.g. a price range).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    conditions: Vec<(String, FilterCondition)>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality constraint (builder style)
    pub fn equals(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.push(field, FilterCondition::Equals(value.into()));
        self
    }

    /// Add an arbitrary condition (builder style)
    pub fn with(mut self, field: impl Into<String>, condition: FilterCondition) -> Self {
        self.push(field, condition);
        self
    }

    pub fn push(&mut self, field: impl Into<String>, condition: FilterCondition) {
        self.conditions.push((field.into(), condition));
    }

    /// Drop every condition on `field`
    pub fn remove(&mut self, field: &str) {
        self.conditions.retain(|(f, _)| f != field);
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterCondition)> {
        self.conditions.iter().map(|(f, c)| (f.as_str(), c))
    }

    /// Build from a JSON object
    ///
    /// # Format
    /// - Exact match: `{"field": "value"}`
    /// - Comparison: `{"field>": value, "field<": value, "field>=": value, "field<=": value}`
    /// - Substring: `{"field~": "text"}`
    ///
    /// Empty strings and nulls mean "no constraint" (a cleared select).
    /// Non-scalar values are ignored.
    pub fn from_json(value: &Value) -> Self {
        let mut spec = Self::new();
        let Some(object) = value.as_object() else {
            return spec;
        };

        for (key, raw) in object {
            let Some(value) = FieldValue::from_json(raw) else {
                continue;
            };
            if value.is_null() || value.as_string().is_some_and(str::is_empty) {
                continue;
            }

            let (field, condition) = if let Some(field) = key.strip_suffix(">=") {
                (field, FilterCondition::Gte(value))
            } else if let Some(field) = key.strip_suffix("<=") {
                (field, FilterCondition::Lte(value))
            } else if let Some(field) = key.strip_suffix('>') {
                (field, FilterCondition::Gt(value))
            } else if let Some(field) = key.strip_suffix('<') {
                (field, FilterCondition::Lt(value))
            } else if let Some(field) = key.strip_suffix('~') {
                (field, FilterCondition::Contains(value.to_string()))
            } else {
                (key.as_str(), FilterCondition::Equals(value))
            };
            spec.push(field.trim(), condition);
        }
        spec
    }
}

/// Everything a table needs to derive its view from a collection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListQuery {
    /// Free-text search term; blank means no constraint
    pub search: Option<String>,
    pub filters: FilterSpec,
    pub sort: Option<SortSpec>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn filters(mut self, filters: FilterSpec) -> Self {
        self.filters = filters;
        self
    }

    pub fn sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// The search term as typed, unless it is blank
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .filter(|term| !term.trim().is_empty())
    }
}

/// Query parameters for pagination, search, filtering and sorting
///
/// This mirrors what a table's controls hold as raw strings.
///
/// # Example
/// ```rust,ignore
/// // ?page=2&limit=12&q=table&filter={"category":"Furniture"}&sort=price:desc
/// let query = params.to_list_query();
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct QueryParams {
    /// Page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Free-text search
    pub q: Option<String>,

    /// Filters as JSON object (see [`FilterSpec::from_json`])
    pub filter: Option<String>,

    /// Sort expression (see [`SortSpec::parse`])
    pub sort: Option<String>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            q: None,
            filter: None,
            sort: None,
        }
    }
}

impl QueryParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, ensuring it doesn't exceed the maximum
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }

    /// Parse filter JSON string into Value
    pub fn filter_value(&self) -> Option<Value> {
        self.filter
            .as_ref()
            .and_then(|s| serde_json::from_str(s).ok())
    }

    /// Build the list query; malformed filter JSON means no filters
    pub fn to_list_query(&self) -> ListQuery {
        ListQuery {
            search: self.q.clone(),
            filters: self
                .filter_value()
                .map(|v| FilterSpec::from_json(&v))
                .unwrap_or_default(),
            sort: self
                .sort
                .as_deref()
                .map(SortSpec::parse)
                .filter(|spec| !spec.is_empty()),
        }
    }
}

/// Paginated response structure
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    /// The rows of the current page
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        let start = (page - 1).saturating_mul(limit);

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start.saturating_add(limit) < total,
            has_prev: page > 1,
        }
    }

    /// Index range of the page within the filtered rows
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = (self.page - 1).saturating_mul(self.limit).min(self.total);
        let end = start.saturating_add(self.limit).min(self.total);
        start..end
    }
}
