//! ListFilterSort: the filtered, ordered view a table renders
//!
//! Every function here is pure. The source records are only read; results are
//! new vectors. Filter and sort keys a record type does not index are ignored.

use crate::core::entity::Record;
use crate::core::field::FieldValue;
use crate::core::query::{
    FilterSpec, ListQuery, PaginatedResponse, PaginationMeta, SortDirection, SortSpec,
};
use std::cmp::Ordering;

/// Default number of search suggestions offered under the search box
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Produce the view for `query`: search, then filters, then sort
///
/// Without a sort spec the output keeps the input order. Sorting is stable,
/// so records with equal keys also keep their input order.
pub fn list_filter_sort<R: Record>(records: &[R], query: &ListQuery) -> Vec<R> {
    warn_ignored_filters::<R>(&query.filters);

    let matched: Vec<R> = records
        .iter()
        .filter(|record| matches(*record, query))
        .cloned()
        .collect();

    let view = match &query.sort {
        Some(sort) if !sort.is_empty() => apply_sort(matched, sort),
        _ => matched,
    };

    tracing::debug!(
        resource = R::resource_name(),
        total = records.len(),
        matched = view.len(),
        "recomputed list view"
    );
    view
}

/// Whether a record satisfies the search term and every filter
pub fn matches<R: Record>(record: &R, query: &ListQuery) -> bool {
    let search_ok = query
        .search_term()
        .is_none_or(|term| matches_search(record, term));
    search_ok && matches_filters(record, &query.filters)
}

/// Case-insensitive substring match on any of the record's search fields
pub fn matches_search<R: Record>(record: &R, term: &str) -> bool {
    R::search_fields().iter().any(|field| {
        record
            .field_value(field)
            .is_some_and(|value| value.contains_text(term))
    })
}

/// Conjunction of all filter conditions on indexed fields
pub fn matches_filters<R: Record>(record: &R, filters: &FilterSpec) -> bool {
    filters
        .iter()
        .filter(|(field, _)| R::is_indexed(field))
        .all(|(field, condition)| condition.matches(record.field_value(field).as_ref()))
}

/// Keep the records matching `filters`, in order
pub fn apply_filters<R: Record>(records: Vec<R>, filters: &FilterSpec) -> Vec<R> {
    warn_ignored_filters::<R>(filters);

    records
        .into_iter()
        .filter(|record| matches_filters(record, filters))
        .collect()
}

fn warn_ignored_filters<R: Record>(filters: &FilterSpec) {
    for (field, _) in filters.iter().filter(|(field, _)| !R::is_indexed(field)) {
        tracing::warn!(
            resource = R::resource_name(),
            field,
            "ignoring filter on unknown field"
        );
    }
}

/// Stable sort by the indexed keys of `sort`
pub fn apply_sort<R: Record>(records: Vec<R>, sort: &SortSpec) -> Vec<R> {
    let keys: Vec<_> = sort
        .keys()
        .iter()
        .filter(|key| {
            let known = R::is_indexed(&key.field);
            if !known {
                tracing::warn!(
                    resource = R::resource_name(),
                    field = %key.field,
                    "ignoring sort on unknown field"
                );
            }
            known
        })
        .collect();

    if keys.is_empty() {
        return records;
    }

    let mut keyed: Vec<(Vec<Option<FieldValue>>, R)> = records
        .into_iter()
        .map(|record| {
            let values = keys
                .iter()
                .map(|key| record.field_value(&key.field))
                .collect();
            (values, record)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        keys.iter()
            .zip(a.iter().zip(b.iter()))
            .map(|(key, (x, y))| compare_sort_values(x.as_ref(), y.as_ref(), key.direction))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });

    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Rank of a value's kind; values of different kinds never interleave
fn kind_rank(value: Option<&FieldValue>) -> Option<u8> {
    match value? {
        FieldValue::Integer(_) => Some(0),
        FieldValue::Float(f) if !f.is_nan() => Some(0),
        FieldValue::DateTime(_) => Some(1),
        FieldValue::Boolean(_) => Some(2),
        FieldValue::String(_) => Some(3),
        FieldValue::Float(_) | FieldValue::Null => None,
    }
}

/// Total order used for sorting one key
///
/// Missing, null and NaN values cannot be ordered: they go after every
/// orderable value, in input order, whatever the direction.
fn compare_sort_values(
    a: Option<&FieldValue>,
    b: Option<&FieldValue>,
    direction: SortDirection,
) -> Ordering {
    let (rank_a, rank_b) = match (kind_rank(a), kind_rank(b)) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
        (Some(x), Some(y)) => (x, y),
    };

    let ordering = rank_a.cmp(&rank_b).then_with(|| match (a, b) {
        (Some(FieldValue::Integer(x)), Some(FieldValue::Integer(y))) => x.cmp(y),
        (Some(x), Some(y)) if rank_a == 0 => {
            let x = x.as_f64().unwrap_or_default();
            let y = y.as_f64().unwrap_or_default();
            x.total_cmp(&y)
        }
        (Some(x), Some(y)) => x.compare(y).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    });

    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Labels of records whose search fields contain `text`, for the search box
///
/// Returns at most `limit` distinct labels, in record order. Blank text
/// yields no suggestions.
pub fn search_suggestions<R: Record>(records: &[R], text: &str, limit: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut suggestions: Vec<String> = Vec::new();
    for record in records.iter().filter(|r| matches_search(*r, text)) {
        if suggestions.len() >= limit {
            break;
        }
        let label = record.label();
        if !suggestions.contains(&label) {
            suggestions.push(label);
        }
    }
    suggestions
}

/// Distinct non-null values of `field`, in first-seen order
pub fn distinct_values<R: Record>(records: &[R], field: &str) -> Vec<FieldValue> {
    let mut values: Vec<FieldValue> = Vec::new();
    for value in records
        .iter()
        .filter_map(|record| record.field_value(field))
        .filter(|value| !value.is_null())
    {
        if !values.iter().any(|seen| seen == &value) {
            values.push(value);
        }
    }
    values
}

/// Cut one page out of an already derived view
pub fn paginate<T>(rows: Vec<T>, page: usize, limit: usize) -> PaginatedResponse<T> {
    let pagination = PaginationMeta::new(page, limit, rows.len());
    let range = pagination.range();
    let data = rows
        .into_iter()
        .skip(range.start)
        .take(range.len())
        .collect();

    PaginatedResponse { data, pagination }
}
