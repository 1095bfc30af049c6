//! Shared test harness for record storage testing
//!
//! Provides `TestItem`, a record with fields covering every `FieldValue`
//! variant, and helper functions for creating test data.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod data_service_tests;

use catalog::core::error::ValidationError;
use catalog::core::field::ToFieldValue;
use catalog::core::validation::{Validate, check, validators};
use chrono::{DateTime, Duration, TimeZone, Utc};

// ---------------------------------------------------------------------------
// TestItem: covers all FieldValue variants for thorough testing
// ---------------------------------------------------------------------------

catalog::impl_record!(
    TestItem,
    "test_item",
    "test_items",
    search: ["name", "email"],
    {
        name: String,
        email: String,
        age: i64,
        score: f64,
        active: bool,
        category: Option<String>,
        created_at: DateTime<Utc>,
    }
);

impl Validate for TestItem {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        check(&mut errors, "name", &self.name.to_field_value(), validators::required());
        check(&mut errors, "age", &self.age.to_field_value(), validators::non_negative());
        errors.into_result()
    }
}

// ---------------------------------------------------------------------------
// Helper functions: TestItem creation
// ---------------------------------------------------------------------------

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .expect("valid base time")
}

/// Create a `TestItem` with sensible defaults; its id is assigned on create.
pub fn create_test_item(name: &str, email: &str, age: i64, score: f64, active: bool) -> TestItem {
    TestItem::new(
        name.to_string(),
        email.to_string(),
        age,
        score,
        active,
        None,
        base_time(),
    )
}

/// Generate a batch of `n` diverse test items with varied field values.
///
/// Names are unique; ages cycle through 20..=29, every third item is
/// inactive, categories alternate between "a" and "b" and creation times
/// increase by one hour per item.
pub fn sample_batch(n: usize) -> Vec<TestItem> {
    (0..n)
        .map(|i| {
            let mut item = create_test_item(
                &format!("Item_{:03}", i),
                &format!("item{}@test.com", i),
                20 + (i % 10) as i64,
                (i as f64) * 1.5,
                i % 3 != 0,
            );
            item.category = Some(if i % 2 == 0 { "a" } else { "b" }.to_string());
            item.created_at = base_time() + Duration::hours(i as i64);
            item
        })
        .collect()
}
