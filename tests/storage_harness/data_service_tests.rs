//! Macro-generated test suite for `DataService<TestItem>` contract validation.
//!
//! The `data_service_tests!` macro generates a test module that validates any
//! `DataService<TestItem>` implementation against the full contract: CRUD
//! operations, id assignment, exact-value search across `FieldValue`
//! variants, list queries, validation and concurrent access.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use catalog::storage::InMemoryDataService;
//!
//! data_service_tests!(InMemoryDataService::<TestItem>::new());
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_create_assigns_id_and_get`: create then retrieve, verify all fields
//! - `test_get_nonexistent`: unknown id returns None
//! - `test_list_empty` / `test_list_keeps_creation_order`
//! - `test_update_existing` / `test_update_nonexistent` / `test_update_invalid_keeps_original`
//! - `test_delete_existing` / `test_delete_nonexistent` / `test_delete_keeps_order`
//! - `test_create_invalid_rejected`
//!
//! ## Search
//! - string, integer, float, boolean fields; no results; unknown field
//!
//! ## Query
//! - `test_query_search_filter_sort`: the list view through the service
//!
//! ## Edge Cases
//! - `test_ids_unique`: ids never collide across creates and deletes
//! - `test_concurrent_access`: parallel creates from spawned tasks

/// Generate a full `DataService<TestItem>` conformance test suite.
///
/// `$factory` must be an expression that evaluates to an empty service
/// implementing `DataService<TestItem>`. It is re-evaluated for each test to
/// ensure isolation. For the concurrent access test, the returned service
/// must also implement `Clone + 'static` (shared state via Arc pattern).
#[macro_export]
macro_rules! data_service_tests {
    ($factory:expr) => {
        mod data_service_contract_tests {
            use super::*;
            use catalog::core::entity::{Record, RecordId};
            use catalog::core::query::{FilterSpec, ListQuery, SortSpec};
            use catalog::core::service::DataService;
            use std::collections::HashSet;

            // ==================================================================
            // CRUD: Create & Get
            // ==================================================================

            #[tokio::test]
            async fn test_create_assigns_id_and_get() {
                let service = $factory;
                let item = create_test_item("Alice", "alice@test.com", 30, 4.5, true);

                let created = service.create(item).await.unwrap();
                assert_ne!(created.id(), RecordId::default(), "create must assign an id");
                assert_eq!(created.name, "Alice");
                assert_eq!(created.email, "alice@test.com");
                assert_eq!(created.age, 30);
                assert!((created.score - 4.5).abs() < f64::EPSILON);
                assert!(created.active);

                let retrieved = service.get(created.id()).await.unwrap();
                assert_eq!(retrieved, Some(created));
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let service = $factory;
                let result = service.get(RecordId(424_242)).await.unwrap();
                assert!(result.is_none(), "Getting a nonexistent record should return None");
            }

            // ==================================================================
            // CRUD: List
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty() {
                let service = $factory;
                assert!(service.list().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_list_keeps_creation_order() {
                let service = $factory;
                for item in sample_batch(5) {
                    service.create(item).await.unwrap();
                }

                let names: Vec<String> =
                    service.list().await.unwrap().into_iter().map(|i| i.name).collect();
                assert_eq!(
                    names,
                    vec!["Item_000", "Item_001", "Item_002", "Item_003", "Item_004"]
                );
            }

            // ==================================================================
            // CRUD: Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_existing() {
                let service = $factory;
                let first = service
                    .create(create_test_item("Before", "b@test.com", 25, 1.0, true))
                    .await
                    .unwrap();
                service
                    .create(create_test_item("Other", "o@test.com", 26, 2.0, true))
                    .await
                    .unwrap();

                let mut changed = first.clone();
                changed.name = "After".to_string();
                changed.id = RecordId(999_999);
                let updated = service.update(first.id(), changed).await.unwrap();

                assert_eq!(updated.id(), first.id(), "update must preserve the id");
                assert_eq!(updated.name, "After");

                let all = service.list().await.unwrap();
                assert_eq!(all[0].name, "After", "update must preserve the position");
                assert!(service.get(RecordId(999_999)).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let service = $factory;
                let item = create_test_item("Ghost", "g@test.com", 1, 0.0, false);
                assert!(service.update(RecordId(77), item).await.is_err());
            }

            #[tokio::test]
            async fn test_update_invalid_keeps_original() {
                let service = $factory;
                let created = service
                    .create(create_test_item("Valid", "v@test.com", 40, 1.0, true))
                    .await
                    .unwrap();

                let mut invalid = created.clone();
                invalid.name = "   ".to_string();
                assert!(service.update(created.id(), invalid).await.is_err());

                let stored = service.get(created.id()).await.unwrap().unwrap();
                assert_eq!(stored.name, "Valid");
            }

            // ==================================================================
            // CRUD: Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let service = $factory;
                let created = service
                    .create(create_test_item("Doomed", "d@test.com", 50, 0.0, false))
                    .await
                    .unwrap();

                let deleted = service.delete(created.id()).await.unwrap();
                assert_eq!(deleted, created);
                assert!(service.get(created.id()).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let service = $factory;
                assert!(service.delete(RecordId(31_337)).await.is_err());
            }

            #[tokio::test]
            async fn test_delete_keeps_order() {
                let service = $factory;
                let mut ids = Vec::new();
                for item in sample_batch(4) {
                    ids.push(service.create(item).await.unwrap().id());
                }

                service.delete(ids[1]).await.unwrap();

                let remaining: Vec<RecordId> =
                    service.list().await.unwrap().iter().map(|i| i.id()).collect();
                assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);
            }

            #[tokio::test]
            async fn test_create_invalid_rejected() {
                let service = $factory;
                let err = service
                    .create(create_test_item("", "nobody@test.com", 1, 0.0, true))
                    .await
                    .unwrap_err();
                assert!(err.to_string().contains("name"), "unexpected error: {}", err);
                assert!(service.list().await.unwrap().is_empty());
            }

            // ==================================================================
            // Search: exact display value per FieldValue variant
            // ==================================================================

            #[tokio::test]
            async fn test_search_string_field() {
                let service = $factory;
                for item in sample_batch(5) {
                    service.create(item).await.unwrap();
                }

                let found = service.search("email", "item3@test.com").await.unwrap();
                assert_eq!(found.len(), 1);
                assert_eq!(found[0].name, "Item_003");
            }

            #[tokio::test]
            async fn test_search_integer_field() {
                let service = $factory;
                for item in sample_batch(12) {
                    service.create(item).await.unwrap();
                }

                // ages cycle 20..=29: items 1 and 11 are 21
                let found = service.search("age", "21").await.unwrap();
                assert_eq!(found.len(), 2);
            }

            #[tokio::test]
            async fn test_search_float_field() {
                let service = $factory;
                for item in sample_batch(5) {
                    service.create(item).await.unwrap();
                }

                let found = service.search("score", "4.5").await.unwrap();
                assert_eq!(found.len(), 1);
                assert_eq!(found[0].name, "Item_003");
            }

            #[tokio::test]
            async fn test_search_boolean_field() {
                let service = $factory;
                for item in sample_batch(6) {
                    service.create(item).await.unwrap();
                }

                // every third item (0 and 3) is inactive
                let inactive = service.search("active", "false").await.unwrap();
                assert_eq!(inactive.len(), 2);
                let active = service.search("active", "true").await.unwrap();
                assert_eq!(active.len(), 4);
            }

            #[tokio::test]
            async fn test_search_no_results() {
                let service = $factory;
                for item in sample_batch(3) {
                    service.create(item).await.unwrap();
                }
                assert!(service.search("name", "Nobody").await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_search_unknown_field() {
                let service = $factory;
                for item in sample_batch(3) {
                    service.create(item).await.unwrap();
                }
                assert!(service.search("missing", "x").await.unwrap().is_empty());
            }

            // ==================================================================
            // Query: list view through the service
            // ==================================================================

            #[tokio::test]
            async fn test_query_search_filter_sort() {
                let service = $factory;
                for item in sample_batch(10) {
                    service.create(item).await.unwrap();
                }
                let before = service.list().await.unwrap();

                let query = ListQuery::new()
                    .search("item_00")
                    .filters(FilterSpec::new().equals("category", "a"))
                    .sort(SortSpec::parse("score:desc"));
                let view = service.query(&query).await.unwrap();

                let names: Vec<&str> = view.iter().map(|i| i.name.as_str()).collect();
                assert_eq!(
                    names,
                    vec!["Item_008", "Item_006", "Item_004", "Item_002", "Item_000"]
                );
                assert_eq!(service.list().await.unwrap(), before, "query must not mutate");
            }

            // ==================================================================
            // Edge Cases
            // ==================================================================

            #[tokio::test]
            async fn test_ids_unique() {
                let service = $factory;
                let mut seen = HashSet::new();
                for item in sample_batch(20) {
                    let created = service.create(item).await.unwrap();
                    assert!(seen.insert(created.id()), "duplicate id {}", created.id());
                }

                let last = *seen.iter().max().unwrap();
                service.delete(last).await.unwrap();
                let again = service
                    .create(create_test_item("Again", "a@test.com", 1, 0.0, true))
                    .await
                    .unwrap();
                let all = service.list().await.unwrap();
                assert_eq!(all.iter().filter(|i| i.id() == again.id()).count(), 1);
            }

            #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
            async fn test_concurrent_access() {
                let service = $factory;
                let s1 = service.clone();
                let s2 = service.clone();

                let e1 = create_test_item("Concurrent_A", "ca@test.com", 20, 1.0, true);
                let e2 = create_test_item("Concurrent_B", "cb@test.com", 30, 2.0, false);

                let h1 = tokio::spawn(async move { s1.create(e1).await });
                let h2 = tokio::spawn(async move { s2.create(e2).await });

                let (r1, r2) = tokio::time::timeout(std::time::Duration::from_secs(30), async {
                    tokio::try_join!(h1, h2).unwrap()
                })
                .await
                .expect("Concurrent creates timed out after 30s, possible deadlock");

                let id1 = r1.unwrap().id();
                let id2 = r2.unwrap().id();
                assert_ne!(id1, id2);

                let all = service.list().await.unwrap();
                assert_eq!(all.len(), 2, "Both concurrently created records should be present");
            }
        }
    };
}
