//! Macro-generated test suite for `DataService<Testimonial>` contract validation.
//!
//! The `data_service_tests!` macro generates a test module that validates any
//! `DataService<Testimonial>` implementation against the full contract: CRUD
//! operations, owner filtering, ordering, and concurrent access.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use bizdesk::storage::InMemoryDataService;
//!
//! data_service_tests!(InMemoryDataService::<Testimonial>::new());
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_create_and_get`: create then retrieve, verify all fields
//! - `test_get_nonexistent`: get with random UUID returns None
//! - `test_list_empty`: list on empty store returns empty vec
//! - `test_update_existing`: mutate feedback, verify persisted
//! - `test_update_nonexistent`: update unknown ID returns Err
//! - `test_delete_existing`: delete then get returns None
//! - `test_delete_nonexistent`: delete unknown ID succeeds
//!
//! ## Owner filter
//! - `test_find_by_owner_filters`: only the owner's records come back
//! - `test_find_by_owner_unknown`: unknown owner yields an empty vec
//! - `test_results_oldest_first`: list and find_by_owner order by createdAt
//! - `test_subsecond_ordering`: records less than a second apart stay in time order
//!
//! ## Edge Cases
//! - `test_concurrent_access`: parallel creates from spawned tasks

/// Generate a full `DataService<Testimonial>` conformance test suite.
///
/// `$factory` must be an expression that evaluates to an instance implementing
/// `DataService<Testimonial>`. It is re-evaluated for each test to ensure
/// isolation. For the concurrent access test, the returned service must also
/// implement `Clone + 'static` (shared state via Arc pattern).
#[macro_export]
macro_rules! data_service_tests {
    ($factory:expr) => {
        mod data_service_contract_tests {
            use super::*;
            use bizdesk::core::entity::Entity;
            use bizdesk::core::service::DataService;
            use uuid::Uuid;

            // ==================================================================
            // CRUD
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_get() {
                let service = $factory;
                let entity = create_testimonial("user-a", "Delivered early");
                let original_id = entity.id;

                let created = service.create(entity.clone()).await.unwrap();
                assert_eq!(created.id(), original_id);
                assert_eq!(created.owner_id(), "user-a");

                let retrieved = service.get(&original_id).await.unwrap();
                assert!(retrieved.is_some(), "Record should exist after create");
                let retrieved = retrieved.unwrap();
                assert_eq!(retrieved.id, original_id);
                assert_eq!(retrieved.feedback, "Delivered early");
                assert_eq!(retrieved.project, entity.project);
                assert_eq!(retrieved.client, entity.client);
                assert_eq!(
                    retrieved.created_at.timestamp_millis(),
                    entity.created_at.timestamp_millis()
                );
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let service = $factory;

                let result = service.get(&Uuid::new_v4()).await.unwrap();
                assert!(result.is_none(), "Getting a nonexistent record should return None");
            }

            #[tokio::test]
            async fn test_list_empty() {
                let service = $factory;

                let all = service.list().await.unwrap();
                assert!(all.is_empty(), "List on empty store should return empty vec");
            }

            #[tokio::test]
            async fn test_update_existing() {
                let service = $factory;
                let mut entity = create_testimonial("user-a", "Good");
                service.create(entity.clone()).await.unwrap();

                entity.feedback = "Outstanding".to_string();
                entity.touch();
                let updated = service.update(&entity.id, entity.clone()).await.unwrap();
                assert_eq!(updated.feedback, "Outstanding");

                let retrieved = service.get(&entity.id).await.unwrap().unwrap();
                assert_eq!(retrieved.feedback, "Outstanding");
                assert_count(&service.list().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let service = $factory;
                let entity = create_testimonial("user-a", "Ghost");

                let result = service.update(&entity.id, entity.clone()).await;
                assert!(result.is_err(), "Updating an unknown record should fail");
                assert!(service.get(&entity.id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_delete_existing() {
                let service = $factory;
                let entity = create_testimonial("user-a", "Bye");
                service.create(entity.clone()).await.unwrap();

                service.delete(&entity.id).await.unwrap();

                assert!(service.get(&entity.id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let service = $factory;

                service
                    .delete(&Uuid::new_v4())
                    .await
                    .expect("Deleting an unknown record should succeed");
            }

            // ==================================================================
            // Owner filter
            // ==================================================================

            #[tokio::test]
            async fn test_find_by_owner_filters() {
                let service = $factory;
                for t in sample_batch("user-a", 3) {
                    service.create(t).await.unwrap();
                }
                service
                    .create(create_testimonial("user-b", "Someone else"))
                    .await
                    .unwrap();

                let mine = service.find_by_owner("user-a").await.unwrap();
                assert_count(&mine, 3);
                assert!(mine.iter().all(|t| t.is_owned_by("user-a")));

                let theirs = service.find_by_owner("user-b").await.unwrap();
                assert_eq!(feedbacks(&theirs), vec!["Someone else"]);
            }

            #[tokio::test]
            async fn test_find_by_owner_unknown() {
                let service = $factory;
                service.create(create_testimonial("user-a", "x")).await.unwrap();

                assert!(service.find_by_owner("nobody").await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_results_oldest_first() {
                let service = $factory;
                service
                    .create(create_testimonial_aged("user-a", "newest", 1))
                    .await
                    .unwrap();
                service
                    .create(create_testimonial_aged("user-a", "oldest", 30))
                    .await
                    .unwrap();
                service
                    .create(create_testimonial_aged("user-a", "middle", 10))
                    .await
                    .unwrap();

                let mine = service.find_by_owner("user-a").await.unwrap();
                assert_eq!(feedbacks(&mine), vec!["oldest", "middle", "newest"]);

                let all = service.list().await.unwrap();
                assert_eq!(feedbacks(&all), vec!["oldest", "middle", "newest"]);
            }

            #[tokio::test]
            async fn test_subsecond_ordering() {
                use chrono::TimeZone;

                let service = $factory;
                let whole_second = chrono::Utc
                    .with_ymd_and_hms(2021, 7, 20, 12, 0, 0)
                    .unwrap();
                let steps = [
                    ("half past", 500),
                    ("on the second", 0),
                    ("a tick later", 7),
                    ("just before next", 999),
                ];
                for (feedback, millis) in steps {
                    service
                        .create(create_testimonial_at(
                            "user-a",
                            feedback,
                            whole_second + chrono::Duration::milliseconds(millis),
                        ))
                        .await
                        .unwrap();
                }

                let expected = vec![
                    "on the second",
                    "a tick later",
                    "half past",
                    "just before next",
                ];
                assert_eq!(feedbacks(&service.find_by_owner("user-a").await.unwrap()), expected);
                assert_eq!(feedbacks(&service.list().await.unwrap()), expected);
            }

            // ==================================================================
            // Edge cases
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_access() {
                let service = $factory;
                let s1 = service.clone();
                let s2 = service.clone();

                let e1 = create_testimonial("user-a", "Concurrent A");
                let e2 = create_testimonial("user-a", "Concurrent B");
                let id1 = e1.id;
                let id2 = e2.id;

                let h1 = tokio::spawn(async move { s1.create(e1).await });
                let h2 = tokio::spawn(async move { s2.create(e2).await });

                let (r1, r2) = tokio::time::timeout(std::time::Duration::from_secs(30), async {
                    tokio::try_join!(h1, h2).unwrap()
                })
                .await
                .expect("Concurrent creates timed out after 30s: possible deadlock");

                r1.unwrap();
                r2.unwrap();

                let all = service.list().await.unwrap();
                assert_count(&all, 2);

                let ids: Vec<Uuid> = all.iter().map(|e| e.id()).collect();
                assert!(ids.contains(&id1), "Record A should be present");
                assert!(ids.contains(&id2), "Record B should be present");
            }
        }
    };
}
