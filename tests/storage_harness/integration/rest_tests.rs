//! REST integration test macro for storage backends.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that validate
//! the testimonial handlers over a `Stores` bundle through full REST
//! round-trips: JSON → HTTP request → handler → DataService → JSON envelope.

/// Generate a REST integration test suite for a storage backend.
///
/// `$stores_factory` must produce a `bizdesk::storage::Stores`.
///
/// # Generated Tests
///
/// ## Operations
/// - `test_rest_add`: POST 201 + created record in the envelope
/// - `test_rest_add_defaults_missing_fields`: only userId given
/// - `test_rest_get`: GET 200 + record
/// - `test_rest_list_filters_by_user`: only the caller's records
/// - `test_rest_update`: PUT 200, data null, stored record changed
/// - `test_rest_update_ignores_other_fields`: allow-list and empty strings
/// - `test_rest_remove`: DELETE 200, then GET 404
///
/// ## Error handling
/// - `test_rest_get_unknown_is_404`
/// - `test_rest_get_malformed_id_is_404`
/// - `test_rest_update_unknown_is_404`
/// - `test_rest_remove_without_id_is_400`
/// - `test_rest_remove_malformed_id_is_400`
/// - `test_rest_remove_unknown_id_succeeds`
/// - `test_rest_add_without_user_is_400`
/// - `test_rest_list_without_user_is_400`
/// - `test_rest_invalid_json_is_400`
#[macro_export]
macro_rules! rest_integration_tests {
    ($stores_factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use serde_json::{Value, json};
            use crate::storage_harness::integration::{add_testimonial, build_test_router};

            async fn make_server() -> TestServer {
                let stores = $stores_factory;
                TestServer::new(build_test_router(stores)).unwrap()
            }

            // ==============================================================
            // Add
            // ==============================================================

            #[tokio::test]
            async fn test_rest_add() {
                let server = make_server().await;

                let response = server
                    .post("/testimonials")
                    .json(&json!({
                        "userId": "user-a",
                        "project": "Website",
                        "client": "Acme",
                        "feedback": "Great work"
                    }))
                    .await;

                response.assert_status(StatusCode::CREATED);

                let body: Value = response.json();
                assert_eq!(body["success"], true);
                assert_eq!(body["message"], "Testimonial created");
                assert_eq!(body["data"]["userId"], "user-a");
                assert_eq!(body["data"]["project"], "Website");
                assert_eq!(body["data"]["client"], "Acme");
                assert_eq!(body["data"]["feedback"], "Great work");
                uuid::Uuid::parse_str(body["data"]["_id"].as_str().unwrap()).unwrap();
                assert!(body["data"]["createdAt"].is_string());
            }

            #[tokio::test]
            async fn test_rest_add_defaults_missing_fields() {
                let server = make_server().await;

                let response = server
                    .post("/testimonials")
                    .json(&json!({ "userId": "user-a" }))
                    .await;

                response.assert_status(StatusCode::CREATED);
                let body: Value = response.json();
                assert_eq!(body["data"]["project"], "");
                assert_eq!(body["data"]["client"], "");
                assert_eq!(body["data"]["feedback"], "");
            }

            // ==============================================================
            // Get & list
            // ==============================================================

            #[tokio::test]
            async fn test_rest_get() {
                let server = make_server().await;
                let id = add_testimonial(&server, "user-a", "Lovely").await;

                let response = server.get(&format!("/testimonials/{}", id)).await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(body["success"], true);
                assert_eq!(body["message"], "Testimonial found");
                assert_eq!(body["data"]["_id"], id.as_str());
                assert_eq!(body["data"]["feedback"], "Lovely");
            }

            #[tokio::test]
            async fn test_rest_list_filters_by_user() {
                let server = make_server().await;
                add_testimonial(&server, "user-a", "first").await;
                add_testimonial(&server, "user-b", "other").await;
                add_testimonial(&server, "user-a", "second").await;

                let response = server
                    .post("/testimonials/list")
                    .json(&json!({ "userId": "user-a" }))
                    .await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(body["message"], "Testimonials found");
                let data = body["data"].as_array().unwrap();
                assert_eq!(data.len(), 2);
                assert!(data.iter().all(|t| t["userId"] == "user-a"));
                assert_eq!(data[0]["feedback"], "first");
                assert_eq!(data[1]["feedback"], "second");

                let response = server
                    .post("/testimonials/list")
                    .json(&json!({ "userId": "nobody" }))
                    .await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["data"], json!([]));
            }

            // ==============================================================
            // Update
            // ==============================================================

            #[tokio::test]
            async fn test_rest_update() {
                let server = make_server().await;
                let id = add_testimonial(&server, "user-a", "Good").await;

                let response = server
                    .put(&format!("/testimonials/{}", id))
                    .json(&json!({ "feedback": "Excellent" }))
                    .await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(body["success"], true);
                assert_eq!(body["message"], "Testimonial updated");
                assert!(body["data"].is_null());

                let body: Value = server.get(&format!("/testimonials/{}", id)).await.json();
                assert_eq!(body["data"]["feedback"], "Excellent");
                assert_eq!(body["data"]["project"], "Website");
                assert_ne!(body["data"]["updatedAt"], body["data"]["createdAt"]);
            }

            #[tokio::test]
            async fn test_rest_update_ignores_other_fields() {
                let server = make_server().await;
                let id = add_testimonial(&server, "user-a", "Good").await;

                server
                    .put(&format!("/testimonials/{}", id))
                    .json(&json!({
                        "userId": "intruder",
                        "_id": "00000000-0000-0000-0000-000000000000",
                        "client": "",
                        "project": "Mobile app"
                    }))
                    .await
                    .assert_status_ok();

                let body: Value = server.get(&format!("/testimonials/{}", id)).await.json();
                assert_eq!(body["data"]["_id"], id.as_str());
                assert_eq!(body["data"]["userId"], "user-a");
                assert_eq!(body["data"]["client"], "Acme");
                assert_eq!(body["data"]["project"], "Mobile app");
            }

            // ==============================================================
            // Remove
            // ==============================================================

            #[tokio::test]
            async fn test_rest_remove() {
                let server = make_server().await;
                let id = add_testimonial(&server, "user-a", "Temporary").await;

                let response = server.delete("/testimonials").json(&json!({ "_id": id })).await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["message"], "Testimonial removed");

                server
                    .get(&format!("/testimonials/{}", id))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            // ==============================================================
            // Error handling
            // ==============================================================

            #[tokio::test]
            async fn test_rest_get_unknown_is_404() {
                let server = make_server().await;

                let response = server
                    .get(&format!("/testimonials/{}", uuid::Uuid::new_v4()))
                    .await;
                response.assert_status(StatusCode::NOT_FOUND);

                let body: Value = response.json();
                assert_eq!(body["success"], false);
                assert!(body["data"].is_null());
                assert_eq!(body["error"]["code"], "ENTITY_NOT_FOUND");
            }

            #[tokio::test]
            async fn test_rest_get_malformed_id_is_404() {
                let server = make_server().await;

                server
                    .get("/testimonials/not-a-uuid")
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_rest_update_unknown_is_404() {
                let server = make_server().await;

                server
                    .put(&format!("/testimonials/{}", uuid::Uuid::new_v4()))
                    .json(&json!({ "feedback": "x" }))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_rest_remove_without_id_is_400() {
                let server = make_server().await;

                let response = server.delete("/testimonials").json(&json!({})).await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(body["error"]["code"], "MISSING_ARGUMENT");
            }

            #[tokio::test]
            async fn test_rest_remove_malformed_id_is_400() {
                let server = make_server().await;

                let response = server
                    .delete("/testimonials")
                    .json(&json!({ "_id": "nope" }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(body["error"]["code"], "INVALID_IDENTIFIER");
            }

            #[tokio::test]
            async fn test_rest_remove_unknown_id_succeeds() {
                let server = make_server().await;

                server
                    .delete("/testimonials")
                    .json(&json!({ "_id": uuid::Uuid::new_v4() }))
                    .await
                    .assert_status_ok();
            }

            #[tokio::test]
            async fn test_rest_add_without_user_is_400() {
                let server = make_server().await;

                let response = server
                    .post("/testimonials")
                    .json(&json!({ "feedback": "anonymous" }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
                assert_eq!(body["error"]["details"]["fields"][0]["field"], "userId");
            }

            #[tokio::test]
            async fn test_rest_list_without_user_is_400() {
                let server = make_server().await;

                server
                    .post("/testimonials/list")
                    .json(&json!({ "userId": "  " }))
                    .await
                    .assert_status(StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_rest_invalid_json_is_400() {
                let server = make_server().await;

                let response = server
                    .post("/testimonials")
                    .text("{ not json")
                    .content_type("application/json")
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(body["error"]["code"], "INVALID_JSON");
            }
        }
    };
}
