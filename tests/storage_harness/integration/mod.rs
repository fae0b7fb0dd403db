//! Integration test infrastructure for storage backends.
//!
//! Builds the real application router over a `Stores` bundle so backends
//! are validated through the full REST layer
//! (HTTP → handler → DataService → response).
//!
//! # Architecture
//!
//! ```text
//! axum_test::TestServer
//!     └─ Router (built by build_test_router)
//!         ├─ POST   /testimonials/list   → list
//!         ├─ GET    /testimonials/{id}   → get
//!         ├─ PUT    /testimonials/{id}   → update
//!         ├─ DELETE /testimonials        → remove
//!         ├─ POST   /testimonials        → add
//!         └─ ... same for invoices, projects, clients
//! ```

#[macro_use]
pub mod rest_tests;

use axum::Router;
use axum_test::TestServer;
use bizdesk::server::ServerBuilder;
use bizdesk::storage::Stores;
use serde_json::{Value, json};

/// Full application router over the given stores
pub fn build_test_router(stores: Stores) -> Router {
    ServerBuilder::new().with_stores(stores).build()
}

/// POST a testimonial and return the created record's `_id`
pub async fn add_testimonial(server: &TestServer, user_id: &str, feedback: &str) -> String {
    let response = server
        .post("/testimonials")
        .json(&json!({
            "userId": user_id,
            "project": "Website",
            "client": "Acme",
            "feedback": feedback
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    body["data"]["_id"]
        .as_str()
        .expect("created record should carry an _id")
        .to_string()
}
