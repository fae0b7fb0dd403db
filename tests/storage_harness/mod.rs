//! Shared test harness for storage backend testing
//!
//! Provides factories for `Testimonial` records plus two macro suites:
//! `data_service_tests!` (the `DataService` contract) and
//! `rest_integration_tests!` (full HTTP round-trips over a `Stores` bundle).
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod data_service_tests;
#[macro_use]
pub mod integration;

use bizdesk::entities::Testimonial;
use chrono::{DateTime, Duration, Utc};

// ---------------------------------------------------------------------------
// Factories
// ---------------------------------------------------------------------------

/// A testimonial owned by `user_id`
pub fn create_testimonial(user_id: &str, feedback: &str) -> Testimonial {
    Testimonial::new(
        user_id,
        "Website redesign".to_string(),
        "Acme".to_string(),
        feedback.to_string(),
    )
}

/// A testimonial created `minutes_ago` minutes in the past
pub fn create_testimonial_aged(user_id: &str, feedback: &str, minutes_ago: i64) -> Testimonial {
    let mut testimonial = create_testimonial(user_id, feedback);
    testimonial.created_at = Utc::now() - Duration::minutes(minutes_ago);
    testimonial.updated_at = testimonial.created_at;
    testimonial
}

/// A testimonial created at an exact instant
pub fn create_testimonial_at(user_id: &str, feedback: &str, at: DateTime<Utc>) -> Testimonial {
    let mut testimonial = create_testimonial(user_id, feedback);
    testimonial.created_at = at;
    testimonial.updated_at = at;
    testimonial
}

/// `n` testimonials for one user, oldest first
pub fn sample_batch(user_id: &str, n: usize) -> Vec<Testimonial> {
    (0..n)
        .map(|i| create_testimonial_aged(user_id, &format!("feedback #{i}"), (n - i) as i64))
        .collect()
}

// ---------------------------------------------------------------------------
// Assertions
// ---------------------------------------------------------------------------

pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}

/// Feedback values in list order
pub fn feedbacks(list: &[Testimonial]) -> Vec<&str> {
    list.iter().map(|t| t.feedback.as_str()).collect()
}
