//! Axum extractor for validated payloads
//!
//! This module provides the `Validated<T>` extractor that parses, filters
//! and validates request bodies before they reach handlers.

use super::filters::trim_strings;
use crate::core::error::{DeskError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

/// Axum extractor that filters and validates a JSON body into `T`
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn add(
///     Validated(draft): Validated<NewTestimonial>,
/// ) -> Result<Json<ApiResponse<Testimonial>>, DeskError> {
///     // draft is trimmed and validated
/// }
/// ```
#[derive(Debug)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    /// Get the inner payload
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = DeskError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<Value> = Json::from_request(req, state).await.map_err(|e| {
            DeskError::Validation(ValidationError::InvalidJson {
                message: e.body_text(),
            })
        })?;

        parse_payload(payload).map(Validated)
    }
}

/// Filter, deserialize and validate a raw JSON payload
pub fn parse_payload<T>(payload: Value) -> Result<T, DeskError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_value(trim_strings(payload))?;
    value.validate()?;
    Ok(value)
}
