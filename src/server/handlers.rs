//! HTTP handlers shared by every record type
//!
//! Each handler maps one request to at most two storage calls and one
//! response envelope. They are generic over [`Record`], so a record type
//! only has to provide its payload types to get the full set of routes:
//!
//! | method | path               | handler  |
//! |--------|--------------------|----------|
//! | POST   | `/{plural}/list`   | [`list`] |
//! | GET    | `/{plural}/{id}`   | [`get`]  |
//! | PUT    | `/{plural}/{id}`   | [`update`] |
//! | DELETE | `/{plural}`        | [`remove`] |
//! | POST   | `/{plural}`        | [`add`]  |

use crate::core::entity::ID_FIELD;
use crate::core::error::{EntityError, RequestError, StorageError, ValidationError};
use crate::core::{ApiResponse, DataService, DeskError, DeskResult, Entity, Record, Validated};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get as get_route, post},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;
use validator::Validate;

/// State shared by the handlers of one record type
pub struct EntityState<T> {
    pub service: Arc<dyn DataService<T>>,
}

impl<T> Clone for EntityState<T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

/// Body of the list request
#[derive(Debug, Deserialize, Validate)]
pub struct OwnerQuery {
    #[serde(rename = "userId")]
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    pub user_id: Option<String>,
}

/// Body of the remove request
#[derive(Debug, Deserialize, Validate)]
pub struct RemoveRequest {
    #[serde(rename = "_id")]
    pub id: Option<String>,
}

/// Build the five routes of a record type
pub fn record_routes<T: Record>(service: Arc<dyn DataService<T>>) -> Router {
    let plural = T::resource_name();

    Router::new()
        .route(&format!("/{plural}"), post(add::<T>).delete(remove::<T>))
        .route(&format!("/{plural}/list"), post(list::<T>))
        .route(
            &format!("/{plural}/{{id}}"),
            get_route(get::<T>).put(update::<T>),
        )
        .with_state(EntityState { service })
}

/// List the records owned by the user named in the body
pub async fn list<T: Record>(
    State(state): State<EntityState<T>>,
    Validated(query): Validated<OwnerQuery>,
) -> DeskResult<Json<ApiResponse<Vec<T>>>> {
    let user_id = query.user_id.unwrap_or_default();

    let records = state
        .service
        .find_by_owner(&user_id)
        .await
        .map_err(|e| storage_failure::<T>("list", e))?;

    debug!(
        entity = T::resource_name(),
        user_id = %user_id,
        count = records.len(),
        "listed records"
    );

    Ok(Json(ApiResponse::ok(
        format!("{} found", T::plural_label()),
        records,
    )))
}

/// Fetch one record by the identifier in the path
pub async fn get<T: Record>(
    State(state): State<EntityState<T>>,
    Path(id): Path<String>,
) -> DeskResult<Json<ApiResponse<T>>> {
    let record = load::<T>(&state, &id).await?;

    debug!(entity = T::resource_name_singular(), id = %id, "fetched record");

    Ok(Json(ApiResponse::ok(format!("{} found", T::label()), record)))
}

/// Overwrite the allow-listed fields present in the body
pub async fn update<T: Record>(
    State(state): State<EntityState<T>>,
    Path(id): Path<String>,
    Validated(patch): Validated<T::Patch>,
) -> DeskResult<Json<ApiResponse<()>>> {
    let mut record = load::<T>(&state, &id).await?;

    let changed = record.apply_patch(patch);
    record.touch();

    state
        .service
        .update(&record.id(), record)
        .await
        .map_err(|e| storage_failure::<T>("update", e))?;

    info!(entity = T::resource_name_singular(), id = %id, changed, "updated record");

    Ok(Json(ApiResponse::message(format!("{} updated", T::label()))))
}

/// Delete the record named by `_id` in the body
///
/// Removing an identifier that matches nothing succeeds.
pub async fn remove<T: Record>(
    State(state): State<EntityState<T>>,
    Validated(request): Validated<RemoveRequest>,
) -> DeskResult<Json<ApiResponse<()>>> {
    let raw = request
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ValidationError::MissingArgument {
            argument: ID_FIELD.to_string(),
        })?;

    let id = Uuid::parse_str(&raw)
        .map_err(|_| RequestError::InvalidIdentifier { value: raw.clone() })?;

    state
        .service
        .delete(&id)
        .await
        .map_err(|e| storage_failure::<T>("delete", e))?;

    info!(entity = T::resource_name_singular(), id = %id, "removed record");

    Ok(Json(ApiResponse::message(format!("{} removed", T::label()))))
}

/// Create a record from the allow-listed fields in the body
pub async fn add<T: Record>(
    State(state): State<EntityState<T>>,
    Validated(draft): Validated<T::Draft>,
) -> DeskResult<(StatusCode, Json<ApiResponse<T>>)> {
    let record = T::from_draft(draft);

    let created = state
        .service
        .create(record)
        .await
        .map_err(|e| storage_failure::<T>("create", e))?;

    info!(
        entity = T::resource_name_singular(),
        id = %created.id(),
        owner = created.owner_id(),
        "created record"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(format!("{} created", T::label()), created)),
    ))
}

/// Load a record, answering 404 for unknown and malformed identifiers alike
async fn load<T: Record>(state: &EntityState<T>, raw_id: &str) -> DeskResult<T> {
    let not_found = || -> DeskError {
        EntityError::NotFound {
            entity_type: T::resource_name_singular().to_string(),
            id: raw_id.to_string(),
        }
        .into()
    };

    let Ok(id) = Uuid::parse_str(raw_id) else {
        return Err(not_found());
    };

    state
        .service
        .get(&id)
        .await
        .map_err(|e| storage_failure::<T>("get", e))?
        .ok_or_else(not_found)
}

fn storage_failure<T: Entity>(operation: &str, err: anyhow::Error) -> DeskError {
    error!(
        entity = T::resource_name_singular(),
        operation,
        error = %err,
        "storage operation failed"
    );

    StorageError::OperationFailed {
        entity_type: T::resource_name_singular().to_string(),
        operation: operation.to_string(),
        message: err.to_string(),
    }
    .into()
}
