//! Storage service trait for records

use crate::core::Entity;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Service trait for managing records of one entity type
///
/// Implementations provide the single-document operations the handlers
/// need. The handlers are agnostic to the underlying document store.
#[async_trait]
pub trait DataService<T: Entity>: Send + Sync {
    /// Insert a new record
    async fn create(&self, entity: T) -> Result<T>;

    /// Get a record by ID
    async fn get(&self, id: &Uuid) -> Result<Option<T>>;

    /// List all records, oldest first
    async fn list(&self) -> Result<Vec<T>>;

    /// List the records owned by a user, oldest first
    async fn find_by_owner(&self, user_id: &str) -> Result<Vec<T>>;

    /// Replace an existing record
    ///
    /// Returns `Err` if no record has this ID.
    async fn update(&self, id: &Uuid, entity: T) -> Result<T>;

    /// Delete a record
    ///
    /// Deleting an unknown ID succeeds.
    async fn delete(&self, id: &Uuid) -> Result<()>;
}
