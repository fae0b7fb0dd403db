//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Provides `MongoDataService<T>` backed by a `mongodb::Database`.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag:
//! ```toml
//! [dependencies]
//! bizdesk = { version = "0.1", features = ["mongodb_backend"] }
//! ```
//!
//! # Storage model
//!
//! Each `MongoDataService<T>` operates on a collection named after
//! `T::resource_name()` ("testimonials", "invoices", ...). Records already
//! carry their identifier as `_id` on the wire, so the serialized form is
//! stored as is.
//!
//! # Serialization strategy
//!
//! Records are serialized via `serde_json::Value` as an intermediate format,
//! then converted to BSON documents. UUIDs and timestamps are therefore
//! stored as strings. `createdAt` and `updatedAt` are rewritten with a fixed
//! nine-digit fraction before insert, so their string order is time order
//! and the `createdAt` sort is chronological.

use crate::core::entity::{ID_FIELD, OWNER_FIELD};
use crate::core::{DataService, Entity};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{Bson, Document, doc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

const CREATED_AT_FIELD: &str = "createdAt";
const UPDATED_AT_FIELD: &str = "updatedAt";

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Convert a serde_json::Value (expected to be an Object) into a BSON Document.
fn json_to_document(json: serde_json::Value) -> Result<Document> {
    let bson_val = mongodb::bson::to_bson(&json)
        .map_err(|e| anyhow!("Failed to convert JSON to BSON: {}", e))?;

    match bson_val {
        Bson::Document(d) => Ok(d),
        _ => Err(anyhow!("Expected BSON document, got non-object")),
    }
}

/// Convert a BSON Document back into a serde_json::Value.
fn document_to_json(doc: Document) -> serde_json::Value {
    Bson::Document(doc).into_relaxed_extjson()
}

/// Fixed-width RFC 3339 form of a timestamp: UTC, nanosecond fraction.
fn sortable_timestamp(raw: &str) -> Result<String> {
    let ts = DateTime::parse_from_rfc3339(raw)
        .map_err(|e| anyhow!("Invalid timestamp '{}': {}", raw, e))?;
    Ok(ts
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Nanos, true))
}

/// Rewrite the record timestamps of a document in sortable form.
fn normalize_timestamps(doc: &mut Document) -> Result<()> {
    for field in [CREATED_AT_FIELD, UPDATED_AT_FIELD] {
        let normalized = match doc.get(field) {
            Some(Bson::String(raw)) => sortable_timestamp(raw)?,
            _ => continue,
        };
        doc.insert(field, normalized);
    }
    Ok(())
}

/// Convert a UUID to its BSON string representation for queries.
fn uuid_bson(id: &Uuid) -> Bson {
    Bson::String(id.to_string())
}

// ---------------------------------------------------------------------------
// MongoDataService<T>
// ---------------------------------------------------------------------------

/// Generic record store backed by MongoDB.
///
/// # Example
///
/// ```rust,ignore
/// use mongodb::Client;
/// use bizdesk::storage::MongoDataService;
///
/// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
/// let db = client.database("bizdesk");
/// let service = MongoDataService::<Testimonial>::new(db);
/// let record = service.create(testimonial).await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoDataService<T> {
    database: Database,
    _marker: std::marker::PhantomData<T>,
}

impl<T> MongoDataService<T> {
    /// Create a new `MongoDataService` with the given database handle.
    pub fn new(database: Database) -> Self {
        Self {
            database,
            _marker: std::marker::PhantomData,
        }
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Database {
        &self.database
    }
}

impl<T: Entity + Serialize + DeserializeOwned> MongoDataService<T> {
    fn collection(&self) -> mongodb::Collection<Document> {
        self.database.collection(T::resource_name())
    }

    fn entity_to_document(entity: &T) -> Result<Document> {
        let json = serde_json::to_value(entity)
            .map_err(|e| anyhow!("Failed to serialize record: {}", e))?;
        let mut doc = json_to_document(json)?;
        normalize_timestamps(&mut doc)?;
        Ok(doc)
    }

    fn document_to_entity(doc: Document) -> Result<T> {
        serde_json::from_value(document_to_json(doc))
            .map_err(|e| anyhow!("Failed to deserialize record from document: {}", e))
    }

    async fn find_sorted(&self, filter: Document) -> Result<Vec<T>> {
        let cursor = self
            .collection()
            .find(filter)
            .sort(doc! { CREATED_AT_FIELD: 1, ID_FIELD: 1 })
            .await
            .map_err(|e| anyhow!("Failed to query {}: {}", T::resource_name(), e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| anyhow!("Failed to collect {}: {}", T::resource_name(), e))?;

        docs.into_iter().map(Self::document_to_entity).collect()
    }
}

#[async_trait]
impl<T: Entity + Serialize + DeserializeOwned> DataService<T> for MongoDataService<T> {
    /// Insert a new record and return it as stored.
    async fn create(&self, entity: T) -> Result<T> {
        let doc = Self::entity_to_document(&entity)?;

        self.collection()
            .insert_one(doc)
            .await
            .map_err(|e| anyhow!("Failed to create record: {}", e))?;

        Ok(entity)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<T>> {
        let doc = self
            .collection()
            .find_one(doc! { ID_FIELD: uuid_bson(id) })
            .await
            .map_err(|e| anyhow!("Failed to get record: {}", e))?;

        doc.map(Self::document_to_entity).transpose()
    }

    async fn list(&self) -> Result<Vec<T>> {
        self.find_sorted(doc! {}).await
    }

    async fn find_by_owner(&self, user_id: &str) -> Result<Vec<T>> {
        self.find_sorted(doc! { OWNER_FIELD: user_id }).await
    }

    /// Replace an existing record.
    ///
    /// Returns `Err` if no document matched.
    async fn update(&self, id: &Uuid, entity: T) -> Result<T> {
        let doc = Self::entity_to_document(&entity)?;

        let result = self
            .collection()
            .replace_one(doc! { ID_FIELD: uuid_bson(id) }, doc)
            .await
            .map_err(|e| anyhow!("Failed to update record: {}", e))?;

        if result.matched_count == 0 {
            return Err(anyhow!("{} {} not found", T::resource_name_singular(), id));
        }

        Ok(entity)
    }

    /// Silently succeeds if the record does not exist.
    async fn delete(&self, id: &Uuid) -> Result<()> {
        self.collection()
            .delete_one(doc! { ID_FIELD: uuid_bson(id) })
            .await
            .map_err(|e| anyhow!("Failed to delete record: {}", e))?;

        Ok(())
    }
}
