//! Record traits shared by every business entity
//!
//! Every document kept by bizdesk (testimonials, invoices, projects, clients)
//! is a flat record owned by one user. The [`Entity`] trait exposes the
//! metadata the storage layer and the HTTP handlers need; [`Record`] adds the
//! typed payloads used to create and partially update a record.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::Validate;

/// Wire name of the owner field, used as the list filter by every backend.
pub const OWNER_FIELD: &str = "userId";

/// Wire name of the identifier field, matching the document store convention.
pub const ID_FIELD: &str = "_id";

/// Base trait for all stored records.
///
/// All records have:
/// - id: identifier assigned when the record is created
/// - owner: the user the record belongs to
/// - created_at / updated_at: timestamps managed by the record itself
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs and as the collection name
    /// (e.g., "testimonials")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "testimonial")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;

    /// Get the identifier of the owning user
    fn owner_id(&self) -> &str;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the last update timestamp
    fn updated_at(&self) -> DateTime<Utc>;

    /// Bump the update timestamp to now
    fn touch(&mut self);

    /// Human-readable singular label (e.g., "Testimonial")
    fn label() -> String {
        capitalize(Self::resource_name_singular())
    }

    /// Human-readable plural label (e.g., "Testimonials")
    fn plural_label() -> String {
        capitalize(Self::resource_name())
    }

    /// Check if the record belongs to the given user
    fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id() == user_id
    }
}

/// A record that can be built from an add payload and patched from an
/// update payload.
///
/// `Draft` carries the allow-listed fields accepted on creation, `Patch`
/// the allow-listed fields accepted on update. Anything else in a request
/// body is ignored by deserialization.
pub trait Record: Entity + Serialize + DeserializeOwned {
    /// Payload accepted by the add operation
    type Draft: DeserializeOwned + Validate + Send + 'static;

    /// Payload accepted by the update operation
    type Patch: DeserializeOwned + Validate + Send + 'static;

    /// Build a fresh record from a validated draft
    fn from_draft(draft: Self::Draft) -> Self;

    /// Overwrite the fields present in the patch.
    ///
    /// Returns `true` if at least one field was overwritten.
    fn apply_patch(&mut self, patch: Self::Patch) -> bool;
}

/// Overwrite `target` when `value` is present and non-empty.
///
/// Empty strings are treated as absent, so a form that submits blank inputs
/// does not wipe stored values.
pub fn overwrite(target: &mut String, value: Option<String>) -> bool {
    match value {
        Some(v) if !v.is_empty() => {
            *target = v;
            true
        }
        _ => false,
    }
}

/// Overwrite an optional `target` when `value` is present.
pub fn overwrite_opt<T>(target: &mut Option<T>, value: Option<T>) -> bool {
    match value {
        Some(v) => {
            *target = Some(v);
            true
        }
        None => false,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
