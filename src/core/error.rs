//! Typed error handling for bizdesk
//!
//! Every failure a handler can produce is classified into one of the
//! categories below, and one central mapping turns the category into an
//! HTTP status code, an error code and the normalized response envelope.
//!
//! # Error Categories
//!
//! - [`EntityError`]: record lookups that found nothing
//! - [`ValidationError`]: malformed or incomplete request payloads
//! - [`RequestError`]: malformed request parameters
//! - [`StorageError`]: document store failures
//! - [`ConfigError`]: configuration loading and parsing
//!
//! # Example
//!
//! ```rust,ignore
//! async fn find(id: Uuid) -> Result<Testimonial, DeskError> {
//!     service.get(&id).await?.ok_or_else(|| {
//!         EntityError::NotFound {
//!             entity_type: "testimonial".to_string(),
//!             id: id.to_string(),
//!         }
//!         .into()
//!     })
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for bizdesk
#[derive(Debug, Error)]
pub enum DeskError {
    /// Record lookups
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Payload validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request parameters
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Document store failures
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Anything that should not happen in normal operation
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error section of the response envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error code for programmatic handling
    pub code: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Failure envelope: same shape as a success envelope plus an `error` section
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub data: Option<serde_json::Value>,
    pub error: ErrorBody,
}

impl DeskError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DeskError::Entity(e) => e.status_code(),
            DeskError::Validation(_) => StatusCode::BAD_REQUEST,
            DeskError::Request(_) => StatusCode::BAD_REQUEST,
            DeskError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DeskError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DeskError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DeskError::Entity(e) => e.error_code(),
            DeskError::Validation(e) => e.error_code(),
            DeskError::Request(e) => e.error_code(),
            DeskError::Storage(_) => "STORAGE_ERROR",
            DeskError::Config(_) => "CONFIG_ERROR",
            DeskError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to the failure envelope
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            success: false,
            message: self.to_string(),
            data: None,
            error: ErrorBody {
                code: self.error_code().to_string(),
                details: self.details(),
            },
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            DeskError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id,
                }))
            }
            DeskError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            DeskError::Storage(StorageError::OperationFailed {
                entity_type,
                operation,
                ..
            }) => Some(serde_json::json!({
                "entity_type": entity_type,
                "operation": operation,
            })),
            _ => None,
        }
    }
}

impl IntoResponse for DeskError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to record lookups
#[derive(Debug, Error)]
pub enum EntityError {
    /// No record with this identifier. Malformed identifiers land here too,
    /// since no record can carry them.
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: String },
}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to request payloads
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more fields failed their rules
    #[error("Validation errors: {}", join_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),

    /// Body is not valid JSON or does not match the expected shape
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    /// A required argument is absent from the body
    #[error("Missing required argument: {argument}")]
    MissingArgument { argument: String },
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

fn join_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
            ValidationError::MissingArgument { .. } => "MISSING_ARGUMENT",
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to request parameters
#[derive(Debug, Error)]
pub enum RequestError {
    /// An identifier supplied in the body is not a valid record ID
    #[error("Invalid identifier format: '{value}'")]
    InvalidIdentifier { value: String },
}

impl RequestError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidIdentifier { .. } => "INVALID_IDENTIFIER",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the document store
#[derive(Debug, Error)]
pub enum StorageError {
    /// Could not reach the backend
    #[error("Failed to connect to {backend}: {message}")]
    ConnectionError { backend: String, message: String },

    /// A single-document operation failed
    #[error("Failed to {operation} {entity_type}: {message}")]
    OperationFailed {
        entity_type: String,
        operation: String,
        message: String,
    },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", .file.as_ref().map(|f| format!(" file '{}'", f)).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration or environment
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// The selected storage backend is not compiled in
    #[error("Storage backend '{backend}' is not available in this build")]
    UnsupportedBackend { backend: String },
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for DeskError {
    fn from(err: serde_json::Error) -> Self {
        DeskError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for DeskError {
    fn from(err: serde_yaml::Error) -> Self {
        DeskError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<validator::ValidationErrors> for DeskError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldValidationError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = wire_field_name(field.as_ref());
                errs.iter().map(move |e| FieldValidationError {
                    // struct-level rules name the offending field in a param
                    field: e
                        .params
                        .get("field")
                        .and_then(|v| v.as_str())
                        .map(str::to_string)
                        .unwrap_or_else(|| field.clone()),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));

        DeskError::Validation(ValidationError::FieldErrors(fields))
    }
}

/// Map a Rust field name to the camelCase key used on the wire.
fn wire_field_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for bizdesk operations
pub type DeskResult<T> = Result<T, DeskError>;
