//! Storage implementations for different backends

pub mod in_memory;
#[cfg(feature = "mongodb_backend")]
pub mod mongodb;

pub use in_memory::InMemoryDataService;
#[cfg(feature = "mongodb_backend")]
pub use self::mongodb::MongoDataService;

use crate::config::{AppConfig, StorageBackend};
use crate::core::DataService;
use crate::core::error::DeskResult;
use crate::entities::{Client, Invoice, Project, Testimonial};
use std::sync::Arc;

/// One service per record type, sharing a backend
#[derive(Clone)]
pub struct Stores {
    pub testimonials: Arc<dyn DataService<Testimonial>>,
    pub invoices: Arc<dyn DataService<Invoice>>,
    pub projects: Arc<dyn DataService<Project>>,
    pub clients: Arc<dyn DataService<Client>>,
}

impl Stores {
    /// Fresh, empty in-memory stores
    pub fn in_memory() -> Self {
        Self {
            testimonials: Arc::new(InMemoryDataService::new()),
            invoices: Arc::new(InMemoryDataService::new()),
            projects: Arc::new(InMemoryDataService::new()),
            clients: Arc::new(InMemoryDataService::new()),
        }
    }

    /// Stores backed by one MongoDB database, one collection per record type
    #[cfg(feature = "mongodb_backend")]
    pub fn mongodb(database: ::mongodb::Database) -> Self {
        Self {
            testimonials: Arc::new(MongoDataService::new(database.clone())),
            invoices: Arc::new(MongoDataService::new(database.clone())),
            projects: Arc::new(MongoDataService::new(database.clone())),
            clients: Arc::new(MongoDataService::new(database)),
        }
    }

    /// Build the stores selected by the configuration
    pub async fn from_config(config: &AppConfig) -> DeskResult<Self> {
        match config.storage.backend {
            StorageBackend::Memory => Ok(Self::in_memory()),
            StorageBackend::Mongodb => Self::connect_mongodb(config).await,
        }
    }

    #[cfg(feature = "mongodb_backend")]
    async fn connect_mongodb(config: &AppConfig) -> DeskResult<Self> {
        use crate::core::error::StorageError;

        let client = ::mongodb::Client::with_uri_str(&config.mongodb.uri)
            .await
            .map_err(|e| StorageError::ConnectionError {
                backend: "mongodb".to_string(),
                message: e.to_string(),
            })?;

        tracing::info!(database = %config.mongodb.database, "connected to MongoDB");

        Ok(Self::mongodb(client.database(&config.mongodb.database)))
    }

    #[cfg(not(feature = "mongodb_backend"))]
    async fn connect_mongodb(config: &AppConfig) -> DeskResult<Self> {
        use crate::core::error::ConfigError;

        Err(ConfigError::UnsupportedBackend {
            backend: config.storage.backend.to_string(),
        }
        .into())
    }
}
