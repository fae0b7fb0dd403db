//! # bizdesk
//!
//! Business-management backend for freelancers and small agencies.
//!
//! ## Features
//!
//! - **Four record types**: testimonials, invoices, projects and clients,
//!   each owned by one user
//! - **Uniform REST surface**: list by owner, get, partial update, remove and
//!   add for every record type, with one response envelope
//! - **Typed payloads**: allow-listed add/update bodies checked with
//!   `validator` before they reach the store
//! - **Pluggable storage**: in-memory by default, MongoDB behind the
//!   `mongodb_backend` feature
//! - **Invoice listing view model** driven through an HTTP client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bizdesk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_stores(Stores::in_memory())
//!         .serve("127.0.0.1:3000")
//!         .await
//! }
//! ```
//!
//! Defining another record type takes a model and a descriptor:
//!
//! ```rust,ignore
//! impl_record!(
//!     Expense,
//!     "expense",
//!     "expenses",
//!     {
//!         label: String,
//!         amount: f64,
//!     }
//! );
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;
pub mod views;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        ApiResponse, DataService, DeskError, DeskResult, Entity, Record, Validated,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Entities ===
    pub use crate::entities::{Client, Invoice, Project, Testimonial};

    // === Storage ===
    pub use crate::storage::{InMemoryDataService, Stores};
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoDataService;

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === Client & views ===
    pub use crate::client::{HttpInvoiceService, InvoiceService};
    pub use crate::views::InvoiceManagement;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
