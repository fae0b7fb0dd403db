//! Core module containing the record traits, storage trait, errors and
//! request validation

pub mod entity;
pub mod envelope;
pub mod error;
pub mod service;
pub mod validation;

pub use entity::{Entity, Record};
pub use envelope::ApiResponse;
pub use error::{DeskError, DeskResult};
pub use service::DataService;
pub use validation::Validated;
