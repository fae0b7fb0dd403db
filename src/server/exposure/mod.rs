//! API exposure modules
//!
//! Each exposure consumes the entity registry and produces a Router for its
//! protocol. Only REST is provided.

pub mod rest;

pub use rest::RestExposure;
