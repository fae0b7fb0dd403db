//! Server module for building the HTTP server
//!
//! `ServerBuilder` collects one `EntityDescriptor` per record type and
//! exposes them through the generic handlers in [`handlers`].

pub mod builder;
pub mod entity_registry;
pub mod exposure;
pub mod handlers;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use exposure::RestExposure;
