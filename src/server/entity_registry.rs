//! Registry of entity descriptors, each contributing its own routes

use axum::Router;
use std::collections::BTreeMap;
use tracing::warn;

/// Describes how to expose one record type over HTTP
///
/// Implemented by every entity module (`TestimonialDescriptor`,
/// `InvoiceDescriptor`, ...).
pub trait EntityDescriptor: Send + Sync {
    /// Singular name, used as the registry key (e.g., "testimonial")
    fn entity_type(&self) -> &str;

    /// Plural name, used as the route prefix (e.g., "testimonials")
    fn plural(&self) -> &str;

    /// Build the routes for this entity
    ///
    /// See [`crate::server::handlers`] for the route table.
    fn build_routes(&self) -> Router;
}

/// Collects the descriptors of every exposed entity
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity descriptor
    ///
    /// Registering the same entity type twice keeps the last descriptor.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        if self.descriptors.contains_key(&entity_type) {
            warn!(entity = %entity_type, "entity registered twice, replacing descriptor");
        }
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Merge the routes of every registered entity
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Registered entity types, in alphabetical order
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }

    /// Route prefixes of the registered entities, in entity type order
    pub fn plurals(&self) -> Vec<&str> {
        self.descriptors.values().map(|d| d.plural()).collect()
    }
}
