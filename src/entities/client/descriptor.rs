//! Entity descriptor for Client

use super::model::Client;
use crate::core::{DataService, Entity};
use crate::server::entity_registry::EntityDescriptor;
use crate::server::handlers::record_routes;
use axum::Router;
use std::sync::Arc;

/// Descriptor for the Client entity
pub struct ClientDescriptor {
    pub service: Arc<dyn DataService<Client>>,
}

impl ClientDescriptor {
    pub fn new(service: Arc<dyn DataService<Client>>) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for ClientDescriptor {
    fn entity_type(&self) -> &str {
        Client::resource_name_singular()
    }

    fn plural(&self) -> &str {
        Client::resource_name()
    }

    fn build_routes(&self) -> Router {
        record_routes::<Client>(self.service.clone())
    }
}
