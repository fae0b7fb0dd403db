//! Entity descriptor for Invoice

use super::model::Invoice;
use crate::core::{DataService, Entity};
use crate::server::entity_registry::EntityDescriptor;
use crate::server::handlers::record_routes;
use axum::Router;
use std::sync::Arc;

/// Descriptor for the Invoice entity
pub struct InvoiceDescriptor {
    pub service: Arc<dyn DataService<Invoice>>,
}

impl InvoiceDescriptor {
    pub fn new(service: Arc<dyn DataService<Invoice>>) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for InvoiceDescriptor {
    fn entity_type(&self) -> &str {
        Invoice::resource_name_singular()
    }

    fn plural(&self) -> &str {
        Invoice::resource_name()
    }

    fn build_routes(&self) -> Router {
        record_routes::<Invoice>(self.service.clone())
    }
}
