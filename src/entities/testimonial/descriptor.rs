//! Entity descriptor for Testimonial

use super::model::Testimonial;
use crate::core::{DataService, Entity};
use crate::server::entity_registry::EntityDescriptor;
use crate::server::handlers::record_routes;
use axum::Router;
use std::sync::Arc;

/// Descriptor for the Testimonial entity
pub struct TestimonialDescriptor {
    pub service: Arc<dyn DataService<Testimonial>>,
}

impl TestimonialDescriptor {
    pub fn new(service: Arc<dyn DataService<Testimonial>>) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for TestimonialDescriptor {
    fn entity_type(&self) -> &str {
        Testimonial::resource_name_singular()
    }

    fn plural(&self) -> &str {
        Testimonial::resource_name()
    }

    fn build_routes(&self) -> Router {
        record_routes::<Testimonial>(self.service.clone())
    }
}
