//! Entity descriptor for Project

use super::model::Project;
use crate::core::{DataService, Entity};
use crate::server::entity_registry::EntityDescriptor;
use crate::server::handlers::record_routes;
use axum::Router;
use std::sync::Arc;

/// Descriptor for the Project entity
pub struct ProjectDescriptor {
    pub service: Arc<dyn DataService<Project>>,
}

impl ProjectDescriptor {
    pub fn new(service: Arc<dyn DataService<Project>>) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for ProjectDescriptor {
    fn entity_type(&self) -> &str {
        Project::resource_name_singular()
    }

    fn plural(&self) -> &str {
        Project::resource_name()
    }

    fn build_routes(&self) -> Router {
        record_routes::<Project>(self.service.clone())
    }
}
