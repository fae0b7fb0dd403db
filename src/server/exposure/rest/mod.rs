//! REST API exposure
//!
//! Turns the registered entities into one Axum `Router`, adding health
//! checks, request tracing and CORS for the browser frontend.

use crate::server::entity_registry::EntityRegistry;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Entity routes from the registry
    /// - Custom routes
    pub fn build_router(registry: &EntityRegistry, custom_routes: Vec<Router>) -> Router {
        let app = custom_routes
            .into_iter()
            .fold(Self::health_routes().merge(registry.build_routes()), |app, custom| {
                app.merge(custom)
            });

        app.layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "bizdesk"
        }))
    }
}
