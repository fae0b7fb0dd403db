//! Fluent builder that assembles the bizdesk router and serves it

use super::entity_registry::{EntityDescriptor, EntityRegistry};
use super::exposure::RestExposure;
use crate::entities::{
    ClientDescriptor, InvoiceDescriptor, ProjectDescriptor, TestimonialDescriptor,
};
use crate::storage::Stores;
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

/// Builder for creating HTTP servers with registered entity routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_stores(Stores::in_memory())
///     .build();
/// ```
pub struct ServerBuilder {
    entity_registry: EntityRegistry,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            entity_registry: EntityRegistry::new(),
            custom_routes: Vec::new(),
        }
    }

    /// Register one entity descriptor
    pub fn register(mut self, descriptor: impl EntityDescriptor + 'static) -> Self {
        self.entity_registry.register(Box::new(descriptor));
        self
    }

    /// Register all four record types against the given stores
    pub fn with_stores(self, stores: Stores) -> Self {
        self.register(TestimonialDescriptor::new(stores.testimonials))
            .register(InvoiceDescriptor::new(stores.invoices))
            .register(ProjectDescriptor::new(stores.projects))
            .register(ClientDescriptor::new(stores.clients))
    }

    /// Add routes that don't fit the record pattern
    ///
    /// # Example
    ///
    /// ```ignore
    /// let extra = Router::new().route("/version", get(version_handler));
    ///
    /// ServerBuilder::new()
    ///     .with_stores(stores)
    ///     .with_custom_routes(extra)
    ///     .build();
    /// ```
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Entity types registered so far
    pub fn entity_types(&self) -> Vec<&str> {
        self.entity_registry.entity_types()
    }

    /// Build the final REST router
    pub fn build(self) -> Router {
        RestExposure::build_router(&self.entity_registry, self.custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `addr` and serves until SIGTERM or Ctrl+C.
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .with_stores(stores)
    ///     .serve("127.0.0.1:3000").await?;
    /// ```
    pub async fn serve(self, addr: &str) -> Result<()> {
        let listener = TcpListener::bind(addr).await?;
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` completes
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let entity_types = self.entity_types().join(", ");
        let app = self.build();

        tracing::info!(
            addr = %listener.local_addr()?,
            entities = %entity_types,
            "Server listening"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, shutting down");
        },
        _ = terminate => {
            tracing::info!("SIGTERM received, shutting down");
        },
    }
}
