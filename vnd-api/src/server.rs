use crate::{
    api::{create_middleware_stack, handlers},
    config::ServerConfig,
    errors::ApiError,
    services::VendorService,
};
use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use std::{net::SocketAddr, sync::Arc};
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub vendor_service: Arc<VendorService>,
}

pub struct ApiServer {
    app: Router,
    config: ServerConfig,
}

impl ApiServer {
    pub fn new(
        vendor_service: Arc<VendorService>,
        config: ServerConfig,
    ) -> Self {
        let state = AppState { vendor_service };
        let app = build_router(state);
        Self { app, config }
    }

    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr: SocketAddr =
            format!("{}:{}", self.config.host, self.config.port).parse()?;
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("Vendor API server listening on {}", addr);
        info!("Health check available at: http://{}/health", addr);

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    /// Consume and return the underlying Axum Router so callers can serve it
    /// themselves or drive it directly in tests.
    pub fn into_router(self) -> Router {
        self.app
    }
}

/// Vendor routes plus the health probe. The collection path answers with and
/// without a trailing slash.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/vendors",
            get(handlers::list_vendors).post(handlers::create_vendors),
        )
        .route(
            "/api/v1/vendors/",
            get(handlers::list_vendors).post(handlers::create_vendors),
        )
        .route(
            "/api/v1/vendors/{id}",
            get(handlers::get_vendor)
                .put(handlers::update_vendor)
                .patch(handlers::patch_vendor),
        )
        .route("/health", get(health_check))
        .layer(create_middleware_stack())
        .with_state(state)
}

async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if let Err(e) = state.vendor_service.health().await {
        warn!(error = %e, "Storage health check failed");
        return Err(ApiError::ServiceUnavailable(e.to_string()));
    }
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "service": "vnd-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
