//! Main webserver implementation
//!
//! The WebServer owns the root controller state and wires it into the axum
//! router. The catalog arrives through an injected `CatalogProvider`.

use std::future::Future;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use shared::{Component, cart_info, logging};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::traits::CatalogProvider;
use crate::web::handlers::{api, pages};

/// Main webserver struct
#[derive(Clone)]
pub struct WebServer {
    state: Arc<AppState>,
    static_dir: PathBuf,
}

impl WebServer {
    /// Create a webserver around an already-built state
    pub fn new(state: AppState, static_dir: impl AsRef<Path>) -> Self {
        Self {
            state: Arc::new(state),
            static_dir: static_dir.as_ref().to_path_buf(),
        }
    }

    /// Load the catalog from `provider` and start with an empty cart
    pub async fn from_provider<P>(provider: &P, max_items: usize, static_dir: impl AsRef<Path>) -> WebServerResult<Self>
    where
        P: CatalogProvider + ?Sized,
    {
        if max_items == 0 {
            return Err(WebServerError::config("max_items must be at least 1"));
        }
        let catalog = provider.load().await?;
        if catalog.is_empty() {
            cart_info!(Component::Catalog, "📭 Catalog from {} is empty", provider.describe());
        }
        Ok(Self::new(AppState::new(catalog, max_items), static_dir))
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Pages
            .route("/", get(pages::browse))
            .route("/cart", get(pages::cart))
            .route("/checkout", get(pages::receipt))
            .route("/cart/add", post(pages::add))
            .route("/cart/remove", post(pages::remove))
            .route("/cart/reorder", post(pages::reorder))
            .route("/cart/move", post(pages::move_course))
            .route("/cart/checkout", post(pages::checkout))

            // API routes
            .route("/api/courses", get(api::list_courses))
            .route("/api/cart", get(api::get_cart))
            .route("/api/cart/add", post(api::add))
            .route("/api/cart/remove", post(api::remove))
            .route("/api/cart/reorder", post(api::reorder))
            .route("/api/cart/move", post(api::move_course))
            .route("/api/cart/checkout", post(api::checkout))

            // Health check
            .route("/health", get(api::health_check))

            // Stylesheet and drag-and-drop script
            .nest_service("/static", ServeDir::new(&self.static_dir))

            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.state.clone())
    }

    /// Serve on `addr` until `shutdown` resolves
    pub async fn run<F>(&self, addr: SocketAddr, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            logging::log_error(Component::Server, "Binding listener", &e);
            WebServerError::ServerStartupFailed {
                address: addr.to_string(),
            }
        })?;

        cart_info!(Component::Server, "🌐 Course cart listening on http://{}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }
}
