//! HTMX + Tailwind development server for Coursecast
//!
//! Serves the course search page, the HTMX fragment endpoint behind its
//! form, and the JSON search endpoint.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use coursecast_core::{CoursecastConfig, RuntimeMode, ThumbnailVariant};
use coursecast_search::{DemoBackend, HttpSearchBackend, VideoSearchBackend, VideoSearchError};
use tower_http::cors::CorsLayer;

use crate::handlers::{api_get_videos, search_fragment};
use crate::pages::search_page;

/// Errors raised while starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Search backend could not be constructed
    #[error("Search backend setup failed: {0}")]
    Backend(#[from] VideoSearchError),

    /// Listen address could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested
        addr: String,
        /// Underlying socket error
        source: std::io::Error,
    },

    /// Serving loop terminated with an error
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// Backend answering keyword searches
    pub backend: Arc<dyn VideoSearchBackend>,
    /// Thumbnail variant shown on rendered cards
    pub thumbnail: ThumbnailVariant,
}

impl AppState {
    /// Creates state around an existing backend.
    pub fn new(backend: Arc<dyn VideoSearchBackend>, thumbnail: ThumbnailVariant) -> Self {
        Self { backend, thumbnail }
    }

    /// Picks the backend for the configured runtime mode.
    ///
    /// # Errors
    /// - `WebError::Backend` - HTTP backend could not be built from the search configuration
    pub fn from_config(config: &CoursecastConfig) -> Result<Self, WebError> {
        let backend: Arc<dyn VideoSearchBackend> = match config.runtime_mode {
            RuntimeMode::Production => Arc::new(HttpSearchBackend::new(&config.search)?),
            RuntimeMode::Development => Arc::new(DemoBackend::new()),
        };

        Ok(Self::new(backend, config.search.thumbnail))
    }
}

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/courses/{course_id}/search", get(search_page))
        .route("/courses/{course_id}/search", post(search_fragment))
        .route("/api/get-videos", post(api_get_videos))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the server until it fails.
///
/// # Errors
/// - `WebError::Backend` - Search backend could not be configured
/// - `WebError::Bind` - Listen address unavailable
/// - `WebError::Serve` - Server loop failed
pub async fn run_server(config: CoursecastConfig) -> Result<(), WebError> {
    let state = AppState::from_config(&config)?;
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| WebError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(
        mode = %config.runtime_mode,
        "Coursecast server running on http://{addr}"
    );
    axum::serve(listener, app).await.map_err(WebError::Serve)
}
