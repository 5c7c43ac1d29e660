//! Application state and top-level router assembly.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::directory::{
    GetExpertHandler, ListExpertsHandler, ListTagsHandler,
};
use crate::config::{ServerConfig, SiteConfig};
use crate::domain::directory::ExpertDirectory;

use super::experts::experts_router;
use super::site::site_router;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for every route: the loaded directory and site settings.
#[derive(Clone)]
pub struct DirectoryAppState {
    pub directory: Arc<ExpertDirectory>,
    pub site: Arc<SiteConfig>,
}

impl DirectoryAppState {
    pub fn new(directory: Arc<ExpertDirectory>, site: SiteConfig) -> Self {
        Self {
            directory,
            site: Arc::new(site),
        }
    }

    pub fn list_experts_handler(&self) -> ListExpertsHandler {
        ListExpertsHandler::new(self.directory.clone())
    }

    pub fn get_expert_handler(&self) -> GetExpertHandler {
        GetExpertHandler::new(self.directory.clone())
    }

    pub fn list_tags_handler(&self) -> ListTagsHandler {
        ListTagsHandler::new(self.directory.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Router
// ════════════════════════════════════════════════════════════════════════════════

/// Builds the full application router with middleware.
pub fn build_router(state: DirectoryAppState, server: &ServerConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(cors_layer(server));

    Router::new()
        .merge(experts_router())
        .merge(site_router())
        .with_state(state)
        .layer(middleware)
}

/// Read-only API: CORS only ever allows GET from the configured origins.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(AllowOrigin::list(origins))
}
