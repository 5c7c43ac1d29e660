//! Route configuration for expert endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::DirectoryAppState;

use super::handlers::{expert_page, experts_page, get_expert, list_experts, list_tags};

/// Creates the expert router.
///
/// Routes:
/// - `GET /experts` - Listing page (`?tag={id}` filters)
/// - `GET /experts/:id` - Detail page
/// - `GET /api/experts` - Listing as JSON (`?tag={id}` filters)
/// - `GET /api/experts/:id` - Expert as JSON
/// - `GET /api/tags` - Tag taxonomy as JSON
pub fn experts_router() -> Router<DirectoryAppState> {
    Router::new()
        .route("/experts", get(experts_page))
        .route("/experts/:id", get(expert_page))
        .route("/api/experts", get(list_experts))
        .route("/api/experts/:id", get(get_expert))
        .route("/api/tags", get(list_tags))
}
