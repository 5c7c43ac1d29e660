//! HTTP handlers for expert endpoints.
//!
//! HTML pages and the JSON API share the same application query handlers;
//! only the final rendering differs.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::adapters::http::DirectoryAppState;
use crate::application::handlers::directory::{GetExpertQuery, ListExpertsQuery};
use crate::domain::directory::TagTaxonomy;

use super::dto::{ErrorResponse, ExpertDetailResponse, ExpertListResponse, ListExpertsParams};
use super::views::{render_detail_page, render_listing_page, render_not_found_page};

// ════════════════════════════════════════════════════════════════════════════
// HTML pages
// ════════════════════════════════════════════════════════════════════════════

/// GET /experts - Listing page, optionally filtered with `?tag={id}`
pub async fn experts_page(
    State(state): State<DirectoryAppState>,
    Query(params): Query<ListExpertsParams>,
) -> Html<String> {
    let listing = state
        .list_experts_handler()
        .handle(ListExpertsQuery { tag: params.tag });
    let tags = state.list_tags_handler().handle(params.tag);

    Html(render_listing_page(&state.site, &listing, &tags))
}

/// GET /experts/:id - Detail page for one expert
pub async fn expert_page(
    State(state): State<DirectoryAppState>,
    Path(identifier): Path<String>,
) -> Response {
    match state.get_expert_handler().handle(GetExpertQuery { identifier }) {
        Some(detail) => Html(render_detail_page(&state.site, &detail)).into_response(),
        None => (StatusCode::NOT_FOUND, Html(render_not_found_page(&state.site))).into_response(),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// JSON API
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/experts - Expert summaries, optionally filtered with `?tag={id}`
pub async fn list_experts(
    State(state): State<DirectoryAppState>,
    Query(params): Query<ListExpertsParams>,
) -> Json<ExpertListResponse> {
    let listing = state
        .list_experts_handler()
        .handle(ListExpertsQuery { tag: params.tag });

    Json(listing.into())
}

/// GET /api/experts/:id - Full expert record
pub async fn get_expert(
    State(state): State<DirectoryAppState>,
    Path(identifier): Path<String>,
) -> Response {
    let query = GetExpertQuery {
        identifier: identifier.clone(),
    };

    match state.get_expert_handler().handle(query) {
        Some(detail) => {
            let response: ExpertDetailResponse = detail.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::expert_not_found(&identifier)),
        )
            .into_response(),
    }
}

/// GET /api/tags - The tag taxonomy as loaded
pub async fn list_tags(State(state): State<DirectoryAppState>) -> Json<TagTaxonomy> {
    Json(state.directory.taxonomy().clone())
}
