//! HTTP adapter for expert pages and the expert JSON API.

mod dto;
mod handlers;
mod routes;
mod views;

pub use dto::{
    ErrorResponse, ExpertDetailResponse, ExpertListResponse, ExpertSummaryResponse,
    ListExpertsParams, SubTagResponse, TagResponse,
};
pub use routes::experts_router;
pub use views::{render_detail_page, render_listing_page, render_not_found_page, EMPTY_LISTING_MESSAGE};
