//! Route configuration for site-level endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::DirectoryAppState;

use super::handlers::{home, robots_txt, sitemap_xml};

/// Creates the site router.
///
/// Routes:
/// - `GET /` - Redirect to `/experts`
/// - `GET /robots.txt` - Crawler rules
/// - `GET /sitemap.xml` - Sitemap
pub fn site_router() -> Router<DirectoryAppState> {
    Router::new()
        .route("/", get(home))
        .route("/robots.txt", get(robots_txt))
        .route("/sitemap.xml", get(sitemap_xml))
}
