//! HTTP adapter for site-level files (landing redirect, robots.txt, sitemap.xml).

mod handlers;
mod routes;

pub use handlers::{render_robots, render_sitemap};
pub use routes::site_router;
