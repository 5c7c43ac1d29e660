//! HTTP adapters - HTML pages and the read-only JSON API.
//!
//! Each area has its own module for endpoint exposure; `app` wires them
//! together with the shared middleware stack.

mod app;
pub mod experts;
pub mod site;

pub use app::{build_router, DirectoryAppState};
pub use experts::experts_router;
pub use site::site_router;
