//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `directory` - Data sources for the profile and tag documents
//! - `http` - Axum routes rendering pages and JSON

pub mod directory;
pub mod http;

pub use directory::{FsDirectorySource, InMemoryDirectorySource};
