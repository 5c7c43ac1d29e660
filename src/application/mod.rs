//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain lookups and coordinates between ports.
//! The directory is read-only, so every handler here is a query.

pub mod handlers;

pub use handlers::directory::{
    GetExpertHandler, GetExpertQuery, ListExpertsHandler, ListExpertsQuery, ListTagsHandler,
    LoadDirectoryHandler,
};
