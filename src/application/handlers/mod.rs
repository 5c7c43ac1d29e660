//! Application handlers.
//!
//! Query handlers that orchestrate domain lookups.

pub mod directory;
