//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors)
//! - `directory` - Expert catalog, tag taxonomy and the identifier codec

pub mod directory;
pub mod foundation;
