//! Foundation module - Shared domain primitives.
//!
//! Contains the error types that form the failure vocabulary of the
//! expert directory domain.

mod errors;

pub use errors::{DomainError, ErrorCode, ValidationError};
