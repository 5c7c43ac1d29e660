//! DirectorySource port for loading the static directory documents

use async_trait::async_trait;

use crate::domain::directory::{ExpertCatalog, TagTaxonomy};
use crate::domain::foundation::DomainError;

/// Read access to the two documents backing the directory.
///
/// Implementations are consulted once at startup; the results are immutable
/// for the lifetime of the process.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Load the per-university profile document
    async fn load_catalog(&self) -> Result<ExpertCatalog, DomainError>;

    /// Load the tag taxonomy document
    async fn load_taxonomy(&self) -> Result<TagTaxonomy, DomainError>;

    /// Human-readable description of where the data comes from, for logs
    fn describe(&self) -> String;
}
