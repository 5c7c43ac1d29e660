//! In-memory directory source.
//!
//! Serves documents already held in memory. Used by tests and for embedding
//! fixture data without touching the filesystem.

use async_trait::async_trait;

use crate::domain::directory::{ExpertCatalog, TagTaxonomy};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::DirectorySource;

#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectorySource {
    catalog: ExpertCatalog,
    taxonomy: TagTaxonomy,
}

impl InMemoryDirectorySource {
    pub fn new(catalog: ExpertCatalog, taxonomy: TagTaxonomy) -> Self {
        Self { catalog, taxonomy }
    }

    /// Builds a source from the raw JSON text of both documents.
    pub fn from_json(profiles_json: &str, tags_json: &str) -> Result<Self, DomainError> {
        let catalog = serde_json::from_str(profiles_json).map_err(|e| {
            DomainError::new(ErrorCode::DataFormatInvalid, format!("Invalid profiles document: {}", e))
        })?;
        let taxonomy = serde_json::from_str(tags_json).map_err(|e| {
            DomainError::new(ErrorCode::DataFormatInvalid, format!("Invalid tags document: {}", e))
        })?;
        Ok(Self::new(catalog, taxonomy))
    }
}

#[async_trait]
impl DirectorySource for InMemoryDirectorySource {
    async fn load_catalog(&self) -> Result<ExpertCatalog, DomainError> {
        Ok(self.catalog.clone())
    }

    async fn load_taxonomy(&self) -> Result<TagTaxonomy, DomainError> {
        Ok(self.taxonomy.clone())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
