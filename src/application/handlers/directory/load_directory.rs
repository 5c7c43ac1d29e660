//! LoadDirectory - Builds the immutable directory from a data source.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::directory::ExpertDirectory;
use crate::domain::foundation::DomainError;
use crate::ports::DirectorySource;

/// Handler that reads both documents and assembles the directory.
pub struct LoadDirectoryHandler {
    source: Arc<dyn DirectorySource>,
}

impl LoadDirectoryHandler {
    pub fn new(source: Arc<dyn DirectorySource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self) -> Result<ExpertDirectory, DomainError> {
        let catalog = self.source.load_catalog().await?;
        let taxonomy = self.source.load_taxonomy().await?;

        for collision in catalog.slug_collisions() {
            let keys: Vec<&str> = collision.universities.iter().map(|k| k.as_str()).collect();
            warn!(
                slug = %collision.slug,
                universities = ?keys,
                "Universities share a URL slug; identifiers resolve to the first match"
            );
        }

        info!(
            source = %self.source.describe(),
            universities = catalog.university_count(),
            profiles = catalog.profile_count(),
            tags = taxonomy.len(),
            "Directory loaded"
        );

        Ok(ExpertDirectory::new(catalog, taxonomy))
    }
}
