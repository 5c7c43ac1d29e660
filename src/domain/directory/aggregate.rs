//! The loaded directory: profile catalog plus tag taxonomy.

use super::catalog::ExpertCatalog;
use super::tag::TagTaxonomy;

/// Immutable snapshot of both source documents.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, Default)]
pub struct ExpertDirectory {
    catalog: ExpertCatalog,
    taxonomy: TagTaxonomy,
}

impl ExpertDirectory {
    pub fn new(catalog: ExpertCatalog, taxonomy: TagTaxonomy) -> Self {
        Self { catalog, taxonomy }
    }

    pub fn catalog(&self) -> &ExpertCatalog {
        &self.catalog
    }

    pub fn taxonomy(&self) -> &TagTaxonomy {
        &self.taxonomy
    }
}
