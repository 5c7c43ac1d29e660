//! ListExperts - Query handler for the filterable expert listing.

use std::sync::Arc;

use crate::domain::directory::{ExpertDirectory, TagId};

use super::read_models::{ExpertListing, ExpertSummary, ALL_EXPERTS_LABEL};

/// Query for experts, optionally restricted to one top-level tag.
#[derive(Debug, Clone, Default)]
pub struct ListExpertsQuery {
    pub tag: Option<TagId>,
}

/// Handler for listing experts.
pub struct ListExpertsHandler {
    directory: Arc<ExpertDirectory>,
}

impl ListExpertsHandler {
    pub fn new(directory: Arc<ExpertDirectory>) -> Self {
        Self { directory }
    }

    pub fn handle(&self, query: ListExpertsQuery) -> ExpertListing {
        let heading = match query.tag {
            Some(tag) => self.directory.taxonomy().resolve_tag_name(tag),
            None => ALL_EXPERTS_LABEL.to_string(),
        };

        let experts = self
            .directory
            .catalog()
            .filter_by_tag(query.tag)
            .into_iter()
            .map(ExpertSummary::from)
            .collect();

        ExpertListing {
            heading,
            selected_tag: query.tag,
            experts,
        }
    }
}
