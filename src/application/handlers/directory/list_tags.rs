//! ListTags - Query handler for the tag sidebar.

use std::sync::Arc;

use crate::domain::directory::{ExpertDirectory, TagId};

use super::read_models::{TagOption, ALL_EXPERTS_LABEL};

/// Handler producing the sidebar entries with the current selection marked.
pub struct ListTagsHandler {
    directory: Arc<ExpertDirectory>,
}

impl ListTagsHandler {
    pub fn new(directory: Arc<ExpertDirectory>) -> Self {
        Self { directory }
    }

    /// "All Experts" first, then every tag in taxonomy order.
    pub fn handle(&self, selected: Option<TagId>) -> Vec<TagOption> {
        let all = TagOption {
            id: None,
            name: ALL_EXPERTS_LABEL.to_string(),
            selected: selected.is_none(),
        };

        std::iter::once(all)
            .chain(self.directory.taxonomy().tags().iter().map(|tag| TagOption {
                id: Some(tag.id),
                name: tag.name.clone(),
                selected: selected == Some(tag.id),
            }))
            .collect()
    }
}
