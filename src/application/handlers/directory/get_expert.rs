//! GetExpert - Query handler for a single expert by URL identifier.

use std::sync::Arc;

use tracing::debug;

use crate::domain::directory::{ExpertDirectory, ExpertId};

use super::read_models::ExpertDetail;

/// Query for one expert by the identifier found in `/experts/{id}`.
#[derive(Debug, Clone)]
pub struct GetExpertQuery {
    pub identifier: String,
}

/// Handler for looking up one expert.
pub struct GetExpertHandler {
    directory: Arc<ExpertDirectory>,
}

impl GetExpertHandler {
    pub fn new(directory: Arc<ExpertDirectory>) -> Self {
        Self { directory }
    }

    /// Returns `None` for identifiers that do not decode, name an unknown
    /// university, or point past the end of its profile list.
    pub fn handle(&self, query: GetExpertQuery) -> Option<ExpertDetail> {
        let id = match query.identifier.parse::<ExpertId>() {
            Ok(id) => id,
            Err(e) => {
                debug!(identifier = %query.identifier, error = %e, "Malformed expert identifier");
                return None;
            }
        };

        let found = self.directory.catalog().find(&id);
        if found.is_none() {
            debug!(identifier = %query.identifier, "Expert identifier did not resolve");
        }
        found.map(|expert| ExpertDetail::from_listed(expert, self.directory.taxonomy()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> GetExpertHandler {
        let catalog = serde_json::from_str(
            r#"{"Acme University tag": {"cleaned_profiles": [
                {"full_name": "Jane Doe", "tag_ids": [{"tag_id": 1}]}
            ]}}"#,
        )
        .unwrap();
        let taxonomy = serde_json::from_str(r#"[{"id": 1, "name": "Oncology"}]"#).unwrap();
        GetExpertHandler::new(Arc::new(ExpertDirectory::new(catalog, taxonomy)))
    }

    fn query(identifier: &str) -> GetExpertQuery {
        GetExpertQuery {
            identifier: identifier.to_string(),
        }
    }

    #[test]
    fn finds_expert_by_identifier() {
        let detail = handler().handle(query("acme-university-0")).unwrap();
        assert_eq!(detail.full_name, "Jane Doe");
        assert_eq!(detail.university, "Acme University");
        assert_eq!(detail.tags[0].name, "Oncology");
    }

    #[test]
    fn out_of_range_index_is_not_found() {
        assert!(handler().handle(query("acme-university-99")).is_none());
    }

    #[test]
    fn malformed_identifier_is_not_found() {
        assert!(handler().handle(query("acme-university")).is_none());
        assert!(handler().handle(query("")).is_none());
    }

    #[test]
    fn unknown_university_is_not_found() {
        assert!(handler().handle(query("beta-institute-0")).is_none());
    }
}
