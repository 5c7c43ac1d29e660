//! Read models produced by the directory query handlers.

use crate::domain::directory::{expert_display_name, ListedExpert, TagId, TagTaxonomy};

/// Heading shown when no tag filter is active.
pub const ALL_EXPERTS_LABEL: &str = "All Experts";

/// Card-level view of one expert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpertSummary {
    pub id: String,
    pub full_name: String,
    pub title: String,
    pub org_unit: String,
    pub university: String,
}

impl ExpertSummary {
    pub fn display_name(&self) -> &str {
        expert_display_name(&self.full_name)
    }
}

impl From<ListedExpert<'_>> for ExpertSummary {
    fn from(expert: ListedExpert<'_>) -> Self {
        Self {
            id: expert.id().to_string(),
            full_name: expert.profile.full_name.clone(),
            title: expert.profile.title.clone(),
            org_unit: expert.profile.org_unit.clone(),
            university: expert.university.display_name().to_string(),
        }
    }
}

/// Result of listing experts, optionally filtered by one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpertListing {
    pub heading: String,
    pub selected_tag: Option<TagId>,
    pub experts: Vec<ExpertSummary>,
}

impl ExpertListing {
    pub fn is_empty(&self) -> bool {
        self.experts.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSubTag {
    pub id: String,
    pub name: String,
}

/// A profile's tag with display names filled in from the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTag {
    pub id: TagId,
    pub name: String,
    pub subcategories: Vec<ResolvedSubTag>,
}

/// Full view of one expert for the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpertDetail {
    pub id: String,
    pub full_name: String,
    pub title: String,
    pub university: String,
    pub org_unit: String,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub orcid: Option<String>,
    pub brief_introduction: Option<String>,
    pub tags: Vec<ResolvedTag>,
}

impl ExpertDetail {
    pub fn from_listed(expert: ListedExpert<'_>, taxonomy: &TagTaxonomy) -> Self {
        let profile = expert.profile;
        let tags = profile
            .tags()
            .iter()
            .map(|assigned| ResolvedTag {
                id: assigned.tag_id,
                name: taxonomy.resolve_tag_name(assigned.tag_id),
                subcategories: assigned
                    .sub_ids()
                    .iter()
                    .map(|sub_id| ResolvedSubTag {
                        id: sub_id.clone(),
                        name: taxonomy.resolve_sub_tag_name(assigned.tag_id, sub_id),
                    })
                    .collect(),
            })
            .collect();

        Self {
            id: expert.id().to_string(),
            full_name: profile.full_name.clone(),
            title: profile.title.clone(),
            university: expert.university.display_name().to_string(),
            org_unit: profile.org_unit.clone(),
            telephone: profile.telephone.clone(),
            email: profile.email.clone(),
            website: profile.website.clone(),
            orcid: profile.orcid.clone(),
            brief_introduction: profile.brief_introduction.clone(),
            tags,
        }
    }

    pub fn display_name(&self) -> &str {
        expert_display_name(&self.full_name)
    }
}

/// One selectable entry of the tag sidebar. `id` is `None` for "All Experts".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOption {
    pub id: Option<TagId>,
    pub name: String,
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directory::{ExpertCatalog, TagTaxonomy};

    fn fixtures() -> (ExpertCatalog, TagTaxonomy) {
        let catalog = serde_json::from_str(
            r#"{"Acme University tag": {"cleaned_profiles": [
                {"full_name": "Jane Doe", "title": "Professor", "org_unit": "Medicine",
                 "email": "jane@acme.edu",
                 "tag_ids": [{"tag_id": 2, "sub_id": ["2.1", "2.9"]}, {"tag_id": 8}]},
                {"full_name": ""}
            ]}}"#,
        )
        .unwrap();
        let taxonomy = serde_json::from_str(
            r#"[{"id": 2, "name": "Neuroscience", "subcategories": [{"id": "2.1", "name": "Cognitive"}]}]"#,
        )
        .unwrap();
        (catalog, taxonomy)
    }

    #[test]
    fn summary_carries_id_and_university_display_name() {
        let (catalog, _) = fixtures();
        let summary = ExpertSummary::from(catalog.list_all()[0]);
        assert_eq!(summary.id, "acme-university-0");
        assert_eq!(summary.university, "Acme University");
        assert_eq!(summary.display_name(), "Jane Doe");
    }

    #[test]
    fn summary_display_name_falls_back() {
        let (catalog, _) = fixtures();
        let summary = ExpertSummary::from(catalog.list_all()[1]);
        assert_eq!(summary.display_name(), "N/A");
    }

    #[test]
    fn detail_resolves_tags_and_sub_tags() {
        let (catalog, taxonomy) = fixtures();
        let detail = ExpertDetail::from_listed(catalog.list_all()[0], &taxonomy);

        assert_eq!(detail.tags.len(), 2);
        assert_eq!(detail.tags[0].name, "Neuroscience");
        assert_eq!(detail.tags[0].subcategories[0].name, "Cognitive");
        assert_eq!(detail.tags[0].subcategories[1].name, "2.9");
        assert_eq!(detail.tags[1].name, "Tag 8");
        assert!(detail.tags[1].subcategories.is_empty());
        assert_eq!(detail.email.as_deref(), Some("jane@acme.edu"));
    }
}
