//! Expert profile records as scraped from university listings.

use serde::{Deserialize, Deserializer, Serialize};

use super::tag::TagId;

const NAME_FALLBACK: &str = "N/A";

/// Name for display, `N/A` when the scrape produced none.
pub fn expert_display_name(full_name: &str) -> &str {
    if full_name.trim().is_empty() {
        NAME_FALLBACK
    } else {
        full_name
    }
}

/// Deserializes an explicit `null` as the type's default.
pub(super) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A tag assignment on a profile, optionally narrowed to sub-tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileTag {
    pub tag_id: TagId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_id: Option<Vec<String>>,
}

impl ProfileTag {
    pub fn sub_ids(&self) -> &[String] {
        self.sub_id.as_deref().unwrap_or_default()
    }
}

/// One expert's data record.
///
/// Missing or `null` text fields deserialize as empty strings so that
/// partially scraped profiles still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub org_unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief_introduction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<ProfileTag>>,
}

impl Profile {
    /// Tag assignments in stored order, empty when the profile has none.
    pub fn tags(&self) -> &[ProfileTag] {
        self.tag_ids.as_deref().unwrap_or_default()
    }

    /// Whether the profile carries the given top-level tag.
    ///
    /// Sub-tags are not consulted.
    pub fn has_tag(&self, tag_id: TagId) -> bool {
        self.tags().iter().any(|tag| tag.tag_id == tag_id)
    }

    pub fn display_name(&self) -> &str {
        expert_display_name(&self.full_name)
    }
}
