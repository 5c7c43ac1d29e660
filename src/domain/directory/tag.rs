//! Research-tag taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a top-level research tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(i64);

impl TagId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Finer-grained category under a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
}

/// A research-category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<Vec<Subcategory>>,
}

impl Tag {
    /// Subcategories of this tag, empty when none are defined.
    pub fn subcategories(&self) -> &[Subcategory] {
        self.subcategories.as_deref().unwrap_or_default()
    }

    pub fn find_subcategory(&self, sub_id: &str) -> Option<&Subcategory> {
        self.subcategories().iter().find(|sub| sub.id == sub_id)
    }
}

/// The flat tag list, in the order it was loaded.
///
/// Lookups are linear scans; the taxonomy is small and read once per page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagTaxonomy {
    tags: Vec<Tag>,
}

impl TagTaxonomy {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn find(&self, id: TagId) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.id == id)
    }

    /// Display name for a tag; never fails.
    ///
    /// Unknown ids render as `Tag {id}`.
    pub fn resolve_tag_name(&self, id: TagId) -> String {
        match self.find(id) {
            Some(tag) => tag.name.clone(),
            None => format!("Tag {}", id),
        }
    }

    /// Display name for a sub-tag; echoes `sub_id` when the tag or the
    /// subcategory is unknown.
    pub fn resolve_sub_tag_name(&self, id: TagId, sub_id: &str) -> String {
        self.find(id)
            .and_then(|tag| tag.find_subcategory(sub_id))
            .map(|sub| sub.name.clone())
            .unwrap_or_else(|| sub_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> TagTaxonomy {
        serde_json::from_str(
            r#"[
                {"id": 1, "name": "Oncology"},
                {"id": 2, "name": "Neuroscience", "subcategories": [
                    {"id": "2.1", "name": "Cognitive"},
                    {"id": "2.2", "name": "Clinical"}
                ]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn deserializes_tags_with_and_without_subcategories() {
        let tax = taxonomy();
        assert_eq!(tax.len(), 2);
        assert!(tax.find(TagId::new(1)).unwrap().subcategories().is_empty());
        assert_eq!(tax.find(TagId::new(2)).unwrap().subcategories().len(), 2);
    }

    #[test]
    fn resolve_tag_name_returns_stored_name() {
        let tax = taxonomy();
        assert_eq!(tax.resolve_tag_name(TagId::new(1)), "Oncology");
        assert_eq!(tax.resolve_tag_name(TagId::new(2)), "Neuroscience");
    }

    #[test]
    fn resolve_tag_name_falls_back_for_unknown_id() {
        let tax = taxonomy();
        assert_eq!(tax.resolve_tag_name(TagId::new(42)), "Tag 42");
        assert_eq!(TagTaxonomy::default().resolve_tag_name(TagId::new(-3)), "Tag -3");
    }

    #[test]
    fn resolve_sub_tag_name_finds_subcategory() {
        let tax = taxonomy();
        assert_eq!(tax.resolve_sub_tag_name(TagId::new(2), "2.2"), "Clinical");
    }

    #[test]
    fn resolve_sub_tag_name_echoes_unknown_sub_id() {
        let tax = taxonomy();
        assert_eq!(tax.resolve_sub_tag_name(TagId::new(2), "2.9"), "2.9");
        assert_eq!(tax.resolve_sub_tag_name(TagId::new(1), "1.1"), "1.1");
        assert_eq!(tax.resolve_sub_tag_name(TagId::new(7), "x"), "x");
    }

    #[test]
    fn taxonomy_serializes_back_to_input_shape() {
        let tax = taxonomy();
        let value = serde_json::to_value(&tax).unwrap();
        assert_eq!(value[0], serde_json::json!({"id": 1, "name": "Oncology"}));
        assert_eq!(value[1]["subcategories"][0]["name"], "Cognitive");
    }
}
