//! University records keyed by their listing name.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expert_id::{is_tag_suffix, university_slug};
use super::profile::{null_as_default, Profile};

/// Raw university key as it appears in the data, usually ending in ` tag`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniversityKey(String);

impl UniversityKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-facing university name with a trailing `tag` word removed.
    ///
    /// Follows the slug rule: the word is matched in any case and only
    /// dropped when other words precede it.
    pub fn display_name(&self) -> &str {
        let trimmed = self.0.trim_end();
        match trimmed.rsplit_once(char::is_whitespace) {
            Some((rest, last)) if is_tag_suffix(last) && !rest.trim().is_empty() => {
                rest.trim_end()
            }
            _ => trimmed,
        }
    }

    pub fn slug(&self) -> String {
        university_slug(&self.0)
    }
}

impl fmt::Display for UniversityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One university's entry in the profiles document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cleaned_profiles: Vec<Profile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_strips_tag_suffix() {
        assert_eq!(UniversityKey::new("Acme University tag").display_name(), "Acme University");
        assert_eq!(UniversityKey::new("Acme University").display_name(), "Acme University");
    }

    #[test]
    fn display_name_follows_slug_rule_for_tag_word() {
        let key = UniversityKey::new("Acme University TAG");
        assert_eq!(key.display_name(), "Acme University");
        assert_eq!(key.slug(), "acme-university");

        let spaced = UniversityKey::new("Acme  University \t Tag ");
        assert_eq!(spaced.display_name(), "Acme  University");
        assert_eq!(spaced.slug(), "acme-university");

        assert_eq!(UniversityKey::new("Tag").display_name(), "Tag");
        assert_eq!(UniversityKey::new("Tagline University").display_name(), "Tagline University");
    }

    #[test]
    fn slug_matches_codec() {
        assert_eq!(UniversityKey::new("Acme University tag").slug(), "acme-university");
    }

    #[test]
    fn record_without_profiles_is_empty() {
        let record: UniversityRecord = serde_json::from_str(r#"{"source": "web"}"#).unwrap();
        assert!(record.cleaned_profiles.is_empty());
    }

    #[test]
    fn record_with_null_profiles_is_empty() {
        let record: UniversityRecord =
            serde_json::from_str(r#"{"cleaned_profiles": null}"#).unwrap();
        assert!(record.cleaned_profiles.is_empty());
    }
}
