//! URL identifier codec for expert profiles.
//!
//! An identifier is the university slug followed by `-{index}`, where the
//! index is the profile's position in that university's list. Decoding scans
//! hyphen segments from the end and takes the first all-digit segment as the
//! index, so it stays compatible with links already published.

use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

const TAG_SUFFIX: &str = "tag";

/// Derives the URL slug of a university key.
///
/// Lowercases, joins whitespace-separated words with `-`, drops a trailing
/// ` tag` word and removes every character outside `[a-z0-9-]`.
pub fn university_slug(university_key: &str) -> String {
    let lowered = university_key.to_lowercase();
    let mut words: Vec<&str> = lowered.split_whitespace().collect();
    if words.len() > 1 && words.last().is_some_and(|word| is_tag_suffix(word)) {
        words.pop();
    }

    words
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Whether a whitespace-separated word is the `tag` suffix, in any case.
pub(super) fn is_tag_suffix(word: &str) -> bool {
    word.to_lowercase() == TAG_SUFFIX
}

/// A decoded expert identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpertId {
    university_slug: String,
    index: usize,
}

impl ExpertId {
    /// Builds the identifier for the profile at `index` of `university_key`.
    pub fn encode(university_key: &str, index: usize) -> Self {
        Self {
            university_slug: university_slug(university_key),
            index,
        }
    }

    /// Parses an identifier string; `None` when no segment is all digits.
    pub fn decode(identifier: &str) -> Option<Self> {
        let segments: Vec<&str> = identifier.split('-').collect();
        let position = segments.iter().rposition(|segment| is_index_segment(segment))?;
        let index = segments[position].parse::<usize>().ok()?;

        Some(Self {
            university_slug: segments[..position].join("-"),
            index,
        })
    }

    pub fn university_slug(&self) -> &str {
        &self.university_slug
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this identifier points into the given university.
    pub fn matches_university(&self, university_key: &str) -> bool {
        university_slug(university_key) == self.university_slug
    }
}

fn is_index_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for ExpertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.university_slug, self.index)
    }
}

impl FromStr for ExpertId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s).ok_or_else(|| {
            ValidationError::invalid_format("identifier", "no numeric index segment")
        })
    }
}
