//! Catalog of expert profiles grouped by university.
//!
//! The catalog keeps universities in the order they appear in the source
//! document; a profile's position inside its university is what the
//! [`ExpertId`] codec encodes, so that order must never change after load.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;

use super::expert_id::ExpertId;
use super::profile::Profile;
use super::tag::TagId;
use super::university::{UniversityKey, UniversityRecord};

/// A profile together with its owning university and positional index.
#[derive(Debug, Clone, Copy)]
pub struct ListedExpert<'a> {
    pub university: &'a UniversityKey,
    pub index: usize,
    pub profile: &'a Profile,
}

impl<'a> ListedExpert<'a> {
    /// Identifier used in `/experts/{id}` links.
    pub fn id(&self) -> ExpertId {
        ExpertId::encode(self.university.as_str(), self.index)
    }
}

/// Two or more university keys that derive the same slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCollision {
    pub slug: String,
    pub universities: Vec<UniversityKey>,
}

/// All universities and their profiles, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpertCatalog {
    universities: Vec<(UniversityKey, UniversityRecord)>,
}

impl ExpertCatalog {
    pub fn new(universities: Vec<(UniversityKey, UniversityRecord)>) -> Self {
        Self { universities }
    }

    pub fn universities(&self) -> impl Iterator<Item = (&UniversityKey, &[Profile])> {
        self.universities
            .iter()
            .map(|(key, record)| (key, record.cleaned_profiles.as_slice()))
    }

    pub fn university_count(&self) -> usize {
        self.universities.len()
    }

    pub fn profile_count(&self) -> usize {
        self.universities
            .iter()
            .map(|(_, record)| record.cleaned_profiles.len())
            .sum()
    }

    /// Every profile, flattened in university order then list order.
    pub fn list_all(&self) -> Vec<ListedExpert<'_>> {
        self.universities
            .iter()
            .flat_map(|(key, record)| {
                record
                    .cleaned_profiles
                    .iter()
                    .enumerate()
                    .map(move |(index, profile)| ListedExpert {
                        university: key,
                        index,
                        profile,
                    })
            })
            .collect()
    }

    /// Profiles carrying `tag`, or every profile when `tag` is `None`.
    pub fn filter_by_tag(&self, tag: Option<TagId>) -> Vec<ListedExpert<'_>> {
        let all = self.list_all();
        match tag {
            None => all,
            Some(tag_id) => all
                .into_iter()
                .filter(|expert| expert.profile.has_tag(tag_id))
                .collect(),
        }
    }

    /// Resolves a decoded identifier.
    ///
    /// When several universities share the slug, the first one in source
    /// order that has a profile at the index wins.
    pub fn find(&self, id: &ExpertId) -> Option<ListedExpert<'_>> {
        self.universities
            .iter()
            .filter(|(key, _)| id.matches_university(key.as_str()))
            .find_map(|(key, record)| {
                record
                    .cleaned_profiles
                    .get(id.index())
                    .map(|profile| ListedExpert {
                        university: key,
                        index: id.index(),
                        profile,
                    })
            })
    }

    pub fn find_by_identifier(&self, identifier: &str) -> Option<ListedExpert<'_>> {
        ExpertId::decode(identifier).and_then(|id| self.find(&id))
    }

    /// Groups of universities whose keys derive the same slug.
    pub fn slug_collisions(&self) -> Vec<SlugCollision> {
        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Vec<UniversityKey>> = HashMap::new();

        for (key, _) in &self.universities {
            let slug = key.slug();
            let group = groups.entry(slug.clone()).or_default();
            if group.is_empty() {
                order.push(slug);
            }
            group.push(key.clone());
        }

        order
            .into_iter()
            .filter_map(|slug| {
                let universities = groups.remove(&slug)?;
                (universities.len() > 1).then_some(SlugCollision { slug, universities })
            })
            .collect()
    }
}

impl<'de> Deserialize<'de> for ExpertCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ExpertCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping university names to profile records")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut universities = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, record)) = map.next_entry::<UniversityKey, UniversityRecord>()? {
                    universities.push((key, record));
                }
                Ok(ExpertCatalog::new(universities))
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
