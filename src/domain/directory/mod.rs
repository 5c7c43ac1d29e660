//! Directory module - Expert profiles, universities and research tags.
//!
//! # Key Concepts
//!
//! - **ExpertCatalog**: universities in source order, each with its profiles
//! - **TagTaxonomy**: flat list of research tags with optional subcategories
//! - **ExpertId**: `{university-slug}-{index}` identifier used in URLs
//! - **ExpertDirectory**: catalog and taxonomy loaded together

mod aggregate;
mod catalog;
mod expert_id;
mod profile;
mod tag;
mod university;

pub use aggregate::ExpertDirectory;
pub use catalog::{ExpertCatalog, ListedExpert, SlugCollision};
pub use expert_id::{university_slug, ExpertId};
pub use profile::{expert_display_name, Profile, ProfileTag};
pub use tag::{Subcategory, Tag, TagId, TagTaxonomy};
pub use university::{UniversityKey, UniversityRecord};
