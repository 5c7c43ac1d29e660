//! Directory query handlers.
//!
//! Loading happens once through [`LoadDirectoryHandler`]; every other handler
//! reads the resulting immutable [`ExpertDirectory`](crate::domain::directory::ExpertDirectory).

mod get_expert;
mod list_experts;
mod list_tags;
mod load_directory;
mod read_models;

pub use get_expert::{GetExpertHandler, GetExpertQuery};
pub use list_experts::{ListExpertsHandler, ListExpertsQuery};
pub use list_tags::ListTagsHandler;
pub use load_directory::LoadDirectoryHandler;
pub use read_models::{
    ExpertDetail, ExpertListing, ExpertSummary, ResolvedSubTag, ResolvedTag, TagOption,
    ALL_EXPERTS_LABEL,
};
