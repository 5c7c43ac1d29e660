//! HTTP DTOs for expert endpoints.
//!
//! These types decouple the JSON API from the application read models.

use serde::{Deserialize, Serialize};

use crate::application::handlers::directory::{
    ExpertDetail, ExpertListing, ExpertSummary, ResolvedSubTag, ResolvedTag,
};
use crate::domain::directory::TagId;
use crate::domain::foundation::ErrorCode;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query string of the listing routes (`?tag=3`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListExpertsParams {
    pub tag: Option<TagId>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One expert card.
#[derive(Debug, Clone, Serialize)]
pub struct ExpertSummaryResponse {
    pub id: String,
    pub full_name: String,
    pub title: String,
    pub org_unit: String,
    pub university: String,
}

impl From<ExpertSummary> for ExpertSummaryResponse {
    fn from(summary: ExpertSummary) -> Self {
        Self {
            id: summary.id,
            full_name: summary.full_name,
            title: summary.title,
            org_unit: summary.org_unit,
            university: summary.university,
        }
    }
}

/// Response for `GET /api/experts`.
#[derive(Debug, Clone, Serialize)]
pub struct ExpertListResponse {
    pub heading: String,
    pub selected_tag: Option<TagId>,
    pub total: usize,
    pub experts: Vec<ExpertSummaryResponse>,
}

impl From<ExpertListing> for ExpertListResponse {
    fn from(listing: ExpertListing) -> Self {
        Self {
            heading: listing.heading,
            selected_tag: listing.selected_tag,
            total: listing.experts.len(),
            experts: listing.experts.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubTagResponse {
    pub id: String,
    pub name: String,
}

impl From<ResolvedSubTag> for SubTagResponse {
    fn from(sub: ResolvedSubTag) -> Self {
        Self {
            id: sub.id,
            name: sub.name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagResponse {
    pub id: TagId,
    pub name: String,
    pub subcategories: Vec<SubTagResponse>,
}

impl From<ResolvedTag> for TagResponse {
    fn from(tag: ResolvedTag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            subcategories: tag.subcategories.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response for `GET /api/experts/:id`.
#[derive(Debug, Clone, Serialize)]
pub struct ExpertDetailResponse {
    pub id: String,
    pub full_name: String,
    pub title: String,
    pub university: String,
    pub org_unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief_introduction: Option<String>,
    pub tags: Vec<TagResponse>,
}

impl From<ExpertDetail> for ExpertDetailResponse {
    fn from(detail: ExpertDetail) -> Self {
        Self {
            id: detail.id,
            full_name: detail.full_name,
            title: detail.title,
            university: detail.university,
            org_unit: detail.org_unit,
            telephone: detail.telephone,
            email: detail.email,
            website: detail.website,
            orcid: detail.orcid,
            brief_introduction: detail.brief_introduction,
            tags: detail.tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn expert_not_found(identifier: &str) -> Self {
        Self {
            code: ErrorCode::ExpertNotFound.to_string(),
            message: format!("Expert not found: {}", identifier),
            details: None,
        }
    }
}
