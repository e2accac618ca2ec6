use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// The four parallel inclusion relations of a CV, one per library kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CvSection {
    WorkExperience,
    Education,
    Skill,
    Project,
}

impl CvSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CvSection::WorkExperience => "work_experience",
            CvSection::Education => "education",
            CvSection::Skill => "skill",
            CvSection::Project => "project",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum InclusionRepositoryError {
    /// CV doesn't exist OR doesn't belong to owner.
    #[error("CV not found")]
    CvNotFound,

    /// Library item doesn't exist OR doesn't belong to owner.
    #[error("Library item not found")]
    ItemNotFound,

    /// The (cv, item) pair already exists; an item appears in a CV at most
    /// once regardless of its order value.
    #[error("Item already included in this CV")]
    AlreadyIncluded,

    /// The link itself is absent (remove/reorder paths).
    #[error("Inclusion not found")]
    LinkNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// `sort_order` is an opaque caller-supplied integer; no contiguity or
/// uniqueness is required across the links of one CV.
#[async_trait]
pub trait InclusionRepository: Send + Sync {
    async fn add(
        &self,
        owner: UserId,
        cv_id: Uuid,
        section: CvSection,
        item_id: Uuid,
        sort_order: i32,
    ) -> Result<(), InclusionRepositoryError>;

    async fn reorder(
        &self,
        owner: UserId,
        cv_id: Uuid,
        section: CvSection,
        item_id: Uuid,
        sort_order: i32,
    ) -> Result<(), InclusionRepositoryError>;

    async fn remove(
        &self,
        owner: UserId,
        cv_id: Uuid,
        section: CvSection,
        item_id: Uuid,
    ) -> Result<(), InclusionRepositoryError>;
}
