use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::cv_repository::CvResult;
use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::outgoing::{
    EducationResult, ProjectResult, SkillResult, WorkExperienceResult,
};

/// A library item joined with its link's order value.
#[derive(Debug, Clone, Serialize)]
pub struct Included<T> {
    pub sort_order: i32,
    #[serde(flatten)]
    pub item: T,
}

/// The composed document: CV fields plus the four included sections, each
/// sorted by `sort_order ASC`, ties broken by inclusion insertion time and
/// then item id.
#[derive(Debug, Clone, Serialize)]
pub struct ComposedCv {
    #[serde(flatten)]
    pub document: CvResult,
    pub work_experiences: Vec<Included<WorkExperienceResult>>,
    pub educations: Vec<Included<EducationResult>>,
    pub skills: Vec<Included<SkillResult>>,
    pub projects: Vec<Included<ProjectResult>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CvQueryError {
    /// CV doesn't exist OR doesn't belong to owner.
    #[error("CV not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CvQuery: Send + Sync {
    async fn fetch_composed(&self, owner: UserId, cv_id: Uuid)
        -> Result<ComposedCv, CvQueryError>;
}
