use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct CreateApplicationData {
    pub owner: UserId,
    pub company: String,
    pub position: String,
    pub status: String,
    pub job_url: Option<String>,
    pub notes: Option<String>,
    pub applied_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct PatchApplicationData {
    pub company: PatchField<String>,
    pub position: PatchField<String>,
    pub status: PatchField<String>,
    pub job_url: PatchField<String>,
    pub notes: PatchField<String>,
    pub applied_at: PatchField<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationResult {
    pub id: Uuid,
    pub owner: UserId,
    pub company: String,
    pub position: String,
    pub status: String,
    pub job_url: Option<String>,
    pub notes: Option<String>,
    pub applied_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApplicationRepositoryError {
    /// Application doesn't exist OR doesn't belong to owner.
    #[error("Application not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn create(
        &self,
        data: CreateApplicationData,
    ) -> Result<ApplicationResult, ApplicationRepositoryError>;

    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<ApplicationResult>, ApplicationRepositoryError>;

    async fn fetch_single(
        &self,
        owner: UserId,
        id: Uuid,
    ) -> Result<ApplicationResult, ApplicationRepositoryError>;

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchApplicationData,
    ) -> Result<ApplicationResult, ApplicationRepositoryError>;

    /// Removes the application; an attached snapshot cascades with it.
    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), ApplicationRepositoryError>;
}
