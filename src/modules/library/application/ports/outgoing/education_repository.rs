use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::LibraryRepositoryError;
use crate::auth::application::domain::entities::UserId;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct CreateEducationData {
    pub owner: UserId,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PatchEducationData {
    pub institution: PatchField<String>,
    pub degree: PatchField<String>,
    pub field_of_study: PatchField<String>,
    pub start_date: PatchField<NaiveDate>,
    pub end_date: PatchField<NaiveDate>,
    pub description: PatchField<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationResult {
    pub id: Uuid,
    pub owner: UserId,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn create(
        &self,
        data: CreateEducationData,
    ) -> Result<EducationResult, LibraryRepositoryError>;

    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<EducationResult>, LibraryRepositoryError>;

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchEducationData,
    ) -> Result<EducationResult, LibraryRepositoryError>;

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), LibraryRepositoryError>;
}
