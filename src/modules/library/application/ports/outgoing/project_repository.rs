use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::LibraryRepositoryError;
use crate::auth::application::domain::entities::UserId;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub owner: UserId,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    /// Ordered free-text technology tags; stored as JSONB, replaced whole.
    pub tech_stack: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// tech_stack: Value(vec) replaces the whole array (no merge).
#[derive(Debug, Clone, Default)]
pub struct PatchProjectData {
    pub name: PatchField<String>,
    pub description: PatchField<String>,
    pub url: PatchField<String>,
    pub tech_stack: PatchField<Vec<String>>,
    pub start_date: PatchField<NaiveDate>,
    pub end_date: PatchField<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectResult {
    pub id: Uuid,
    pub owner: UserId,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub tech_stack: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectResult, LibraryRepositoryError>;

    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<ProjectResult>, LibraryRepositoryError>;

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectResult, LibraryRepositoryError>;

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), LibraryRepositoryError>;
}
