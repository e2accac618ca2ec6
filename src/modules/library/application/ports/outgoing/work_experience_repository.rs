use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::LibraryRepositoryError;
use crate::auth::application::domain::entities::UserId;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct CreateWorkExperienceData {
    pub owner: UserId,
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub summary: Option<String>,
}

/// Patch semantics:
/// - company/role/start_date/is_current: Unset => keep, Value => replace
/// - location/end_date/summary: Unset => keep, Null => clear, Value => set
#[derive(Debug, Clone, Default)]
pub struct PatchWorkExperienceData {
    pub company: PatchField<String>,
    pub role: PatchField<String>,
    pub location: PatchField<String>,
    pub start_date: PatchField<NaiveDate>,
    pub end_date: PatchField<NaiveDate>,
    pub is_current: PatchField<bool>,
    pub summary: PatchField<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkExperienceResult {
    pub id: Uuid,
    pub owner: UserId,
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait WorkExperienceRepository: Send + Sync {
    async fn create(
        &self,
        data: CreateWorkExperienceData,
    ) -> Result<WorkExperienceResult, LibraryRepositoryError>;

    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<WorkExperienceResult>, LibraryRepositoryError>;

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchWorkExperienceData,
    ) -> Result<WorkExperienceResult, LibraryRepositoryError>;

    /// Deletes the row. Inclusion links referencing it are removed by the
    /// store's cascading FKs in the same statement's transaction; snapshots
    /// hold value copies and are untouched.
    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), LibraryRepositoryError>;
}
