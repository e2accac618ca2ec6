use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::LibraryRepositoryError;
use crate::auth::application::domain::entities::UserId;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct CreateSkillData {
    pub owner: UserId,
    pub name: String,
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PatchSkillData {
    pub name: PatchField<String>,
    pub proficiency: PatchField<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillResult {
    pub id: Uuid,
    pub owner: UserId,
    pub name: String,
    pub proficiency: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create(&self, data: CreateSkillData) -> Result<SkillResult, LibraryRepositoryError>;

    async fn list_for_owner(&self, owner: UserId)
        -> Result<Vec<SkillResult>, LibraryRepositoryError>;

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchSkillData,
    ) -> Result<SkillResult, LibraryRepositoryError>;

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), LibraryRepositoryError>;
}
