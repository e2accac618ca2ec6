use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct CreateCvData {
    pub owner: UserId,
    pub title: String,
    pub template: Option<String>,
    pub is_default: bool,
}

/// Patch semantics:
/// - title/template: Unset => keep, Value => replace
/// - override_summary: Unset => keep, Null => clear, Value => set
/// - is_default: Some(true) atomically demotes any other default first;
///   Some(false) simply clears the flag (a user may have zero defaults)
#[derive(Debug, Clone, Default)]
pub struct PatchCvData {
    pub title: PatchField<String>,
    pub template: PatchField<String>,
    pub override_summary: PatchField<String>,
    pub is_default: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CvResult {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub template: String,
    pub is_default: bool,
    pub override_summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CvRepositoryError {
    /// CV doesn't exist OR doesn't belong to owner.
    #[error("CV not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CvRepository: Send + Sync {
    /// The owner's first CV becomes the default automatically; an explicit
    /// `is_default` demotes the previous default inside the same
    /// transaction.
    async fn create_cv(&self, data: CreateCvData) -> Result<CvResult, CvRepositoryError>;

    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<CvResult>, CvRepositoryError>;

    /// Default-flag changes and field updates commit as one transaction, so
    /// no reader ever observes two defaults for a user.
    async fn patch_cv(
        &self,
        owner: UserId,
        cv_id: Uuid,
        data: PatchCvData,
    ) -> Result<CvResult, CvRepositoryError>;

    /// Inclusion rows cascade with the document; library items are never
    /// touched.
    async fn delete_cv(&self, owner: UserId, cv_id: Uuid) -> Result<(), CvRepositoryError>;
}
