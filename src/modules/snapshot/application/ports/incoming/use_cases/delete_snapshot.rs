use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSnapshotError {
    #[error("Snapshot not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteSnapshotUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, snapshot_id: Uuid) -> Result<(), DeleteSnapshotError>;
}
