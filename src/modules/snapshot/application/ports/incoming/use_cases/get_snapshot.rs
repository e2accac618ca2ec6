use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::snapshot::application::ports::outgoing::SnapshotResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSnapshotError {
    #[error("Snapshot not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSnapshotUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        snapshot_id: Uuid,
    ) -> Result<SnapshotResult, GetSnapshotError>;
}
