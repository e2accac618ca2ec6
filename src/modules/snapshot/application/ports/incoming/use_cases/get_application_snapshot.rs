use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::snapshot::application::ports::outgoing::SnapshotResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetApplicationSnapshotError {
    /// Covers an absent application, a foreign application and an
    /// application that simply has no snapshot yet.
    #[error("Snapshot not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetApplicationSnapshotUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        application_id: Uuid,
    ) -> Result<SnapshotResult, GetApplicationSnapshotError>;
}
