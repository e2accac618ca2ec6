use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::snapshot::application::ports::outgoing::SnapshotResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSnapshotError {
    #[error("CV not found")]
    CvNotFound,

    #[error("Application not found")]
    ApplicationNotFound,

    /// Lost a replace race against a concurrent create for the same
    /// application. The caller can retry or accept the winner's snapshot.
    #[error("Snapshot conflict for this application")]
    Conflict,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSnapshotUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        cv_id: Uuid,
        application_id: Option<Uuid>,
    ) -> Result<SnapshotResult, CreateSnapshotError>;
}
