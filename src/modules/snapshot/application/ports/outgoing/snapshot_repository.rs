use async_trait::async_trait;
use uuid::Uuid;

use super::snapshot_query::SnapshotResult;
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SnapshotRepositoryError {
    /// CV doesn't exist OR doesn't belong to owner.
    #[error("CV not found")]
    CvNotFound,

    /// Application doesn't exist OR doesn't belong to owner.
    #[error("Application not found")]
    ApplicationNotFound,

    /// Snapshot doesn't exist OR doesn't belong to owner.
    #[error("Snapshot not found")]
    SnapshotNotFound,

    /// A concurrent writer attached a snapshot to the same application
    /// between our replace and our insert; the unique index broke the tie.
    #[error("Snapshot conflict for this application")]
    Conflict,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Validate-then-copy in one transaction: guarded loads of the CV and
    /// (when given) the application, removal of the application's previous
    /// snapshot, the profile read, the ordered inclusion reads, and every
    /// insert commit together or not at all. No partial snapshot is ever
    /// visible.
    async fn create_snapshot(
        &self,
        owner: UserId,
        cv_id: Uuid,
        application_id: Option<Uuid>,
    ) -> Result<SnapshotResult, SnapshotRepositoryError>;

    /// Removes the snapshot wholesale; child rows cascade.
    async fn delete_snapshot(
        &self,
        owner: UserId,
        snapshot_id: Uuid,
    ) -> Result<(), SnapshotRepositoryError>;
}
