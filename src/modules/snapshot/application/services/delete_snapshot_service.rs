use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::snapshot::application::ports::incoming::use_cases::{
    DeleteSnapshotError, DeleteSnapshotUseCase,
};
use crate::snapshot::application::ports::outgoing::{SnapshotRepository, SnapshotRepositoryError};

pub struct DeleteSnapshotService<R>
where
    R: SnapshotRepository,
{
    snapshot_repository: R,
}

impl<R> DeleteSnapshotService<R>
where
    R: SnapshotRepository,
{
    pub fn new(snapshot_repository: R) -> Self {
        Self {
            snapshot_repository,
        }
    }
}

#[async_trait]
impl<R> DeleteSnapshotUseCase for DeleteSnapshotService<R>
where
    R: SnapshotRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, snapshot_id: Uuid) -> Result<(), DeleteSnapshotError> {
        self.snapshot_repository
            .delete_snapshot(owner, snapshot_id)
            .await
            .map_err(|e| match e {
                SnapshotRepositoryError::SnapshotNotFound => DeleteSnapshotError::NotFound,
                other => DeleteSnapshotError::RepositoryError(other.to_string()),
            })
    }
}
