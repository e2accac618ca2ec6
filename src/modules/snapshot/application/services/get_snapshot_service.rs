use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::snapshot::application::ports::incoming::use_cases::{
    GetSnapshotError, GetSnapshotUseCase,
};
use crate::snapshot::application::ports::outgoing::{
    SnapshotQuery, SnapshotQueryError, SnapshotResult,
};

pub struct GetSnapshotService<Q>
where
    Q: SnapshotQuery,
{
    snapshot_query: Q,
}

impl<Q> GetSnapshotService<Q>
where
    Q: SnapshotQuery,
{
    pub fn new(snapshot_query: Q) -> Self {
        Self { snapshot_query }
    }
}

#[async_trait]
impl<Q> GetSnapshotUseCase for GetSnapshotService<Q>
where
    Q: SnapshotQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        snapshot_id: Uuid,
    ) -> Result<SnapshotResult, GetSnapshotError> {
        self.snapshot_query
            .fetch_snapshot(owner, snapshot_id)
            .await
            .map_err(|e| match e {
                SnapshotQueryError::NotFound => GetSnapshotError::NotFound,
                SnapshotQueryError::DatabaseError(msg) => GetSnapshotError::RepositoryError(msg),
            })
    }
}
