use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::snapshot::application::ports::incoming::use_cases::{
    GetApplicationSnapshotError, GetApplicationSnapshotUseCase,
};
use crate::snapshot::application::ports::outgoing::{
    SnapshotQuery, SnapshotQueryError, SnapshotResult,
};

pub struct GetApplicationSnapshotService<Q>
where
    Q: SnapshotQuery,
{
    snapshot_query: Q,
}

impl<Q> GetApplicationSnapshotService<Q>
where
    Q: SnapshotQuery,
{
    pub fn new(snapshot_query: Q) -> Self {
        Self { snapshot_query }
    }
}

#[async_trait]
impl<Q> GetApplicationSnapshotUseCase for GetApplicationSnapshotService<Q>
where
    Q: SnapshotQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        application_id: Uuid,
    ) -> Result<SnapshotResult, GetApplicationSnapshotError> {
        self.snapshot_query
            .fetch_by_application(owner, application_id)
            .await
            .map_err(|e| match e {
                SnapshotQueryError::NotFound => GetApplicationSnapshotError::NotFound,
                SnapshotQueryError::DatabaseError(msg) => {
                    GetApplicationSnapshotError::RepositoryError(msg)
                }
            })
    }
}
