use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::snapshot::application::ports::incoming::use_cases::{
    CreateSnapshotError, CreateSnapshotUseCase,
};
use crate::snapshot::application::ports::outgoing::{
    SnapshotRepository, SnapshotRepositoryError, SnapshotResult,
};

pub struct CreateSnapshotService<R>
where
    R: SnapshotRepository,
{
    snapshot_repository: R,
}

impl<R> CreateSnapshotService<R>
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
impl<R> CreateSnapshotUseCase for CreateSnapshotService<R>
where
    R: SnapshotRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        cv_id: Uuid,
        application_id: Option<Uuid>,
    ) -> Result<SnapshotResult, CreateSnapshotError> {
        self.snapshot_repository
            .create_snapshot(owner, cv_id, application_id)
            .await
            .map_err(|e| match e {
                SnapshotRepositoryError::CvNotFound => CreateSnapshotError::CvNotFound,
                SnapshotRepositoryError::ApplicationNotFound => {
                    CreateSnapshotError::ApplicationNotFound
                }
                SnapshotRepositoryError::Conflict => CreateSnapshotError::Conflict,
                SnapshotRepositoryError::SnapshotNotFound => CreateSnapshotError::RepositoryError(
                    "unexpected missing snapshot on create".to_string(),
                ),
                SnapshotRepositoryError::DatabaseError(msg) => {
                    CreateSnapshotError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockSnapshotRepo {
        create_result: Mutex<Option<Result<SnapshotResult, SnapshotRepositoryError>>>,
    }

    impl MockSnapshotRepo {
        fn failing_with(err: SnapshotRepositoryError) -> Self {
            Self {
                create_result: Mutex::new(Some(Err(err))),
            }
        }
    }

    #[async_trait]
    impl SnapshotRepository for MockSnapshotRepo {
        async fn create_snapshot(
            &self,
            _owner: UserId,
            _cv_id: Uuid,
            _application_id: Option<Uuid>,
        ) -> Result<SnapshotResult, SnapshotRepositoryError> {
            self.create_result.lock().unwrap().take().unwrap()
        }

        async fn delete_snapshot(
            &self,
            _owner: UserId,
            _snapshot_id: Uuid,
        ) -> Result<(), SnapshotRepositoryError> {
            unimplemented!("not needed for create tests")
        }
    }

    #[tokio::test]
    async fn foreign_cv_maps_to_cv_not_found() {
        let service = CreateSnapshotService::new(MockSnapshotRepo::failing_with(
            SnapshotRepositoryError::CvNotFound,
        ));

        let err = service
            .execute(UserId::from(Uuid::new_v4()), Uuid::new_v4(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, CreateSnapshotError::CvNotFound));
    }

    #[tokio::test]
    async fn replace_race_maps_to_conflict() {
        let service = CreateSnapshotService::new(MockSnapshotRepo::failing_with(
            SnapshotRepositoryError::Conflict,
        ));

        let err = service
            .execute(
                UserId::from(Uuid::new_v4()),
                Uuid::new_v4(),
                Some(Uuid::new_v4()),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CreateSnapshotError::Conflict));
    }
}
