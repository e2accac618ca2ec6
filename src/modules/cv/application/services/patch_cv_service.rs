use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::incoming::use_cases::{
    PatchCvCommand, PatchCvError, PatchCvUseCase,
};
use crate::cv::application::ports::outgoing::{CvRepository, CvRepositoryError, CvResult};

pub struct PatchCvService<R>
where
    R: CvRepository,
{
    cv_repository: R,
}

impl<R> PatchCvService<R>
where
    R: CvRepository,
{
    pub fn new(cv_repository: R) -> Self {
        Self { cv_repository }
    }
}

#[async_trait]
impl<R> PatchCvUseCase for PatchCvService<R>
where
    R: CvRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        cv_id: Uuid,
        command: PatchCvCommand,
    ) -> Result<CvResult, PatchCvError> {
        self.cv_repository
            .patch_cv(owner, cv_id, command.into_data())
            .await
            .map_err(|e| match e {
                CvRepositoryError::NotFound => PatchCvError::NotFound,
                CvRepositoryError::DatabaseError(msg) => PatchCvError::RepositoryError(msg),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::cv::application::ports::outgoing::{CreateCvData, PatchCvData};

    struct MockCvRepo {
        patch_result: Mutex<Option<Result<CvResult, CvRepositoryError>>>,
    }

    #[async_trait]
    impl CvRepository for MockCvRepo {
        async fn create_cv(&self, _data: CreateCvData) -> Result<CvResult, CvRepositoryError> {
            unimplemented!("not needed for patch_cv tests")
        }

        async fn list_for_owner(&self, _owner: UserId) -> Result<Vec<CvResult>, CvRepositoryError> {
            unimplemented!("not needed for patch_cv tests")
        }

        async fn patch_cv(
            &self,
            _owner: UserId,
            _cv_id: Uuid,
            _data: PatchCvData,
        ) -> Result<CvResult, CvRepositoryError> {
            self.patch_result.lock().unwrap().take().unwrap()
        }

        async fn delete_cv(&self, _owner: UserId, _cv_id: Uuid) -> Result<(), CvRepositoryError> {
            unimplemented!("not needed for patch_cv tests")
        }
    }

    #[tokio::test]
    async fn another_users_cv_id_reads_as_not_found() {
        let service = PatchCvService::new(MockCvRepo {
            patch_result: Mutex::new(Some(Err(CvRepositoryError::NotFound))),
        });
        let command = PatchCvCommand::new(PatchCvData::default()).unwrap();

        let err = service
            .execute(UserId::from(Uuid::new_v4()), Uuid::new_v4(), command)
            .await
            .unwrap_err();

        assert!(matches!(err, PatchCvError::NotFound));
    }
}
