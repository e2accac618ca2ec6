use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::incoming::use_cases::{DeleteCvError, DeleteCvUseCase};
use crate::cv::application::ports::outgoing::{CvRepository, CvRepositoryError};

pub struct DeleteCvService<R>
where
    R: CvRepository,
{
    cv_repository: R,
}

impl<R> DeleteCvService<R>
where
    R: CvRepository,
{
    pub fn new(cv_repository: R) -> Self {
        Self { cv_repository }
    }
}

#[async_trait]
impl<R> DeleteCvUseCase for DeleteCvService<R>
where
    R: CvRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, cv_id: Uuid) -> Result<(), DeleteCvError> {
        self.cv_repository
            .delete_cv(owner, cv_id)
            .await
            .map_err(|e| match e {
                CvRepositoryError::NotFound => DeleteCvError::NotFound,
                CvRepositoryError::DatabaseError(msg) => DeleteCvError::RepositoryError(msg),
            })
    }
}
