use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::incoming::use_cases::{GetCvsError, GetCvsUseCase};
use crate::cv::application::ports::outgoing::{CvRepository, CvResult};

pub struct GetCvsService<R>
where
    R: CvRepository,
{
    cv_repository: R,
}

impl<R> GetCvsService<R>
where
    R: CvRepository,
{
    pub fn new(cv_repository: R) -> Self {
        Self { cv_repository }
    }
}

#[async_trait]
impl<R> GetCvsUseCase for GetCvsService<R>
where
    R: CvRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<CvResult>, GetCvsError> {
        self.cv_repository
            .list_for_owner(owner)
            .await
            .map_err(|e| GetCvsError::RepositoryError(e.to_string()))
    }
}
