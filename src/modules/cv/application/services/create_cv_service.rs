use async_trait::async_trait;

use crate::cv::application::ports::incoming::use_cases::{
    CreateCvCommand, CreateCvError, CreateCvUseCase,
};
use crate::cv::application::ports::outgoing::{CvRepository, CvResult};

pub struct CreateCvService<R>
where
    R: CvRepository,
{
    cv_repository: R,
}

impl<R> CreateCvService<R>
where
    R: CvRepository,
{
    pub fn new(cv_repository: R) -> Self {
        Self { cv_repository }
    }
}

#[async_trait]
impl<R> CreateCvUseCase for CreateCvService<R>
where
    R: CvRepository + Send + Sync,
{
    async fn execute(&self, command: CreateCvCommand) -> Result<CvResult, CreateCvError> {
        self.cv_repository
            .create_cv(command.into_data())
            .await
            .map_err(|e| CreateCvError::RepositoryError(e.to_string()))
    }
}
