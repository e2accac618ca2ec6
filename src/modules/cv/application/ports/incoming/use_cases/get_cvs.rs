use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::outgoing::CvResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCvsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCvsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<CvResult>, GetCvsError>;
}
