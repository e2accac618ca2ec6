use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::outgoing::ComposedCv;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetComposedCvError {
    #[error("CV not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetComposedCvUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, cv_id: Uuid) -> Result<ComposedCv, GetComposedCvError>;
}
