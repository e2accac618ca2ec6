use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCvError {
    #[error("CV not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCvUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, cv_id: Uuid) -> Result<(), DeleteCvError>;
}
