use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::outgoing::CvSection;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveInclusionError {
    #[error("Inclusion not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveInclusionUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        cv_id: Uuid,
        section: CvSection,
        item_id: Uuid,
    ) -> Result<(), RemoveInclusionError>;
}
