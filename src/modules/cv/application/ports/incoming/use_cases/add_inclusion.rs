use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::outgoing::CvSection;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddInclusionError {
    #[error("CV not found")]
    CvNotFound,

    #[error("Library item not found")]
    ItemNotFound,

    #[error("Item already included in this CV")]
    AlreadyIncluded,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddInclusionUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        cv_id: Uuid,
        section: CvSection,
        item_id: Uuid,
        sort_order: i32,
    ) -> Result<(), AddInclusionError>;
}
