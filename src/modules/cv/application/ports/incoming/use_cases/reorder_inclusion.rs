use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::outgoing::CvSection;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReorderInclusionError {
    #[error("Inclusion not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Updates only the link's order value; the item and CV are untouched.
#[async_trait]
pub trait ReorderInclusionUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        cv_id: Uuid,
        section: CvSection,
        item_id: Uuid,
        sort_order: i32,
    ) -> Result<(), ReorderInclusionError>;
}
