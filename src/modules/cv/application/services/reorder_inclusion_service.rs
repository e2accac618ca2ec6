use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::incoming::use_cases::{
    ReorderInclusionError, ReorderInclusionUseCase,
};
use crate::cv::application::ports::outgoing::{
    CvSection, InclusionRepository, InclusionRepositoryError,
};

pub struct ReorderInclusionService<R>
where
    R: InclusionRepository,
{
    inclusion_repository: R,
}

impl<R> ReorderInclusionService<R>
where
    R: InclusionRepository,
{
    pub fn new(inclusion_repository: R) -> Self {
        Self { inclusion_repository }
    }
}

#[async_trait]
impl<R> ReorderInclusionUseCase for ReorderInclusionService<R>
where
    R: InclusionRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        cv_id: Uuid,
        section: CvSection,
        item_id: Uuid,
        sort_order: i32,
    ) -> Result<(), ReorderInclusionError> {
        self.inclusion_repository
            .reorder(owner, cv_id, section, item_id, sort_order)
            .await
            .map_err(|e| match e {
                InclusionRepositoryError::LinkNotFound
                | InclusionRepositoryError::CvNotFound
                | InclusionRepositoryError::ItemNotFound => ReorderInclusionError::NotFound,
                InclusionRepositoryError::AlreadyIncluded => {
                    ReorderInclusionError::RepositoryError(
                        "unexpected duplicate link on reorder".to_string(),
                    )
                }
                InclusionRepositoryError::DatabaseError(msg) => {
                    ReorderInclusionError::RepositoryError(msg)
                }
            })
    }
}
