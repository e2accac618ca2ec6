use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::incoming::use_cases::{
    RemoveInclusionError, RemoveInclusionUseCase,
};
use crate::cv::application::ports::outgoing::{
    CvSection, InclusionRepository, InclusionRepositoryError,
};

pub struct RemoveInclusionService<R>
where
    R: InclusionRepository,
{
    inclusion_repository: R,
}

impl<R> RemoveInclusionService<R>
where
    R: InclusionRepository,
{
    pub fn new(inclusion_repository: R) -> Self {
        Self { inclusion_repository }
    }
}

#[async_trait]
impl<R> RemoveInclusionUseCase for RemoveInclusionService<R>
where
    R: InclusionRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        cv_id: Uuid,
        section: CvSection,
        item_id: Uuid,
    ) -> Result<(), RemoveInclusionError> {
        self.inclusion_repository
            .remove(owner, cv_id, section, item_id)
            .await
            .map_err(|e| match e {
                // An absent link, an absent CV and a foreign CV all read the
                // same from outside.
                InclusionRepositoryError::LinkNotFound
                | InclusionRepositoryError::CvNotFound
                | InclusionRepositoryError::ItemNotFound => RemoveInclusionError::NotFound,
                InclusionRepositoryError::AlreadyIncluded => RemoveInclusionError::RepositoryError(
                    "unexpected duplicate link on remove".to_string(),
                ),
                InclusionRepositoryError::DatabaseError(msg) => {
                    RemoveInclusionError::RepositoryError(msg)
                }
            })
    }
}
