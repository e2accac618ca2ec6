use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::incoming::use_cases::{AddInclusionError, AddInclusionUseCase};
use crate::cv::application::ports::outgoing::{
    CvSection, InclusionRepository, InclusionRepositoryError,
};

pub struct AddInclusionService<R>
where
    R: InclusionRepository,
{
    inclusion_repository: R,
}

impl<R> AddInclusionService<R>
where
    R: InclusionRepository,
{
    pub fn new(inclusion_repository: R) -> Self {
        Self { inclusion_repository }
    }
}

#[async_trait]
impl<R> AddInclusionUseCase for AddInclusionService<R>
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
    ) -> Result<(), AddInclusionError> {
        self.inclusion_repository
            .add(owner, cv_id, section, item_id, sort_order)
            .await
            .map_err(|e| match e {
                InclusionRepositoryError::CvNotFound => AddInclusionError::CvNotFound,
                InclusionRepositoryError::ItemNotFound => AddInclusionError::ItemNotFound,
                InclusionRepositoryError::AlreadyIncluded => AddInclusionError::AlreadyIncluded,
                InclusionRepositoryError::LinkNotFound => {
                    AddInclusionError::RepositoryError("unexpected missing link on add".to_string())
                }
                InclusionRepositoryError::DatabaseError(msg) => {
                    AddInclusionError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockInclusionRepo {
        add_result: Mutex<Option<Result<(), InclusionRepositoryError>>>,
    }

    impl MockInclusionRepo {
        fn with(result: Result<(), InclusionRepositoryError>) -> Self {
            Self {
                add_result: Mutex::new(Some(result)),
            }
        }
    }

    #[async_trait]
    impl InclusionRepository for MockInclusionRepo {
        async fn add(
            &self,
            _owner: UserId,
            _cv_id: Uuid,
            _section: CvSection,
            _item_id: Uuid,
            _sort_order: i32,
        ) -> Result<(), InclusionRepositoryError> {
            self.add_result.lock().unwrap().take().unwrap()
        }

        async fn reorder(
            &self,
            _owner: UserId,
            _cv_id: Uuid,
            _section: CvSection,
            _item_id: Uuid,
            _sort_order: i32,
        ) -> Result<(), InclusionRepositoryError> {
            unimplemented!("not needed for add tests")
        }

        async fn remove(
            &self,
            _owner: UserId,
            _cv_id: Uuid,
            _section: CvSection,
            _item_id: Uuid,
        ) -> Result<(), InclusionRepositoryError> {
            unimplemented!("not needed for add tests")
        }
    }

    fn execute_args() -> (UserId, Uuid, CvSection, Uuid, i32) {
        (
            UserId::from(Uuid::new_v4()),
            Uuid::new_v4(),
            CvSection::WorkExperience,
            Uuid::new_v4(),
            0,
        )
    }

    #[tokio::test]
    async fn duplicate_pair_maps_to_already_included() {
        let service = AddInclusionService::new(MockInclusionRepo::with(Err(
            InclusionRepositoryError::AlreadyIncluded,
        )));
        let (owner, cv_id, section, item_id, sort_order) = execute_args();

        let err = service
            .execute(owner, cv_id, section, item_id, sort_order)
            .await
            .unwrap_err();

        assert!(matches!(err, AddInclusionError::AlreadyIncluded));
    }

    #[tokio::test]
    async fn foreign_cv_maps_to_cv_not_found() {
        let service = AddInclusionService::new(MockInclusionRepo::with(Err(
            InclusionRepositoryError::CvNotFound,
        )));
        let (owner, cv_id, section, item_id, sort_order) = execute_args();

        let err = service
            .execute(owner, cv_id, section, item_id, sort_order)
            .await
            .unwrap_err();

        assert!(matches!(err, AddInclusionError::CvNotFound));
    }

    #[tokio::test]
    async fn successful_add_returns_unit() {
        let service = AddInclusionService::new(MockInclusionRepo::with(Ok(())));
        let (owner, cv_id, section, item_id, sort_order) = execute_args();

        assert!(service
            .execute(owner, cv_id, section, item_id, sort_order)
            .await
            .is_ok());
    }
}
