use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::incoming::use_cases::{
    CreateWorkExperienceCommand, CreateWorkExperienceError, CreateWorkExperienceUseCase,
    DeleteWorkExperienceError, DeleteWorkExperienceUseCase, ListWorkExperiencesError,
    ListWorkExperiencesUseCase, PatchWorkExperienceCommand, PatchWorkExperienceError,
    PatchWorkExperienceUseCase,
};
use crate::library::application::ports::outgoing::{
    LibraryRepositoryError, WorkExperienceRepository, WorkExperienceResult,
};

pub struct WorkExperienceService<R>
where
    R: WorkExperienceRepository,
{
    repository: R,
}

impl<R> WorkExperienceService<R>
where
    R: WorkExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateWorkExperienceUseCase for WorkExperienceService<R>
where
    R: WorkExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateWorkExperienceCommand,
    ) -> Result<WorkExperienceResult, CreateWorkExperienceError> {
        self.repository
            .create(command.into_data())
            .await
            .map_err(|e| CreateWorkExperienceError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> ListWorkExperiencesUseCase for WorkExperienceService<R>
where
    R: WorkExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
    ) -> Result<Vec<WorkExperienceResult>, ListWorkExperiencesError> {
        self.repository
            .list_for_owner(owner)
            .await
            .map_err(|e| ListWorkExperiencesError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> PatchWorkExperienceUseCase for WorkExperienceService<R>
where
    R: WorkExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
        command: PatchWorkExperienceCommand,
    ) -> Result<WorkExperienceResult, PatchWorkExperienceError> {
        self.repository
            .patch(owner, id, command.into_data())
            .await
            .map_err(|e| match e {
                LibraryRepositoryError::NotFound => PatchWorkExperienceError::NotFound,
                LibraryRepositoryError::DatabaseError(msg) => {
                    PatchWorkExperienceError::RepositoryError(msg)
                }
            })
    }
}

#[async_trait]
impl<R> DeleteWorkExperienceUseCase for WorkExperienceService<R>
where
    R: WorkExperienceRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), DeleteWorkExperienceError> {
        self.repository.delete(owner, id).await.map_err(|e| match e {
            LibraryRepositoryError::NotFound => DeleteWorkExperienceError::NotFound,
            LibraryRepositoryError::DatabaseError(msg) => {
                DeleteWorkExperienceError::RepositoryError(msg)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use std::sync::Mutex;

    use crate::library::application::ports::outgoing::{
        CreateWorkExperienceData, PatchWorkExperienceData,
    };

    struct MockWorkExperienceRepo {
        delete_result: Mutex<Option<Result<(), LibraryRepositoryError>>>,
        patch_result: Mutex<Option<Result<WorkExperienceResult, LibraryRepositoryError>>>,
    }

    impl MockWorkExperienceRepo {
        fn with_delete(result: Result<(), LibraryRepositoryError>) -> Self {
            Self {
                delete_result: Mutex::new(Some(result)),
                patch_result: Mutex::new(None),
            }
        }

        fn with_patch(result: Result<WorkExperienceResult, LibraryRepositoryError>) -> Self {
            Self {
                delete_result: Mutex::new(None),
                patch_result: Mutex::new(Some(result)),
            }
        }
    }

    #[async_trait]
    impl WorkExperienceRepository for MockWorkExperienceRepo {
        async fn create(
            &self,
            data: CreateWorkExperienceData,
        ) -> Result<WorkExperienceResult, LibraryRepositoryError> {
            let now = Utc::now();
            Ok(WorkExperienceResult {
                id: Uuid::new_v4(),
                owner: data.owner,
                company: data.company,
                role: data.role,
                location: data.location,
                start_date: data.start_date,
                end_date: data.end_date,
                is_current: data.is_current,
                summary: data.summary,
                created_at: now,
                updated_at: now,
            })
        }

        async fn list_for_owner(
            &self,
            _owner: UserId,
        ) -> Result<Vec<WorkExperienceResult>, LibraryRepositoryError> {
            Ok(vec![])
        }

        async fn patch(
            &self,
            _owner: UserId,
            _id: Uuid,
            _data: PatchWorkExperienceData,
        ) -> Result<WorkExperienceResult, LibraryRepositoryError> {
            self.patch_result.lock().unwrap().take().unwrap()
        }

        async fn delete(&self, _owner: UserId, _id: Uuid) -> Result<(), LibraryRepositoryError> {
            self.delete_result.lock().unwrap().take().unwrap()
        }
    }

    fn owner() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    #[tokio::test]
    async fn create_returns_repository_result() {
        let service = WorkExperienceService::new(MockWorkExperienceRepo::with_delete(Ok(())));
        let command = CreateWorkExperienceCommand::new(
            owner(),
            "Acme".to_string(),
            "Engineer".to_string(),
            None,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            None,
            true,
            None,
        )
        .unwrap();

        let result = CreateWorkExperienceUseCase::execute(&service, command)
            .await
            .unwrap();

        assert_eq!(result.company, "Acme");
        assert!(result.is_current);
        assert_eq!(result.end_date, None);
    }

    #[tokio::test]
    async fn patch_maps_not_found() {
        let service = WorkExperienceService::new(MockWorkExperienceRepo::with_patch(Err(
            LibraryRepositoryError::NotFound,
        )));
        let command =
            PatchWorkExperienceCommand::new(PatchWorkExperienceData::default()).unwrap();

        let err = PatchWorkExperienceUseCase::execute(&service, owner(), Uuid::new_v4(), command)
            .await
            .unwrap_err();

        assert!(matches!(err, PatchWorkExperienceError::NotFound));
    }

    #[tokio::test]
    async fn delete_maps_not_found() {
        let service = WorkExperienceService::new(MockWorkExperienceRepo::with_delete(Err(
            LibraryRepositoryError::NotFound,
        )));

        let err = DeleteWorkExperienceUseCase::execute(&service, owner(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, DeleteWorkExperienceError::NotFound));
    }
}
