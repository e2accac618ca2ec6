use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::job_application::application::ports::incoming::use_cases::{
    CreateApplicationCommand, CreateApplicationError, CreateApplicationUseCase,
    DeleteApplicationError, DeleteApplicationUseCase, GetApplicationError, GetApplicationUseCase,
    ListApplicationsError, ListApplicationsUseCase, PatchApplicationCommand,
    PatchApplicationError, PatchApplicationUseCase,
};
use crate::job_application::application::ports::outgoing::{
    ApplicationRepository, ApplicationRepositoryError, ApplicationResult,
};

pub struct ApplicationService<R>
where
    R: ApplicationRepository,
{
    repository: R,
}

impl<R> ApplicationService<R>
where
    R: ApplicationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateApplicationUseCase for ApplicationService<R>
where
    R: ApplicationRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateApplicationCommand,
    ) -> Result<ApplicationResult, CreateApplicationError> {
        self.repository
            .create(command.into_data())
            .await
            .map_err(|e| CreateApplicationError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> ListApplicationsUseCase for ApplicationService<R>
where
    R: ApplicationRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
    ) -> Result<Vec<ApplicationResult>, ListApplicationsError> {
        self.repository
            .list_for_owner(owner)
            .await
            .map_err(|e| ListApplicationsError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> GetApplicationUseCase for ApplicationService<R>
where
    R: ApplicationRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
    ) -> Result<ApplicationResult, GetApplicationError> {
        self.repository
            .fetch_single(owner, id)
            .await
            .map_err(|e| match e {
                ApplicationRepositoryError::NotFound => GetApplicationError::NotFound,
                ApplicationRepositoryError::DatabaseError(msg) => {
                    GetApplicationError::RepositoryError(msg)
                }
            })
    }
}

#[async_trait]
impl<R> PatchApplicationUseCase for ApplicationService<R>
where
    R: ApplicationRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
        command: PatchApplicationCommand,
    ) -> Result<ApplicationResult, PatchApplicationError> {
        self.repository
            .patch(owner, id, command.into_data())
            .await
            .map_err(|e| match e {
                ApplicationRepositoryError::NotFound => PatchApplicationError::NotFound,
                ApplicationRepositoryError::DatabaseError(msg) => {
                    PatchApplicationError::RepositoryError(msg)
                }
            })
    }
}

#[async_trait]
impl<R> DeleteApplicationUseCase for ApplicationService<R>
where
    R: ApplicationRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), DeleteApplicationError> {
        self.repository.delete(owner, id).await.map_err(|e| match e {
            ApplicationRepositoryError::NotFound => DeleteApplicationError::NotFound,
            ApplicationRepositoryError::DatabaseError(msg) => {
                DeleteApplicationError::RepositoryError(msg)
            }
        })
    }
}
