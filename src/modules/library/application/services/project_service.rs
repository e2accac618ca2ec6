use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase, DeleteProjectError,
    DeleteProjectUseCase, ListProjectsError, ListProjectsUseCase, PatchProjectCommand,
    PatchProjectError, PatchProjectUseCase,
};
use crate::library::application::ports::outgoing::{
    LibraryRepositoryError, ProjectRepository, ProjectResult,
};

pub struct ProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> ProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for ProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateProjectCommand,
    ) -> Result<ProjectResult, CreateProjectError> {
        self.repository
            .create(command.into_data())
            .await
            .map_err(|e| CreateProjectError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> ListProjectsUseCase for ProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<ProjectResult>, ListProjectsError> {
        self.repository
            .list_for_owner(owner)
            .await
            .map_err(|e| ListProjectsError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> PatchProjectUseCase for ProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
        command: PatchProjectCommand,
    ) -> Result<ProjectResult, PatchProjectError> {
        self.repository
            .patch(owner, id, command.into_data())
            .await
            .map_err(|e| match e {
                LibraryRepositoryError::NotFound => PatchProjectError::NotFound,
                LibraryRepositoryError::DatabaseError(msg) => {
                    PatchProjectError::RepositoryError(msg)
                }
            })
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for ProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), DeleteProjectError> {
        self.repository.delete(owner, id).await.map_err(|e| match e {
            LibraryRepositoryError::NotFound => DeleteProjectError::NotFound,
            LibraryRepositoryError::DatabaseError(msg) => DeleteProjectError::RepositoryError(msg),
        })
    }
}
