use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::incoming::use_cases::{
    CreateEducationCommand, CreateEducationError, CreateEducationUseCase, DeleteEducationError,
    DeleteEducationUseCase, ListEducationsError, ListEducationsUseCase, PatchEducationCommand,
    PatchEducationError, PatchEducationUseCase,
};
use crate::library::application::ports::outgoing::{
    EducationRepository, EducationResult, LibraryRepositoryError,
};

pub struct EducationService<R>
where
    R: EducationRepository,
{
    repository: R,
}

impl<R> EducationService<R>
where
    R: EducationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateEducationUseCase for EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateEducationCommand,
    ) -> Result<EducationResult, CreateEducationError> {
        self.repository
            .create(command.into_data())
            .await
            .map_err(|e| CreateEducationError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> ListEducationsUseCase for EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<EducationResult>, ListEducationsError> {
        self.repository
            .list_for_owner(owner)
            .await
            .map_err(|e| ListEducationsError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> PatchEducationUseCase for EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
        command: PatchEducationCommand,
    ) -> Result<EducationResult, PatchEducationError> {
        self.repository
            .patch(owner, id, command.into_data())
            .await
            .map_err(|e| match e {
                LibraryRepositoryError::NotFound => PatchEducationError::NotFound,
                LibraryRepositoryError::DatabaseError(msg) => {
                    PatchEducationError::RepositoryError(msg)
                }
            })
    }
}

#[async_trait]
impl<R> DeleteEducationUseCase for EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), DeleteEducationError> {
        self.repository.delete(owner, id).await.map_err(|e| match e {
            LibraryRepositoryError::NotFound => DeleteEducationError::NotFound,
            LibraryRepositoryError::DatabaseError(msg) => {
                DeleteEducationError::RepositoryError(msg)
            }
        })
    }
}
