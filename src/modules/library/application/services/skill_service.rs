use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::incoming::use_cases::{
    CreateSkillCommand, CreateSkillError, CreateSkillUseCase, DeleteSkillError, DeleteSkillUseCase,
    ListSkillsError, ListSkillsUseCase, PatchSkillCommand, PatchSkillError, PatchSkillUseCase,
};
use crate::library::application::ports::outgoing::{
    LibraryRepositoryError, SkillRepository, SkillResult,
};

pub struct SkillService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> SkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateSkillUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, command: CreateSkillCommand) -> Result<SkillResult, CreateSkillError> {
        self.repository
            .create(command.into_data())
            .await
            .map_err(|e| CreateSkillError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> ListSkillsUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<SkillResult>, ListSkillsError> {
        self.repository
            .list_for_owner(owner)
            .await
            .map_err(|e| ListSkillsError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> PatchSkillUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
        command: PatchSkillCommand,
    ) -> Result<SkillResult, PatchSkillError> {
        self.repository
            .patch(owner, id, command.into_data())
            .await
            .map_err(|e| match e {
                LibraryRepositoryError::NotFound => PatchSkillError::NotFound,
                LibraryRepositoryError::DatabaseError(msg) => PatchSkillError::RepositoryError(msg),
            })
    }
}

#[async_trait]
impl<R> DeleteSkillUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), DeleteSkillError> {
        self.repository.delete(owner, id).await.map_err(|e| match e {
            LibraryRepositoryError::NotFound => DeleteSkillError::NotFound,
            LibraryRepositoryError::DatabaseError(msg) => DeleteSkillError::RepositoryError(msg),
        })
    }
}
