use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::outgoing::{CreateSkillData, PatchSkillData, SkillResult};

//
// ──────────────────────────────────────────────────────────
// Commands
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillCommandError {
    #[error("Skill name cannot be empty")]
    EmptyName,

    #[error("Skill name too long")]
    NameTooLong,
}

#[derive(Debug, Clone)]
pub struct CreateSkillCommand {
    data: CreateSkillData,
}

impl CreateSkillCommand {
    pub fn new(
        owner: UserId,
        name: String,
        proficiency: Option<String>,
    ) -> Result<Self, SkillCommandError> {
        let name = name.trim().to_string();

        if name.is_empty() {
            return Err(SkillCommandError::EmptyName);
        }
        if name.len() > 100 {
            return Err(SkillCommandError::NameTooLong);
        }

        Ok(Self {
            data: CreateSkillData {
                owner,
                name,
                proficiency,
            },
        })
    }

    pub fn into_data(self) -> CreateSkillData {
        self.data
    }
}

#[derive(Debug, Clone)]
pub struct PatchSkillCommand {
    data: PatchSkillData,
}

impl PatchSkillCommand {
    pub fn new(data: PatchSkillData) -> Result<Self, SkillCommandError> {
        // Required column cannot be cleared, only replaced.
        if data.name.is_null() || data.name.as_value().is_some_and(|n| n.trim().is_empty()) {
            return Err(SkillCommandError::EmptyName);
        }
        if data.name.as_value().is_some_and(|n| n.len() > 100) {
            return Err(SkillCommandError::NameTooLong);
        }

        Ok(Self { data })
    }

    pub fn into_data(self) -> PatchSkillData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case errors + traits
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSkillError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSkillsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchSkillError {
    #[error("Skill not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSkillError {
    #[error("Skill not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, command: CreateSkillCommand) -> Result<SkillResult, CreateSkillError>;
}

#[async_trait]
pub trait ListSkillsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<SkillResult>, ListSkillsError>;
}

#[async_trait]
pub trait PatchSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
        command: PatchSkillCommand,
    ) -> Result<SkillResult, PatchSkillError>;
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), DeleteSkillError>;
}
