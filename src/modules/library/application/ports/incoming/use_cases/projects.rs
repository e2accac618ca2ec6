use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::outgoing::{
    CreateProjectData, PatchProjectData, ProjectResult,
};

//
// ──────────────────────────────────────────────────────────
// Commands
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectCommandError {
    #[error("Project name cannot be empty")]
    EmptyName,

    #[error("End date cannot precede start date")]
    EndBeforeStart,
}

#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    data: CreateProjectData,
}

impl CreateProjectCommand {
    pub fn new(
        owner: UserId,
        name: String,
        description: Option<String>,
        url: Option<String>,
        tech_stack: Vec<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, ProjectCommandError> {
        let name = name.trim().to_string();

        if name.is_empty() {
            return Err(ProjectCommandError::EmptyName);
        }
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err(ProjectCommandError::EndBeforeStart);
            }
        }

        // Tag order is user-chosen and preserved; only blank tags are dropped.
        let tech_stack = tech_stack
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(Self {
            data: CreateProjectData {
                owner,
                name,
                description,
                url,
                tech_stack,
                start_date,
                end_date,
            },
        })
    }

    pub fn into_data(self) -> CreateProjectData {
        self.data
    }
}

#[derive(Debug, Clone)]
pub struct PatchProjectCommand {
    data: PatchProjectData,
}

impl PatchProjectCommand {
    pub fn new(data: PatchProjectData) -> Result<Self, ProjectCommandError> {
        // Required column cannot be cleared, only replaced.
        if data.name.is_null() || data.name.as_value().is_some_and(|n| n.trim().is_empty()) {
            return Err(ProjectCommandError::EmptyName);
        }
        if let (Some(start), Some(end)) = (data.start_date.as_value(), data.end_date.as_value()) {
            if end < start {
                return Err(ProjectCommandError::EndBeforeStart);
            }
        }

        Ok(Self { data })
    }

    pub fn into_data(self) -> PatchProjectData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case errors + traits
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProjectsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateProjectCommand,
    ) -> Result<ProjectResult, CreateProjectError>;
}

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<ProjectResult>, ListProjectsError>;
}

#[async_trait]
pub trait PatchProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
        command: PatchProjectCommand,
    ) -> Result<ProjectResult, PatchProjectError>;
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), DeleteProjectError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_command_trims_and_drops_blank_tags() {
        let cmd = CreateProjectCommand::new(
            UserId::from(Uuid::new_v4()),
            "CVStack".to_string(),
            None,
            None,
            vec![
                " rust ".to_string(),
                "".to_string(),
                "actix-web".to_string(),
            ],
            None,
            None,
        )
        .unwrap();

        assert_eq!(cmd.into_data().tech_stack, vec!["rust", "actix-web"]);
    }

    #[test]
    fn create_command_rejects_inverted_dates() {
        let err = CreateProjectCommand::new(
            UserId::from(Uuid::new_v4()),
            "CVStack".to_string(),
            None,
            None,
            vec![],
            NaiveDate::from_ymd_opt(2024, 6, 1),
            NaiveDate::from_ymd_opt(2024, 1, 1),
        )
        .unwrap_err();

        assert!(matches!(err, ProjectCommandError::EndBeforeStart));
    }
}
