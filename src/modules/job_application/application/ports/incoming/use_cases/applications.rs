use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::job_application::application::ports::outgoing::{
    ApplicationResult, CreateApplicationData, PatchApplicationData,
};

const DEFAULT_STATUS: &str = "draft";

//
// ──────────────────────────────────────────────────────────
// Commands
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApplicationCommandError {
    #[error("Company cannot be empty")]
    EmptyCompany,

    #[error("Position cannot be empty")]
    EmptyPosition,

    #[error("Status cannot be empty")]
    EmptyStatus,
}

#[derive(Debug, Clone)]
pub struct CreateApplicationCommand {
    data: CreateApplicationData,
}

impl CreateApplicationCommand {
    pub fn new(
        owner: UserId,
        company: String,
        position: String,
        status: Option<String>,
        job_url: Option<String>,
        notes: Option<String>,
        applied_at: Option<NaiveDate>,
    ) -> Result<Self, ApplicationCommandError> {
        let company = company.trim().to_string();
        let position = position.trim().to_string();

        if company.is_empty() {
            return Err(ApplicationCommandError::EmptyCompany);
        }
        if position.is_empty() {
            return Err(ApplicationCommandError::EmptyPosition);
        }

        let status = match status {
            Some(s) if s.trim().is_empty() => return Err(ApplicationCommandError::EmptyStatus),
            Some(s) => s.trim().to_string(),
            None => DEFAULT_STATUS.to_string(),
        };

        Ok(Self {
            data: CreateApplicationData {
                owner,
                company,
                position,
                status,
                job_url,
                notes,
                applied_at,
            },
        })
    }

    pub fn into_data(self) -> CreateApplicationData {
        self.data
    }
}

#[derive(Debug, Clone)]
pub struct PatchApplicationCommand {
    data: PatchApplicationData,
}

impl PatchApplicationCommand {
    pub fn new(data: PatchApplicationData) -> Result<Self, ApplicationCommandError> {
        // Required columns cannot be cleared, only replaced.
        if data.company.is_null() || data.company.as_value().is_some_and(|c| c.trim().is_empty()) {
            return Err(ApplicationCommandError::EmptyCompany);
        }
        if data.position.is_null() || data.position.as_value().is_some_and(|p| p.trim().is_empty())
        {
            return Err(ApplicationCommandError::EmptyPosition);
        }
        if data.status.is_null() || data.status.as_value().is_some_and(|s| s.trim().is_empty()) {
            return Err(ApplicationCommandError::EmptyStatus);
        }

        Ok(Self { data })
    }

    pub fn into_data(self) -> PatchApplicationData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case errors + traits
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateApplicationError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListApplicationsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetApplicationError {
    #[error("Application not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchApplicationError {
    #[error("Application not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteApplicationError {
    #[error("Application not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateApplicationUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateApplicationCommand,
    ) -> Result<ApplicationResult, CreateApplicationError>;
}

#[async_trait]
pub trait ListApplicationsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId)
        -> Result<Vec<ApplicationResult>, ListApplicationsError>;
}

#[async_trait]
pub trait GetApplicationUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, id: Uuid)
        -> Result<ApplicationResult, GetApplicationError>;
}

#[async_trait]
pub trait PatchApplicationUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
        command: PatchApplicationCommand,
    ) -> Result<ApplicationResult, PatchApplicationError>;
}

#[async_trait]
pub trait DeleteApplicationUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), DeleteApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_command_defaults_the_status() {
        let cmd = CreateApplicationCommand::new(
            UserId::from(Uuid::new_v4()),
            "Acme".to_string(),
            "Backend Engineer".to_string(),
            None,
            None,
            None,
            None,
        )
        .unwrap();

        assert_eq!(cmd.into_data().status, "draft");
    }

    #[test]
    fn patch_command_rejects_clearing_status() {
        use crate::shared::patch::PatchField;

        let err = PatchApplicationCommand::new(PatchApplicationData {
            status: PatchField::Null,
            ..Default::default()
        })
        .unwrap_err();

        assert!(matches!(err, ApplicationCommandError::EmptyStatus));
    }
}
