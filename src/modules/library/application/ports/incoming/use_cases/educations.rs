use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::outgoing::{
    CreateEducationData, EducationResult, PatchEducationData,
};

//
// ──────────────────────────────────────────────────────────
// Commands
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationCommandError {
    #[error("Institution cannot be empty")]
    EmptyInstitution,

    #[error("Degree cannot be empty")]
    EmptyDegree,

    #[error("End date cannot precede start date")]
    EndBeforeStart,
}

#[derive(Debug, Clone)]
pub struct CreateEducationCommand {
    data: CreateEducationData,
}

impl CreateEducationCommand {
    pub fn new(
        owner: UserId,
        institution: String,
        degree: String,
        field_of_study: Option<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        description: Option<String>,
    ) -> Result<Self, EducationCommandError> {
        let institution = institution.trim().to_string();
        let degree = degree.trim().to_string();

        if institution.is_empty() {
            return Err(EducationCommandError::EmptyInstitution);
        }
        if degree.is_empty() {
            return Err(EducationCommandError::EmptyDegree);
        }
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err(EducationCommandError::EndBeforeStart);
            }
        }

        Ok(Self {
            data: CreateEducationData {
                owner,
                institution,
                degree,
                field_of_study,
                start_date,
                end_date,
                description,
            },
        })
    }

    pub fn into_data(self) -> CreateEducationData {
        self.data
    }
}

#[derive(Debug, Clone)]
pub struct PatchEducationCommand {
    data: PatchEducationData,
}

impl PatchEducationCommand {
    pub fn new(data: PatchEducationData) -> Result<Self, EducationCommandError> {
        // Required columns cannot be cleared, only replaced.
        if data.institution.is_null()
            || data
                .institution
                .as_value()
                .is_some_and(|i| i.trim().is_empty())
        {
            return Err(EducationCommandError::EmptyInstitution);
        }
        if data.degree.is_null() || data.degree.as_value().is_some_and(|d| d.trim().is_empty()) {
            return Err(EducationCommandError::EmptyDegree);
        }
        if let (Some(start), Some(end)) = (data.start_date.as_value(), data.end_date.as_value()) {
            if end < start {
                return Err(EducationCommandError::EndBeforeStart);
            }
        }

        Ok(Self { data })
    }

    pub fn into_data(self) -> PatchEducationData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case errors + traits
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateEducationError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListEducationsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchEducationError {
    #[error("Education not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteEducationError {
    #[error("Education not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateEducationUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateEducationCommand,
    ) -> Result<EducationResult, CreateEducationError>;
}

#[async_trait]
pub trait ListEducationsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<EducationResult>, ListEducationsError>;
}

#[async_trait]
pub trait PatchEducationUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
        command: PatchEducationCommand,
    ) -> Result<EducationResult, PatchEducationError>;
}

#[async_trait]
pub trait DeleteEducationUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), DeleteEducationError>;
}
