use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::outgoing::{
    CreateWorkExperienceData, PatchWorkExperienceData, WorkExperienceResult,
};
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Commands
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum WorkExperienceCommandError {
    #[error("Company cannot be empty")]
    EmptyCompany,

    #[error("Role cannot be empty")]
    EmptyRole,

    #[error("End date cannot precede start date")]
    EndBeforeStart,
}

#[derive(Debug, Clone)]
pub struct CreateWorkExperienceCommand {
    data: CreateWorkExperienceData,
}

impl CreateWorkExperienceCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner: UserId,
        company: String,
        role: String,
        location: Option<String>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        is_current: bool,
        summary: Option<String>,
    ) -> Result<Self, WorkExperienceCommandError> {
        let company = company.trim().to_string();
        let role = role.trim().to_string();

        if company.is_empty() {
            return Err(WorkExperienceCommandError::EmptyCompany);
        }
        if role.is_empty() {
            return Err(WorkExperienceCommandError::EmptyRole);
        }

        // A current position has no end date, whatever the caller sent.
        let end_date = if is_current { None } else { end_date };

        if let Some(end) = end_date {
            if end < start_date {
                return Err(WorkExperienceCommandError::EndBeforeStart);
            }
        }

        Ok(Self {
            data: CreateWorkExperienceData {
                owner,
                company,
                role,
                location,
                start_date,
                end_date,
                is_current,
                summary,
            },
        })
    }

    pub fn into_data(self) -> CreateWorkExperienceData {
        self.data
    }
}

#[derive(Debug, Clone)]
pub struct PatchWorkExperienceCommand {
    data: PatchWorkExperienceData,
}

impl PatchWorkExperienceCommand {
    pub fn new(mut data: PatchWorkExperienceData) -> Result<Self, WorkExperienceCommandError> {
        // Required columns cannot be cleared, only replaced.
        if data.company.is_null() || data.company.as_value().is_some_and(|c| c.trim().is_empty()) {
            return Err(WorkExperienceCommandError::EmptyCompany);
        }
        if data.role.is_null() || data.role.as_value().is_some_and(|r| r.trim().is_empty()) {
            return Err(WorkExperienceCommandError::EmptyRole);
        }

        // Marking the position current clears any stored end date.
        if data.is_current.as_value() == Some(&true) {
            data.end_date = PatchField::Null;
        }

        // Cross-check the dates only when the patch carries both.
        if let (Some(start), Some(end)) = (data.start_date.as_value(), data.end_date.as_value()) {
            if end < start {
                return Err(WorkExperienceCommandError::EndBeforeStart);
            }
        }

        Ok(Self { data })
    }

    pub fn into_data(self) -> PatchWorkExperienceData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateWorkExperienceError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListWorkExperiencesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchWorkExperienceError {
    #[error("Work experience not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteWorkExperienceError {
    #[error("Work experience not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateWorkExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateWorkExperienceCommand,
    ) -> Result<WorkExperienceResult, CreateWorkExperienceError>;
}

#[async_trait]
pub trait ListWorkExperiencesUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
    ) -> Result<Vec<WorkExperienceResult>, ListWorkExperiencesError>;
}

#[async_trait]
pub trait PatchWorkExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
        command: PatchWorkExperienceCommand,
    ) -> Result<WorkExperienceResult, PatchWorkExperienceError>;
}

#[async_trait]
pub trait DeleteWorkExperienceUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), DeleteWorkExperienceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn create_command_rejects_empty_company() {
        let err = CreateWorkExperienceCommand::new(
            owner(),
            "   ".to_string(),
            "Engineer".to_string(),
            None,
            date(2020, 1, 1),
            None,
            false,
            None,
        )
        .unwrap_err();

        assert!(matches!(err, WorkExperienceCommandError::EmptyCompany));
    }

    #[test]
    fn create_command_rejects_end_before_start() {
        let err = CreateWorkExperienceCommand::new(
            owner(),
            "Acme".to_string(),
            "Engineer".to_string(),
            None,
            date(2020, 6, 1),
            Some(date(2020, 1, 1)),
            false,
            None,
        )
        .unwrap_err();

        assert!(matches!(err, WorkExperienceCommandError::EndBeforeStart));
    }

    #[test]
    fn create_command_clears_end_date_for_current_position() {
        let cmd = CreateWorkExperienceCommand::new(
            owner(),
            "Acme".to_string(),
            "Engineer".to_string(),
            None,
            date(2020, 1, 1),
            Some(date(2023, 1, 1)),
            true,
            None,
        )
        .unwrap();

        let data = cmd.into_data();
        assert!(data.is_current);
        assert_eq!(data.end_date, None);
    }

    #[test]
    fn patch_command_clears_end_date_when_marked_current() {
        let cmd = PatchWorkExperienceCommand::new(PatchWorkExperienceData {
            is_current: PatchField::Value(true),
            end_date: PatchField::Value(date(2024, 1, 1)),
            ..Default::default()
        })
        .unwrap();

        let data = cmd.into_data();
        assert!(data.end_date.is_null());
    }

    #[test]
    fn patch_command_rejects_inverted_date_pair() {
        let err = PatchWorkExperienceCommand::new(PatchWorkExperienceData {
            start_date: PatchField::Value(date(2024, 5, 1)),
            end_date: PatchField::Value(date(2024, 1, 1)),
            ..Default::default()
        })
        .unwrap_err();

        assert!(matches!(err, WorkExperienceCommandError::EndBeforeStart));
    }
}
