use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::outgoing::{CreateCvData, CvResult};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CvCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long")]
    TitleTooLong,

    #[error("Template cannot be empty")]
    EmptyTemplate,
}

#[derive(Debug, Clone)]
pub struct CreateCvCommand {
    data: CreateCvData,
}

impl CreateCvCommand {
    pub fn new(
        owner: UserId,
        title: String,
        template: Option<String>,
        is_default: bool,
    ) -> Result<Self, CvCommandError> {
        let title = title.trim().to_string();

        if title.is_empty() {
            return Err(CvCommandError::EmptyTitle);
        }
        if title.len() > 150 {
            return Err(CvCommandError::TitleTooLong);
        }
        if let Some(template) = &template {
            if template.trim().is_empty() {
                return Err(CvCommandError::EmptyTemplate);
            }
        }

        Ok(Self {
            data: CreateCvData {
                owner,
                title,
                template,
                is_default,
            },
        })
    }

    pub fn into_data(self) -> CreateCvData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCvError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCvUseCase: Send + Sync {
    async fn execute(&self, command: CreateCvCommand) -> Result<CvResult, CreateCvError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn command_rejects_blank_title() {
        let err = CreateCvCommand::new(
            UserId::from(Uuid::new_v4()),
            "  ".to_string(),
            None,
            false,
        )
        .unwrap_err();

        assert!(matches!(err, CvCommandError::EmptyTitle));
    }

    #[test]
    fn command_trims_title() {
        let cmd = CreateCvCommand::new(
            UserId::from(Uuid::new_v4()),
            "  Backend Resume  ".to_string(),
            Some("modern".to_string()),
            true,
        )
        .unwrap();

        let data = cmd.into_data();
        assert_eq!(data.title, "Backend Resume");
        assert!(data.is_default);
    }
}
