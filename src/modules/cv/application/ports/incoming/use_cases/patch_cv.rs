use async_trait::async_trait;
use uuid::Uuid;

use super::create_cv::CvCommandError;
use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::outgoing::{CvResult, PatchCvData};

#[derive(Debug, Clone)]
pub struct PatchCvCommand {
    data: PatchCvData,
}

impl PatchCvCommand {
    pub fn new(data: PatchCvData) -> Result<Self, CvCommandError> {
        // Required columns cannot be cleared, only replaced.
        if data.title.is_null() || data.title.as_value().is_some_and(|t| t.trim().is_empty()) {
            return Err(CvCommandError::EmptyTitle);
        }
        if data.title.as_value().is_some_and(|t| t.len() > 150) {
            return Err(CvCommandError::TitleTooLong);
        }
        if data.template.is_null()
            || data.template.as_value().is_some_and(|t| t.trim().is_empty())
        {
            return Err(CvCommandError::EmptyTemplate);
        }

        Ok(Self { data })
    }

    pub fn into_data(self) -> PatchCvData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchCvError {
    #[error("CV not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchCvUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        cv_id: Uuid,
        command: PatchCvCommand,
    ) -> Result<CvResult, PatchCvError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::patch::PatchField;

    #[test]
    fn command_rejects_clearing_the_title() {
        let err = PatchCvCommand::new(PatchCvData {
            title: PatchField::Null,
            ..Default::default()
        })
        .unwrap_err();

        assert!(matches!(err, CvCommandError::EmptyTitle));
    }

    #[test]
    fn command_accepts_default_flag_only_patch() {
        let cmd = PatchCvCommand::new(PatchCvData {
            is_default: Some(true),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(cmd.into_data().is_default, Some(true));
    }
}
