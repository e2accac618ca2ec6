use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use super::create_cv::map_command_error;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::cv::application::ports::incoming::use_cases::{PatchCvCommand, PatchCvError};
use crate::cv::application::ports::outgoing::PatchCvData;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PatchCvRequest {
    #[serde(default)]
    pub title: PatchField<String>,

    #[serde(default)]
    pub template: PatchField<String>,

    #[serde(default)]
    pub override_summary: PatchField<String>,

    pub is_default: Option<bool>,
}

impl From<PatchCvRequest> for PatchCvData {
    fn from(req: PatchCvRequest) -> Self {
        PatchCvData {
            title: req.title,
            template: req.template,
            override_summary: req.override_summary,
            is_default: req.is_default,
        }
    }
}

#[patch("/api/cvs/{cv_id}")]
pub async fn patch_cv_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<PatchCvRequest>,
) -> impl Responder {
    let cv_id = path.into_inner();

    let command = match PatchCvCommand::new(payload.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.cvs.patch.execute(user.user_id, cv_id, command).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(PatchCvError::NotFound) => ApiResponse::not_found("CV_NOT_FOUND", "CV not found"),
        Err(PatchCvError::RepositoryError(e)) => {
            error!("Repository error patching CV {}: {}", cv_id, e);
            ApiResponse::internal_error()
        }
    }
}
