use actix_web::{patch, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use super::create_application::map_command_error;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::job_application::application::ports::incoming::use_cases::{
    PatchApplicationCommand, PatchApplicationError,
};
use crate::job_application::application::ports::outgoing::PatchApplicationData;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PatchApplicationRequest {
    #[serde(default)]
    pub company: PatchField<String>,

    #[serde(default)]
    pub position: PatchField<String>,

    #[serde(default)]
    pub status: PatchField<String>,

    #[serde(default)]
    pub job_url: PatchField<String>,

    #[serde(default)]
    pub notes: PatchField<String>,

    #[serde(default)]
    pub applied_at: PatchField<NaiveDate>,
}

impl From<PatchApplicationRequest> for PatchApplicationData {
    fn from(req: PatchApplicationRequest) -> Self {
        PatchApplicationData {
            company: req.company,
            position: req.position,
            status: req.status,
            job_url: req.job_url,
            notes: req.notes,
            applied_at: req.applied_at,
        }
    }
}

#[patch("/api/applications/{id}")]
pub async fn patch_application_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<PatchApplicationRequest>,
) -> impl Responder {
    let id = path.into_inner();

    let command = match PatchApplicationCommand::new(payload.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data
        .applications
        .patch
        .execute(user.user_id, id, command)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(PatchApplicationError::NotFound) => {
            ApiResponse::not_found("APPLICATION_NOT_FOUND", "Application not found")
        }
        Err(PatchApplicationError::RepositoryError(e)) => {
            error!("Repository error patching application {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
