use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::job_application::application::ports::incoming::use_cases::{
    ApplicationCommandError, CreateApplicationCommand, CreateApplicationError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateApplicationRequest {
    pub company: String,
    pub position: String,
    pub status: Option<String>,
    pub job_url: Option<String>,
    pub notes: Option<String>,
    pub applied_at: Option<NaiveDate>,
}

pub(super) fn map_command_error(err: ApplicationCommandError) -> actix_web::HttpResponse {
    match err {
        ApplicationCommandError::EmptyCompany => {
            ApiResponse::bad_request("EMPTY_COMPANY", "Company cannot be empty")
        }
        ApplicationCommandError::EmptyPosition => {
            ApiResponse::bad_request("EMPTY_POSITION", "Position cannot be empty")
        }
        ApplicationCommandError::EmptyStatus => {
            ApiResponse::bad_request("EMPTY_STATUS", "Status cannot be empty")
        }
    }
}

#[post("/api/applications")]
pub async fn create_application_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateApplicationRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    let command = match CreateApplicationCommand::new(
        user.user_id,
        req.company,
        req.position,
        req.status,
        req.job_url,
        req.notes,
        req.applied_at,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.applications.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateApplicationError::RepositoryError(e)) => {
            error!("Repository error creating application: {}", e);
            ApiResponse::internal_error()
        }
    }
}
