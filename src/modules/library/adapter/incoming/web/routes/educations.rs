use actix_web::{delete, get, patch, post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::library::application::ports::incoming::use_cases::{
    CreateEducationCommand, CreateEducationError, DeleteEducationError, EducationCommandError,
    ListEducationsError, PatchEducationCommand, PatchEducationError,
};
use crate::library::application::ports::outgoing::PatchEducationData;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateEducationRequest {
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PatchEducationRequest {
    #[serde(default)]
    pub institution: PatchField<String>,

    #[serde(default)]
    pub degree: PatchField<String>,

    #[serde(default)]
    pub field_of_study: PatchField<String>,

    #[serde(default)]
    pub start_date: PatchField<NaiveDate>,

    #[serde(default)]
    pub end_date: PatchField<NaiveDate>,

    #[serde(default)]
    pub description: PatchField<String>,
}

impl From<PatchEducationRequest> for PatchEducationData {
    fn from(req: PatchEducationRequest) -> Self {
        PatchEducationData {
            institution: req.institution,
            degree: req.degree,
            field_of_study: req.field_of_study,
            start_date: req.start_date,
            end_date: req.end_date,
            description: req.description,
        }
    }
}

fn map_command_error(err: EducationCommandError) -> actix_web::HttpResponse {
    match err {
        EducationCommandError::EmptyInstitution => {
            ApiResponse::bad_request("EMPTY_INSTITUTION", "Institution cannot be empty")
        }
        EducationCommandError::EmptyDegree => {
            ApiResponse::bad_request("EMPTY_DEGREE", "Degree cannot be empty")
        }
        EducationCommandError::EndBeforeStart => {
            ApiResponse::bad_request("END_BEFORE_START", "End date cannot precede start date")
        }
    }
}

#[post("/api/library/educations")]
pub async fn create_education_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateEducationRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    let command = match CreateEducationCommand::new(
        user.user_id,
        req.institution,
        req.degree,
        req.field_of_study,
        req.start_date,
        req.end_date,
        req.description,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.library.educations.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateEducationError::RepositoryError(e)) => {
            error!("Repository error creating education: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/library/educations")]
pub async fn get_educations_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.library.educations.list.execute(user.user_id).await {
        Ok(items) => ApiResponse::success(items),
        Err(ListEducationsError::RepositoryError(e)) => {
            error!("Repository error listing educations: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/library/educations/{id}")]
pub async fn patch_education_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<PatchEducationRequest>,
) -> impl Responder {
    let id = path.into_inner();

    let command = match PatchEducationCommand::new(payload.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data
        .library
        .educations
        .patch
        .execute(user.user_id, id, command)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(PatchEducationError::NotFound) => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education not found")
        }
        Err(PatchEducationError::RepositoryError(e)) => {
            error!("Repository error patching education {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/library/educations/{id}")]
pub async fn delete_education_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .library
        .educations
        .delete
        .execute(user.user_id, id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteEducationError::NotFound) => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education not found")
        }
        Err(DeleteEducationError::RepositoryError(e)) => {
            error!("Repository error deleting education {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
