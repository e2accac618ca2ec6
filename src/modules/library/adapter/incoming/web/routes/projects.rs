use actix_web::{delete, get, patch, post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::library::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, DeleteProjectError, ListProjectsError,
    PatchProjectCommand, PatchProjectError, ProjectCommandError,
};
use crate::library::application::ports::outgoing::PatchProjectData;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct PatchProjectRequest {
    #[serde(default)]
    pub name: PatchField<String>,

    #[serde(default)]
    pub description: PatchField<String>,

    #[serde(default)]
    pub url: PatchField<String>,

    #[serde(default)]
    pub tech_stack: PatchField<Vec<String>>,

    #[serde(default)]
    pub start_date: PatchField<NaiveDate>,

    #[serde(default)]
    pub end_date: PatchField<NaiveDate>,
}

impl From<PatchProjectRequest> for PatchProjectData {
    fn from(req: PatchProjectRequest) -> Self {
        PatchProjectData {
            name: req.name,
            description: req.description,
            url: req.url,
            tech_stack: req.tech_stack,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

fn map_command_error(err: ProjectCommandError) -> actix_web::HttpResponse {
    match err {
        ProjectCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Project name cannot be empty")
        }
        ProjectCommandError::EndBeforeStart => {
            ApiResponse::bad_request("END_BEFORE_START", "End date cannot precede start date")
        }
    }
}

#[post("/api/library/projects")]
pub async fn create_project_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateProjectRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    let command = match CreateProjectCommand::new(
        user.user_id,
        req.name,
        req.description,
        req.url,
        req.tech_stack,
        req.start_date,
        req.end_date,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.library.projects.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/library/projects")]
pub async fn get_projects_handler(user: VerifiedUser, data: web::Data<AppState>) -> impl Responder {
    match data.library.projects.list.execute(user.user_id).await {
        Ok(items) => ApiResponse::success(items),
        Err(ListProjectsError::RepositoryError(e)) => {
            error!("Repository error listing projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/library/projects/{id}")]
pub async fn patch_project_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<PatchProjectRequest>,
) -> impl Responder {
    let id = path.into_inner();

    let command = match PatchProjectCommand::new(payload.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data
        .library
        .projects
        .patch
        .execute(user.user_id, id, command)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(PatchProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(PatchProjectError::RepositoryError(e)) => {
            error!("Repository error patching project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/library/projects/{id}")]
pub async fn delete_project_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.library.projects.delete.execute(user.user_id, id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(DeleteProjectError::RepositoryError(e)) => {
            error!("Repository error deleting project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
