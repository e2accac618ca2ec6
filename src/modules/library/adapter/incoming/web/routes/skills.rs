use actix_web::{delete, get, patch, post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::library::application::ports::incoming::use_cases::{
    CreateSkillCommand, CreateSkillError, DeleteSkillError, ListSkillsError, PatchSkillCommand,
    PatchSkillError, SkillCommandError,
};
use crate::library::application::ports::outgoing::PatchSkillData;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSkillRequest {
    pub name: String,
    pub proficiency: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PatchSkillRequest {
    #[serde(default)]
    pub name: PatchField<String>,

    #[serde(default)]
    pub proficiency: PatchField<String>,
}

impl From<PatchSkillRequest> for PatchSkillData {
    fn from(req: PatchSkillRequest) -> Self {
        PatchSkillData {
            name: req.name,
            proficiency: req.proficiency,
        }
    }
}

fn map_command_error(err: SkillCommandError) -> actix_web::HttpResponse {
    match err {
        SkillCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Skill name cannot be empty")
        }
        SkillCommandError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Skill name must not exceed 100 characters")
        }
    }
}

#[post("/api/library/skills")]
pub async fn create_skill_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateSkillRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    let command = match CreateSkillCommand::new(user.user_id, req.name, req.proficiency) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.library.skills.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateSkillError::RepositoryError(e)) => {
            error!("Repository error creating skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/library/skills")]
pub async fn get_skills_handler(user: VerifiedUser, data: web::Data<AppState>) -> impl Responder {
    match data.library.skills.list.execute(user.user_id).await {
        Ok(items) => ApiResponse::success(items),
        Err(ListSkillsError::RepositoryError(e)) => {
            error!("Repository error listing skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/library/skills/{id}")]
pub async fn patch_skill_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<PatchSkillRequest>,
) -> impl Responder {
    let id = path.into_inner();

    let command = match PatchSkillCommand::new(payload.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data
        .library
        .skills
        .patch
        .execute(user.user_id, id, command)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(PatchSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(PatchSkillError::RepositoryError(e)) => {
            error!("Repository error patching skill {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/library/skills/{id}")]
pub async fn delete_skill_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.library.skills.delete.execute(user.user_id, id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(DeleteSkillError::RepositoryError(e)) => {
            error!("Repository error deleting skill {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
