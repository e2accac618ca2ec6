use actix_web::{delete, get, patch, post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::library::application::ports::incoming::use_cases::{
    CreateWorkExperienceCommand, CreateWorkExperienceError, DeleteWorkExperienceError,
    ListWorkExperiencesError, PatchWorkExperienceCommand, PatchWorkExperienceError,
    WorkExperienceCommandError,
};
use crate::library::application::ports::outgoing::PatchWorkExperienceData;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct CreateWorkExperienceRequest {
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    pub summary: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PatchWorkExperienceRequest {
    #[serde(default)]
    pub company: PatchField<String>,

    #[serde(default)]
    pub role: PatchField<String>,

    #[serde(default)]
    pub location: PatchField<String>,

    #[serde(default)]
    pub start_date: PatchField<NaiveDate>,

    #[serde(default)]
    pub end_date: PatchField<NaiveDate>,

    #[serde(default)]
    pub is_current: PatchField<bool>,

    #[serde(default)]
    pub summary: PatchField<String>,
}

impl From<PatchWorkExperienceRequest> for PatchWorkExperienceData {
    fn from(req: PatchWorkExperienceRequest) -> Self {
        PatchWorkExperienceData {
            company: req.company,
            role: req.role,
            location: req.location,
            start_date: req.start_date,
            end_date: req.end_date,
            is_current: req.is_current,
            summary: req.summary,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: WorkExperienceCommandError) -> actix_web::HttpResponse {
    match err {
        WorkExperienceCommandError::EmptyCompany => {
            ApiResponse::bad_request("EMPTY_COMPANY", "Company cannot be empty")
        }
        WorkExperienceCommandError::EmptyRole => {
            ApiResponse::bad_request("EMPTY_ROLE", "Role cannot be empty")
        }
        WorkExperienceCommandError::EndBeforeStart => {
            ApiResponse::bad_request("END_BEFORE_START", "End date cannot precede start date")
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[post("/api/library/work-experiences")]
pub async fn create_work_experience_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateWorkExperienceRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    let command = match CreateWorkExperienceCommand::new(
        user.user_id,
        req.company,
        req.role,
        req.location,
        req.start_date,
        req.end_date,
        req.is_current,
        req.summary,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.library.work_experiences.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateWorkExperienceError::RepositoryError(e)) => {
            error!("Repository error creating work experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/library/work-experiences")]
pub async fn get_work_experiences_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .library
        .work_experiences
        .list
        .execute(user.user_id)
        .await
    {
        Ok(items) => ApiResponse::success(items),
        Err(ListWorkExperiencesError::RepositoryError(e)) => {
            error!("Repository error listing work experiences: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/library/work-experiences/{id}")]
pub async fn patch_work_experience_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<PatchWorkExperienceRequest>,
) -> impl Responder {
    let id = path.into_inner();

    let command = match PatchWorkExperienceCommand::new(payload.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data
        .library
        .work_experiences
        .patch
        .execute(user.user_id, id, command)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(PatchWorkExperienceError::NotFound) => {
            ApiResponse::not_found("WORK_EXPERIENCE_NOT_FOUND", "Work experience not found")
        }
        Err(PatchWorkExperienceError::RepositoryError(e)) => {
            error!("Repository error patching work experience {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/library/work-experiences/{id}")]
pub async fn delete_work_experience_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .library
        .work_experiences
        .delete
        .execute(user.user_id, id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteWorkExperienceError::NotFound) => {
            ApiResponse::not_found("WORK_EXPERIENCE_NOT_FOUND", "Work experience not found")
        }
        Err(DeleteWorkExperienceError::RepositoryError(e)) => {
            error!("Repository error deleting work experience {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::library::application::ports::incoming::use_cases::DeleteWorkExperienceUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer;
    use crate::tests::support::stubs::StubDeleteWorkExperience;

    #[actix_web::test]
    async fn create_rejects_empty_company_with_bad_request() {
        let user_id = Uuid::new_v4();
        let (state, token_provider) = TestAppStateBuilder::for_user(user_id).build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider)
                .service(create_work_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/library/work-experiences")
            .insert_header(bearer())
            .set_json(json!({
                "company": "   ",
                "role": "Engineer",
                "start_date": "2020-01-01"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn delete_maps_not_found_to_404() {
        let user_id = Uuid::new_v4();
        let mut builder = TestAppStateBuilder::for_user(user_id);
        builder.library.work_experiences.delete =
            Arc::new(StubDeleteWorkExperience::not_found())
                as Arc<dyn DeleteWorkExperienceUseCase + Send + Sync>;
        let (state, token_provider) = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider)
                .service(delete_work_experience_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/library/work-experiences/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn requests_without_bearer_token_are_unauthorized() {
        let (state, token_provider) = TestAppStateBuilder::for_user(Uuid::new_v4()).build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider)
                .service(get_work_experiences_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/library/work-experiences")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
