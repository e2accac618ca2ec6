use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::cv::application::ports::incoming::use_cases::{
    CreateCvCommand, CreateCvError, CvCommandError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCvRequest {
    pub title: String,
    pub template: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

pub(super) fn map_command_error(err: CvCommandError) -> actix_web::HttpResponse {
    match err {
        CvCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        CvCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", "Title must not exceed 150 characters")
        }
        CvCommandError::EmptyTemplate => {
            ApiResponse::bad_request("EMPTY_TEMPLATE", "Template cannot be empty")
        }
    }
}

#[post("/api/cvs")]
pub async fn create_cv_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateCvRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    let command =
        match CreateCvCommand::new(user.user_id, req.title, req.template, req.is_default) {
            Ok(cmd) => cmd,
            Err(err) => return map_command_error(err),
        };

    match data.cvs.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateCvError::RepositoryError(e)) => {
            error!("Repository error creating CV: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;
    use uuid::Uuid;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer;

    #[actix_web::test]
    async fn blank_title_is_rejected_before_the_store() {
        let (state, token_provider) = TestAppStateBuilder::for_user(Uuid::new_v4()).build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider)
                .service(create_cv_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/cvs")
            .insert_header(bearer())
            .set_json(json!({ "title": "   " }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
