use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::cv::application::ports::incoming::use_cases::GetComposedCvError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Returns the composed document: CV fields plus the four included
/// sections in their stored order.
#[get("/api/cvs/{cv_id}")]
pub async fn get_cv_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cv_id = path.into_inner();

    match data.cvs.get_composed.execute(user.user_id, cv_id).await {
        Ok(composed) => ApiResponse::success(composed),
        Err(GetComposedCvError::NotFound) => ApiResponse::not_found("CV_NOT_FOUND", "CV not found"),
        Err(GetComposedCvError::RepositoryError(e)) => {
            error!("Repository error composing CV {}: {}", cv_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::cv::application::ports::incoming::use_cases::GetComposedCvUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer;
    use crate::tests::support::stubs::StubGetComposedCv;

    #[actix_web::test]
    async fn foreign_cv_id_answers_404_not_403() {
        let mut builder = TestAppStateBuilder::for_user(Uuid::new_v4());
        builder.cvs.get_composed = Arc::new(StubGetComposedCv::not_found())
            as Arc<dyn GetComposedCvUseCase + Send + Sync>;
        let (state, token_provider) = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider)
                .service(get_cv_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/cvs/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
