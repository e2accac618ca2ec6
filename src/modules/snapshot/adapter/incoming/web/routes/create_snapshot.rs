use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::shared::api::ApiResponse;
use crate::snapshot::application::ports::incoming::use_cases::CreateSnapshotError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSnapshotRequest {
    pub cv_id: Uuid,
    pub application_id: Option<Uuid>,
}

#[post("/api/snapshots")]
pub async fn create_snapshot_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateSnapshotRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    match data
        .snapshots
        .create
        .execute(user.user_id, req.cv_id, req.application_id)
        .await
    {
        Ok(snapshot) => ApiResponse::created(snapshot),
        Err(CreateSnapshotError::CvNotFound) => {
            ApiResponse::not_found("CV_NOT_FOUND", "CV not found")
        }
        Err(CreateSnapshotError::ApplicationNotFound) => {
            ApiResponse::not_found("APPLICATION_NOT_FOUND", "Application not found")
        }
        Err(CreateSnapshotError::Conflict) => ApiResponse::conflict(
            "SNAPSHOT_CONFLICT",
            "A concurrent snapshot exists for this application",
        ),
        Err(CreateSnapshotError::RepositoryError(e)) => {
            error!("Repository error creating snapshot from CV {}: {}", req.cv_id, e);
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

    use crate::snapshot::application::ports::incoming::use_cases::CreateSnapshotUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer;
    use crate::tests::support::stubs::StubCreateSnapshot;

    async fn call(stub: StubCreateSnapshot) -> StatusCode {
        let mut builder = TestAppStateBuilder::for_user(Uuid::new_v4());
        builder.snapshots.create = Arc::new(stub) as Arc<dyn CreateSnapshotUseCase + Send + Sync>;
        let (state, token_provider) = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider)
                .service(create_snapshot_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/snapshots")
            .insert_header(bearer())
            .set_json(json!({
                "cv_id": Uuid::new_v4(),
                "application_id": Uuid::new_v4()
            }))
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn foreign_cv_answers_404() {
        assert_eq!(
            call(StubCreateSnapshot::cv_not_found()).await,
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn replace_race_answers_409() {
        assert_eq!(
            call(StubCreateSnapshot::conflict()).await,
            StatusCode::CONFLICT
        );
    }
}
