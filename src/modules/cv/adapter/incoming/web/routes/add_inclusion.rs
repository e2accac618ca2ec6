use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::cv::application::ports::incoming::use_cases::AddInclusionError;
use crate::cv::application::ports::outgoing::CvSection;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddInclusionRequest {
    pub section: CvSection,
    pub item_id: Uuid,
    /// Opaque ordering value; duplicates across a CV are allowed.
    #[serde(default)]
    pub sort_order: i32,
}

#[post("/api/cvs/{cv_id}/inclusions")]
pub async fn add_inclusion_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<AddInclusionRequest>,
) -> impl Responder {
    let cv_id = path.into_inner();
    let req = payload.into_inner();

    match data
        .cvs
        .add_inclusion
        .execute(user.user_id, cv_id, req.section, req.item_id, req.sort_order)
        .await
    {
        Ok(()) => ApiResponse::created(serde_json::json!({
            "cv_id": cv_id,
            "section": req.section,
            "item_id": req.item_id,
            "sort_order": req.sort_order,
        })),
        Err(AddInclusionError::CvNotFound) => {
            ApiResponse::not_found("CV_NOT_FOUND", "CV not found")
        }
        Err(AddInclusionError::ItemNotFound) => {
            ApiResponse::not_found("ITEM_NOT_FOUND", "Library item not found")
        }
        Err(AddInclusionError::AlreadyIncluded) => {
            ApiResponse::conflict("ALREADY_INCLUDED", "Item already included in this CV")
        }
        Err(AddInclusionError::RepositoryError(e)) => {
            error!("Repository error adding inclusion to CV {}: {}", cv_id, e);
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

    use crate::cv::application::ports::incoming::use_cases::AddInclusionUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer;
    use crate::tests::support::stubs::StubAddInclusion;

    async fn call(stub: StubAddInclusion) -> StatusCode {
        let mut builder = TestAppStateBuilder::for_user(Uuid::new_v4());
        builder.cvs.add_inclusion = Arc::new(stub) as Arc<dyn AddInclusionUseCase + Send + Sync>;
        let (state, token_provider) = builder.build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider)
                .service(add_inclusion_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/cvs/{}/inclusions", Uuid::new_v4()))
            .insert_header(bearer())
            .set_json(json!({
                "section": "work_experience",
                "item_id": Uuid::new_v4(),
                "sort_order": 0
            }))
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn duplicate_pair_maps_to_409() {
        assert_eq!(
            call(StubAddInclusion::already_included()).await,
            StatusCode::CONFLICT
        );
    }

    #[actix_web::test]
    async fn foreign_item_maps_to_404() {
        assert_eq!(
            call(StubAddInclusion::item_not_found()).await,
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn successful_add_answers_201() {
        assert_eq!(call(StubAddInclusion::ok()).await, StatusCode::CREATED);
    }
}
