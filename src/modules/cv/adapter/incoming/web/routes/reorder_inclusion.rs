use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::cv::application::ports::incoming::use_cases::ReorderInclusionError;
use crate::cv::application::ports::outgoing::CvSection;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ReorderInclusionRequest {
    pub sort_order: i32,
}

#[patch("/api/cvs/{cv_id}/inclusions/{section}/{item_id}")]
pub async fn reorder_inclusion_handler(
    user: VerifiedUser,
    path: web::Path<(Uuid, CvSection, Uuid)>,
    data: web::Data<AppState>,
    payload: web::Json<ReorderInclusionRequest>,
) -> impl Responder {
    let (cv_id, section, item_id) = path.into_inner();
    let sort_order = payload.into_inner().sort_order;

    match data
        .cvs
        .reorder_inclusion
        .execute(user.user_id, cv_id, section, item_id, sort_order)
        .await
    {
        Ok(()) => ApiResponse::success(serde_json::json!({
            "cv_id": cv_id,
            "section": section,
            "item_id": item_id,
            "sort_order": sort_order,
        })),
        Err(ReorderInclusionError::NotFound) => {
            ApiResponse::not_found("INCLUSION_NOT_FOUND", "Inclusion not found")
        }
        Err(ReorderInclusionError::RepositoryError(e)) => {
            error!(
                "Repository error reordering inclusion in CV {}: {}",
                cv_id, e
            );
            ApiResponse::internal_error()
        }
    }
}
