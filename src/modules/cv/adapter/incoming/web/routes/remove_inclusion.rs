use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::cv::application::ports::incoming::use_cases::RemoveInclusionError;
use crate::cv::application::ports::outgoing::CvSection;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/cvs/{cv_id}/inclusions/{section}/{item_id}")]
pub async fn remove_inclusion_handler(
    user: VerifiedUser,
    path: web::Path<(Uuid, CvSection, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (cv_id, section, item_id) = path.into_inner();

    match data
        .cvs
        .remove_inclusion
        .execute(user.user_id, cv_id, section, item_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(RemoveInclusionError::NotFound) => {
            ApiResponse::not_found("INCLUSION_NOT_FOUND", "Inclusion not found")
        }
        Err(RemoveInclusionError::RepositoryError(e)) => {
            error!(
                "Repository error removing inclusion from CV {}: {}",
                cv_id, e
            );
            ApiResponse::internal_error()
        }
    }
}
