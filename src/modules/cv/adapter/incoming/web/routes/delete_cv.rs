use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::cv::application::ports::incoming::use_cases::DeleteCvError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/cvs/{cv_id}")]
pub async fn delete_cv_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cv_id = path.into_inner();

    match data.cvs.delete.execute(user.user_id, cv_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteCvError::NotFound) => ApiResponse::not_found("CV_NOT_FOUND", "CV not found"),
        Err(DeleteCvError::RepositoryError(e)) => {
            error!("Repository error deleting CV {}: {}", cv_id, e);
            ApiResponse::internal_error()
        }
    }
}
