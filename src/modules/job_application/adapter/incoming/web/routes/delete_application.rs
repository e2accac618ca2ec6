use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::job_application::application::ports::incoming::use_cases::DeleteApplicationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Deleting an application also removes its attached snapshot, if any.
#[delete("/api/applications/{id}")]
pub async fn delete_application_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.applications.delete.execute(user.user_id, id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteApplicationError::NotFound) => {
            ApiResponse::not_found("APPLICATION_NOT_FOUND", "Application not found")
        }
        Err(DeleteApplicationError::RepositoryError(e)) => {
            error!("Repository error deleting application {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
