use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::job_application::application::ports::incoming::use_cases::GetApplicationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/applications/{id}")]
pub async fn get_application_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.applications.get_single.execute(user.user_id, id).await {
        Ok(application) => ApiResponse::success(application),
        Err(GetApplicationError::NotFound) => {
            ApiResponse::not_found("APPLICATION_NOT_FOUND", "Application not found")
        }
        Err(GetApplicationError::RepositoryError(e)) => {
            error!("Repository error fetching application {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
