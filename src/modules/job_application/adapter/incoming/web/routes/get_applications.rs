use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::job_application::application::ports::incoming::use_cases::ListApplicationsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/applications")]
pub async fn get_applications_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.applications.get_list.execute(user.user_id).await {
        Ok(applications) => ApiResponse::success(applications),
        Err(ListApplicationsError::RepositoryError(e)) => {
            error!("Repository error listing applications: {}", e);
            ApiResponse::internal_error()
        }
    }
}
