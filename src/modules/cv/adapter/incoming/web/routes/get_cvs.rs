use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::cv::application::ports::incoming::use_cases::GetCvsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/cvs")]
pub async fn get_cvs_handler(user: VerifiedUser, data: web::Data<AppState>) -> impl Responder {
    match data.cvs.get_list.execute(user.user_id).await {
        Ok(cvs) => ApiResponse::success(cvs),
        Err(GetCvsError::RepositoryError(e)) => {
            error!("Repository error listing CVs: {}", e);
            ApiResponse::internal_error()
        }
    }
}
