use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::profile::application::ports::incoming::use_cases::GetProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/profile")]
pub async fn get_profile_handler(user: VerifiedUser, data: web::Data<AppState>) -> impl Responder {
    match data.profile.get.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(GetProfileError::RepositoryError(e)) => {
            error!("Repository error fetching profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
