use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::shared::api::ApiResponse;
use crate::snapshot::application::ports::incoming::use_cases::GetSnapshotError;
use crate::AppState;

#[get("/api/snapshots/{id}")]
pub async fn get_snapshot_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.snapshots.get_single.execute(user.user_id, id).await {
        Ok(snapshot) => ApiResponse::success(snapshot),
        Err(GetSnapshotError::NotFound) => {
            ApiResponse::not_found("SNAPSHOT_NOT_FOUND", "Snapshot not found")
        }
        Err(GetSnapshotError::RepositoryError(e)) => {
            error!("Repository error fetching snapshot {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
