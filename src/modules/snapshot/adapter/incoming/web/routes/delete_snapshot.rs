use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::shared::api::ApiResponse;
use crate::snapshot::application::ports::incoming::use_cases::DeleteSnapshotError;
use crate::AppState;

#[delete("/api/snapshots/{id}")]
pub async fn delete_snapshot_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.snapshots.delete.execute(user.user_id, id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteSnapshotError::NotFound) => {
            ApiResponse::not_found("SNAPSHOT_NOT_FOUND", "Snapshot not found")
        }
        Err(DeleteSnapshotError::RepositoryError(e)) => {
            error!("Repository error deleting snapshot {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
