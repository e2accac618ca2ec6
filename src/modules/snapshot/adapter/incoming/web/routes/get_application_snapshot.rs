use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::shared::api::ApiResponse;
use crate::snapshot::application::ports::incoming::use_cases::GetApplicationSnapshotError;
use crate::AppState;

/// The snapshot attached to an application, located via the snapshot's
/// back-reference.
#[get("/api/applications/{id}/snapshot")]
pub async fn get_application_snapshot_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let application_id = path.into_inner();

    match data
        .snapshots
        .get_by_application
        .execute(user.user_id, application_id)
        .await
    {
        Ok(snapshot) => ApiResponse::success(snapshot),
        Err(GetApplicationSnapshotError::NotFound) => {
            ApiResponse::not_found("SNAPSHOT_NOT_FOUND", "Snapshot not found")
        }
        Err(GetApplicationSnapshotError::RepositoryError(e)) => {
            error!(
                "Repository error fetching snapshot for application {}: {}",
                application_id, e
            );
            ApiResponse::internal_error()
        }
    }
}
