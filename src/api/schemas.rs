use serde::Serialize;
use utoipa::ToSchema;

/// Generic success envelope mirrored by `shared::api::ApiResponse`.
#[derive(Serialize, ToSchema)]
pub struct SuccessResponse<T: ToSchema> {
    pub success: bool,
    pub data: Option<T>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Generic error envelope: `success` is false and `error` carries a stable
/// machine-readable code plus a human-readable message.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}
