use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CVStack API",
        version = "1.0.0",
        description = "Career library, CV composition and snapshot API",
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
        )
    ),
    tags(
        (name = "library", description = "Master records: work experience, education, skills, projects"),
        (name = "cvs", description = "CV documents, inclusions and composed reads"),
        (name = "applications", description = "Job applications"),
        (name = "snapshots", description = "Immutable point-in-time CV copies"),
    )
)]
pub struct ApiDoc;

pub fn configure_openapi() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();

    // Bearer tokens come from the external identity service.
    if openapi.components.is_none() {
        openapi.components = Some(Default::default());
    }
    if let Some(components) = openapi.components.as_mut() {
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }

    openapi
}
