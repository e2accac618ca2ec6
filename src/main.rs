pub mod modules;
pub use modules::auth;
pub use modules::cv;
pub use modules::job_application;
pub use modules::library;
pub use modules::profile;
pub use modules::snapshot;
pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

use crate::library::adapter::outgoing::{
    EducationRepositoryPostgres, ProjectRepositoryPostgres, SkillRepositoryPostgres,
    WorkExperienceRepositoryPostgres,
};
use crate::library::application::library_use_cases::{
    EducationUseCases, LibraryUseCases, ProjectUseCases, SkillUseCases, WorkExperienceUseCases,
};
use crate::library::application::services::{
    EducationService, ProjectService, SkillService, WorkExperienceService,
};

use crate::cv::adapter::outgoing::{CvQueryPostgres, CvRepositoryPostgres, InclusionRepositoryPostgres};
use crate::cv::application::cv_use_cases::CvUseCases;
use crate::cv::application::services::{
    AddInclusionService, CreateCvService, DeleteCvService, GetComposedCvService, GetCvsService,
    PatchCvService, RemoveInclusionService, ReorderInclusionService,
};

use crate::job_application::adapter::outgoing::ApplicationRepositoryPostgres;
use crate::job_application::application::application_use_cases::ApplicationUseCases;
use crate::job_application::application::services::ApplicationService;

use crate::profile::adapter::outgoing::ProfileQueryPostgres;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::services::GetProfileService;

use crate::snapshot::adapter::outgoing::{SnapshotQueryPostgres, SnapshotRepositoryPostgres};
use crate::snapshot::application::services::{
    CreateSnapshotService, DeleteSnapshotService, GetApplicationSnapshotService,
    GetSnapshotService,
};
use crate::snapshot::application::snapshot_use_cases::SnapshotUseCases;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub library: LibraryUseCases,
    pub cvs: CvUseCases,
    pub applications: ApplicationUseCases,
    pub snapshots: SnapshotUseCases,
    pub profile: ProfileUseCases,
}

fn build_app_state(db: &Arc<DatabaseConnection>) -> AppState {
    // Library store
    let work_service = Arc::new(WorkExperienceService::new(
        WorkExperienceRepositoryPostgres::new(Arc::clone(db)),
    ));
    let education_service = Arc::new(EducationService::new(EducationRepositoryPostgres::new(
        Arc::clone(db),
    )));
    let skill_service = Arc::new(SkillService::new(SkillRepositoryPostgres::new(Arc::clone(
        db,
    ))));
    let project_service = Arc::new(ProjectService::new(ProjectRepositoryPostgres::new(
        Arc::clone(db),
    )));

    let library = LibraryUseCases {
        work_experiences: WorkExperienceUseCases {
            create: work_service.clone(),
            list: work_service.clone(),
            patch: work_service.clone(),
            delete: work_service,
        },
        educations: EducationUseCases {
            create: education_service.clone(),
            list: education_service.clone(),
            patch: education_service.clone(),
            delete: education_service,
        },
        skills: SkillUseCases {
            create: skill_service.clone(),
            list: skill_service.clone(),
            patch: skill_service.clone(),
            delete: skill_service,
        },
        projects: ProjectUseCases {
            create: project_service.clone(),
            list: project_service.clone(),
            patch: project_service.clone(),
            delete: project_service,
        },
    };

    // Composition engine
    let cv_repo = CvRepositoryPostgres::new(Arc::clone(db));
    let inclusion_repo = InclusionRepositoryPostgres::new(Arc::clone(db));

    let cvs = CvUseCases {
        create: Arc::new(CreateCvService::new(cv_repo.clone())),
        get_list: Arc::new(GetCvsService::new(cv_repo.clone())),
        get_composed: Arc::new(GetComposedCvService::new(CvQueryPostgres::new(Arc::clone(
            db,
        )))),
        patch: Arc::new(PatchCvService::new(cv_repo.clone())),
        delete: Arc::new(DeleteCvService::new(cv_repo)),
        add_inclusion: Arc::new(AddInclusionService::new(inclusion_repo.clone())),
        remove_inclusion: Arc::new(RemoveInclusionService::new(inclusion_repo.clone())),
        reorder_inclusion: Arc::new(ReorderInclusionService::new(inclusion_repo)),
    };

    // Applications
    let application_service = Arc::new(ApplicationService::new(
        ApplicationRepositoryPostgres::new(Arc::clone(db)),
    ));
    let applications = ApplicationUseCases {
        create: application_service.clone(),
        get_list: application_service.clone(),
        get_single: application_service.clone(),
        patch: application_service.clone(),
        delete: application_service,
    };

    // Snapshot engine
    let snapshot_repo = SnapshotRepositoryPostgres::new(Arc::clone(db));
    let snapshot_query = SnapshotQueryPostgres::new(Arc::clone(db));
    let snapshots = SnapshotUseCases {
        create: Arc::new(CreateSnapshotService::new(snapshot_repo.clone())),
        get_single: Arc::new(GetSnapshotService::new(snapshot_query.clone())),
        get_by_application: Arc::new(GetApplicationSnapshotService::new(snapshot_query)),
        delete: Arc::new(DeleteSnapshotService::new(snapshot_repo)),
    };

    // External profile store, read-only
    let profile = ProfileUseCases {
        get: Arc::new(GetProfileService::new(ProfileQueryPostgres::new(
            Arc::clone(db),
        ))),
    };

    AppState {
        library,
        cvs,
        applications,
        snapshots,
        profile,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    let state = build_app_state(&db_arc);

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::json_config::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::configure_openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Library
    cfg.service(crate::library::adapter::incoming::web::routes::work_experiences::create_work_experience_handler);
    cfg.service(crate::library::adapter::incoming::web::routes::work_experiences::get_work_experiences_handler);
    cfg.service(crate::library::adapter::incoming::web::routes::work_experiences::patch_work_experience_handler);
    cfg.service(crate::library::adapter::incoming::web::routes::work_experiences::delete_work_experience_handler);
    cfg.service(crate::library::adapter::incoming::web::routes::educations::create_education_handler);
    cfg.service(crate::library::adapter::incoming::web::routes::educations::get_educations_handler);
    cfg.service(crate::library::adapter::incoming::web::routes::educations::patch_education_handler);
    cfg.service(crate::library::adapter::incoming::web::routes::educations::delete_education_handler);
    cfg.service(crate::library::adapter::incoming::web::routes::skills::create_skill_handler);
    cfg.service(crate::library::adapter::incoming::web::routes::skills::get_skills_handler);
    cfg.service(crate::library::adapter::incoming::web::routes::skills::patch_skill_handler);
    cfg.service(crate::library::adapter::incoming::web::routes::skills::delete_skill_handler);
    cfg.service(crate::library::adapter::incoming::web::routes::projects::create_project_handler);
    cfg.service(crate::library::adapter::incoming::web::routes::projects::get_projects_handler);
    cfg.service(crate::library::adapter::incoming::web::routes::projects::patch_project_handler);
    cfg.service(crate::library::adapter::incoming::web::routes::projects::delete_project_handler);
    // CVs
    cfg.service(crate::cv::adapter::incoming::web::routes::create_cv::create_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::get_cvs::get_cvs_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::get_cv::get_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::patch_cv::patch_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::delete_cv::delete_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::add_inclusion::add_inclusion_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::remove_inclusion::remove_inclusion_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::reorder_inclusion::reorder_inclusion_handler);
    // Applications
    cfg.service(crate::job_application::adapter::incoming::web::routes::create_application::create_application_handler);
    cfg.service(crate::job_application::adapter::incoming::web::routes::get_applications::get_applications_handler);
    cfg.service(crate::job_application::adapter::incoming::web::routes::get_application::get_application_handler);
    cfg.service(crate::job_application::adapter::incoming::web::routes::patch_application::patch_application_handler);
    cfg.service(crate::job_application::adapter::incoming::web::routes::delete_application::delete_application_handler);
    // Snapshots
    cfg.service(crate::snapshot::adapter::incoming::web::routes::create_snapshot::create_snapshot_handler);
    cfg.service(crate::snapshot::adapter::incoming::web::routes::get_snapshot::get_snapshot_handler);
    cfg.service(crate::snapshot::adapter::incoming::web::routes::get_application_snapshot::get_application_snapshot_handler);
    cfg.service(crate::snapshot::adapter::incoming::web::routes::delete_snapshot::delete_snapshot_handler);
    // Profile (read-only mirror of the external profile store)
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile::get_profile_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
