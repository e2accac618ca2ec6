use std::sync::Arc;

use crate::job_application::application::ports::incoming::use_cases::{
    CreateApplicationUseCase, DeleteApplicationUseCase, GetApplicationUseCase,
    ListApplicationsUseCase, PatchApplicationUseCase,
};

#[derive(Clone)]
pub struct ApplicationUseCases {
    pub create: Arc<dyn CreateApplicationUseCase + Send + Sync>,
    pub get_list: Arc<dyn ListApplicationsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetApplicationUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchApplicationUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteApplicationUseCase + Send + Sync>,
}
