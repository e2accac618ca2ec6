use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::GetProfileUseCase;

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn GetProfileUseCase + Send + Sync>,
}
