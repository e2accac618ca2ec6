use std::sync::Arc;

use crate::snapshot::application::ports::incoming::use_cases::{
    CreateSnapshotUseCase, DeleteSnapshotUseCase, GetApplicationSnapshotUseCase,
    GetSnapshotUseCase,
};

#[derive(Clone)]
pub struct SnapshotUseCases {
    pub create: Arc<dyn CreateSnapshotUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSnapshotUseCase + Send + Sync>,
    pub get_by_application: Arc<dyn GetApplicationSnapshotUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSnapshotUseCase + Send + Sync>,
}
