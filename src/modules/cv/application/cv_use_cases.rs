use std::sync::Arc;

use crate::cv::application::ports::incoming::use_cases::{
    AddInclusionUseCase, CreateCvUseCase, DeleteCvUseCase, GetComposedCvUseCase, GetCvsUseCase,
    PatchCvUseCase, RemoveInclusionUseCase, ReorderInclusionUseCase,
};

#[derive(Clone)]
pub struct CvUseCases {
    pub create: Arc<dyn CreateCvUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetCvsUseCase + Send + Sync>,
    pub get_composed: Arc<dyn GetComposedCvUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchCvUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCvUseCase + Send + Sync>,
    pub add_inclusion: Arc<dyn AddInclusionUseCase + Send + Sync>,
    pub remove_inclusion: Arc<dyn RemoveInclusionUseCase + Send + Sync>,
    pub reorder_inclusion: Arc<dyn ReorderInclusionUseCase + Send + Sync>,
}
