pub mod add_inclusion_service;
pub mod create_cv_service;
pub mod delete_cv_service;
pub mod get_composed_cv_service;
pub mod get_cvs_service;
pub mod patch_cv_service;
pub mod remove_inclusion_service;
pub mod reorder_inclusion_service;

pub use add_inclusion_service::AddInclusionService;
pub use create_cv_service::CreateCvService;
pub use delete_cv_service::DeleteCvService;
pub use get_composed_cv_service::GetComposedCvService;
pub use get_cvs_service::GetCvsService;
pub use patch_cv_service::PatchCvService;
pub use remove_inclusion_service::RemoveInclusionService;
pub use reorder_inclusion_service::ReorderInclusionService;
