pub mod cv_documents;
pub mod education_inclusions;
pub mod project_inclusions;
pub mod skill_inclusions;
pub mod work_inclusions;
