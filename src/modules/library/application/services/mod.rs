pub mod education_service;
pub mod project_service;
pub mod skill_service;
pub mod work_experience_service;

pub use education_service::EducationService;
pub use project_service::ProjectService;
pub use skill_service::SkillService;
pub use work_experience_service::WorkExperienceService;
