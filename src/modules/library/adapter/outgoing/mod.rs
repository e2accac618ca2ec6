pub mod education_repository_postgres;
pub mod project_repository_postgres;
pub mod sea_orm_entity;
pub mod skill_repository_postgres;
pub mod work_experience_repository_postgres;

pub use education_repository_postgres::EducationRepositoryPostgres;
pub use project_repository_postgres::ProjectRepositoryPostgres;
pub use skill_repository_postgres::SkillRepositoryPostgres;
pub use work_experience_repository_postgres::WorkExperienceRepositoryPostgres;
